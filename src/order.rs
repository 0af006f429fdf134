//! Publication order.
//!
//! Posts fall into three pin classes, written as the `order` metadata key:
//!
//! | `order`          | Class   | Position                         |
//! |------------------|---------|----------------------------------|
//! | `top`            | Top     | first, in input order            |
//! | *(empty)*, `default` | Default | middle, newest `created` first |
//! | `last`           | Last    | end, in input order              |
//!
//! The sort key is `(class rank, Reverse(created))` under a stable sort, so
//! within a class posts are newest first and exact ties keep input order.
//! Pinned posts with different creation times are therefore ordered newest
//! first as well.

use crate::types::Post;
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Pin class of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Top,
    #[default]
    Default,
    Last,
}

impl Order {
    /// Sort rank: top < default < last.
    pub fn rank(self) -> u8 {
        match self {
            Order::Top => 0,
            Order::Default => 1,
            Order::Last => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Top => "top",
            Order::Default => "default",
            Order::Last => "last",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrder(pub String);

impl FromStr for Order {
    type Err = UnknownOrder;

    /// Parse a non-empty `order` value. Empty input is handled by the loader.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Order::Top),
            "default" => Ok(Order::Default),
            "last" => Ok(Order::Last),
            other => Err(UnknownOrder(other.to_string())),
        }
    }
}

/// Stably sort posts into publication order.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by_key(|p| (p.order.rank(), Reverse(p.created)));
}
