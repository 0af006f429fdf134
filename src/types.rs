//! Records produced by an ingestion pass.
//!
//! A pass builds every record once and hands the result to the caller as an
//! immutable snapshot. Raw metadata text (timestamps as written, unparsed
//! order strings) never reaches these types; it stays in
//! [`crate::metadata::PostMeta`] inside the loader.

use crate::config::SiteConfig;
use crate::metadata::PostMeta;
use crate::order::Order;
use crate::validate::{FieldError, Sanitize, require};
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A published post: every invariant checked, every default applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Slash-separated path of the post directory relative to the posts root.
    pub slug: String,
    pub title: String,
    /// Public URL, computed from the slug once `created` has parsed.
    pub permalink: String,
    pub created: DateTime<FixedOffset>,
    pub modified: DateTime<FixedOffset>,
    pub summary: String,
    pub content: String,
    /// Raw tag list text. Tag resolution happens downstream.
    pub tags: String,
    pub order: Order,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<Link>,
    pub template: String,
    pub keywords: String,
    /// Lowercase copy of `title` for search.
    #[serde(skip)]
    pub search_title: String,
    /// Lowercase copy of `content` for search.
    #[serde(skip)]
    pub search_content: String,
}

impl Post {
    /// Per-post author, falling back to the site-wide default.
    pub fn effective_author<'a>(&'a self, config: &'a SiteConfig) -> Option<&'a Author> {
        self.author.as_ref().or(config.author.as_ref())
    }

    /// Per-post license, falling back to the site-wide default.
    pub fn effective_license<'a>(&'a self, config: &'a SiteConfig) -> Option<&'a Link> {
        self.license.as_ref().or(config.license.as_ref())
    }
}

/// A post marked `draft: true`. Only its metadata was read; nothing was
/// validated and its content file was never opened.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPost {
    pub slug: String,
    pub meta: PostMeta,
}

/// Outcome of loading one post directory.
#[derive(Debug, Clone, PartialEq)]
pub enum PostRecord {
    Draft(DraftPost),
    Published(Post),
}

impl PostRecord {
    pub fn slug(&self) -> &str {
        match self {
            PostRecord::Draft(d) => &d.slug,
            PostRecord::Published(p) => &p.slug,
        }
    }

    /// The published post, or `None` for drafts.
    pub fn into_published(self) -> Option<Post> {
        match self {
            PostRecord::Published(p) => Some(p),
            PostRecord::Draft(_) => None,
        }
    }
}

/// A hyperlink, used for the site links list and for license references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Icon name or image URL, interpreted by the template.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    /// Value for the anchor's `title` attribute.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rel: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub text: String,
}

impl Sanitize for Link {
    fn sanitize(&self) -> Result<(), FieldError> {
        require(&self.text, "text")?;
        require(&self.url, "url")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avatar: String,
}

impl Sanitize for Author {
    fn sanitize(&self) -> Result<(), FieldError> {
        require(&self.name, "name")
    }
}

/// Site icon (`<link rel="icon">`). `kind` and `sizes` are passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Icon {
    #[serde(default)]
    pub url: String,
    /// MIME type.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sizes: String,
}

impl Sanitize for Icon {
    fn sanitize(&self) -> Result<(), FieldError> {
        require(&self.url, "url")
    }
}

/// Which timestamp an [`Outdated`] policy measures age from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutdatedType {
    Created,
    Modified,
}

impl FromStr for OutdatedType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(OutdatedType::Created),
            "modified" => Ok(OutdatedType::Modified),
            _ => Err(FieldError::invalid("type")),
        }
    }
}

/// Staleness notice shown on old posts.
///
/// ```toml
/// [outdated]
/// type = "modified"
/// duration = 365          # days
/// content = "This post was last updated %d days ago."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Outdated {
    /// `created` or `modified`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Age in days after which a post counts as outdated.
    #[serde(default)]
    pub duration: i64,
    /// Plain-text notice. `%d` is replaced with the post's age in days.
    #[serde(default)]
    pub content: String,
}

impl Sanitize for Outdated {
    fn sanitize(&self) -> Result<(), FieldError> {
        self.kind.parse::<OutdatedType>()?;
        require(&self.content, "content")?;
        match self.duration {
            0 => Err(FieldError::empty("duration")),
            d if d < 0 => Err(FieldError::new("duration", "must be greater than 0")),
            _ => Ok(()),
        }
    }
}

impl Outdated {
    /// Notice text for `post` if it is older than the policy allows at `now`.
    ///
    /// Returns `None` for fresh posts and for policies with an unknown `type`
    /// (which [`Sanitize::sanitize`] rejects at config load).
    pub fn notice(&self, post: &Post, now: DateTime<Utc>) -> Option<String> {
        let basis = match self.kind.parse::<OutdatedType>().ok()? {
            OutdatedType::Created => post.created,
            OutdatedType::Modified => post.modified,
        };
        let age = now.signed_duration_since(basis);
        if age <= TimeDelta::try_days(self.duration)? {
            return None;
        }
        Some(self.content.replace("%d", &age.num_days().to_string()))
    }
}
