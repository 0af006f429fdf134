//! Slug uniqueness across a loaded collection.

use crate::scan::ScanError;
use crate::types::Post;
use std::collections::HashSet;

/// Fail on the first slug (in input order) seen a second time.
pub fn check_duplicates(posts: &[Post]) -> Result<(), ScanError> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if !seen.insert(post.slug.as_str()) {
            return Err(ScanError::DuplicateSlug(post.slug.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;
    use crate::test_helpers::post;

    #[test]
    fn unique_slugs_pass() {
        let posts = vec![
            post("a", Order::Default, "2023-01-01T00:00:00Z"),
            post("b/c", Order::Default, "2023-01-01T00:00:00Z"),
        ];
        assert!(check_duplicates(&posts).is_ok());
    }

    #[test]
    fn empty_collection_passes() {
        assert!(check_duplicates(&[]).is_ok());
    }

    #[test]
    fn duplicate_reported() {
        let posts = vec![
            post("a", Order::Default, "2023-01-01T00:00:00Z"),
            post("b", Order::Default, "2023-01-01T00:00:00Z"),
            post("a", Order::Top, "2024-01-01T00:00:00Z"),
        ];
        let result = check_duplicates(&posts);
        assert!(matches!(result, Err(ScanError::DuplicateSlug(ref s)) if s == "a"));
    }
}
