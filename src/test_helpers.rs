//! Shared test utilities for the simple-posts test suite.
//!
//! Provides fixture setup, post directory writers, in-memory `Post`
//! builders, and lookup helpers for scan results.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let post = find_post(&manifest, "first-post");
//! assert_eq!(slugs(&manifest)[0], "welcome");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::order::Order;
use crate::scan::Manifest;
use crate::types::Post;
use chrono::DateTime;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `posts/<slug>/meta.yaml` and `posts/<slug>/content.html` under
/// `root` (stock layout).
pub fn write_post(root: &Path, slug: &str, meta: &str, content: &str) {
    let dir = root.join("posts").join(slug);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("meta.yaml"), meta).unwrap();
    fs::write(dir.join("content.html"), content).unwrap();
}

/// Minimal valid metadata with `modified` equal to `created`.
pub fn meta_yaml(title: &str, created: &str) -> String {
    format!(
        "title: \"{title}\"\ncreated: \"{created}\"\nmodified: \"{created}\"\n\
         summary: Summary\ntags: \"rust,testing\"\n"
    )
}

// =========================================================================
// In-memory posts
// =========================================================================

/// A published post with only slug, order and creation time varying.
pub fn post(slug: &str, order: Order, created: &str) -> Post {
    let created = DateTime::parse_from_rfc3339(created).unwrap();
    Post {
        slug: slug.to_string(),
        title: slug.to_string(),
        permalink: format!("/posts/{slug}.html"),
        created,
        modified: created,
        summary: String::new(),
        content: "body".to_string(),
        tags: "t".to_string(),
        order,
        author: None,
        license: None,
        template: "post".to_string(),
        keywords: "t".to_string(),
        search_title: slug.to_lowercase(),
        search_content: "body".to_string(),
    }
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a post by slug. Panics with the available slugs if missing.
pub fn find_post<'a>(manifest: &'a Manifest, slug: &str) -> &'a Post {
    manifest
        .posts
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| panic!("post {slug:?} not found in {:?}", slugs(manifest)))
}

/// Slugs in manifest order.
pub fn slugs(manifest: &Manifest) -> Vec<&str> {
    manifest.posts.iter().map(|p| p.slug.as_str()).collect()
}
