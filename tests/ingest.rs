//! End-to-end ingestion through the public API.

use simple_posts::config::{LayoutConfig, SiteConfig, UrlsConfig};
use simple_posts::layout::{ContentLayout, PathResolver, SiteUrls, UrlPolicy};
use simple_posts::order::Order;
use simple_posts::post::LoadContext;
use simple_posts::scan::{self, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_post(root: &Path, slug: &str, meta: &str, content: &str) {
    let dir = root.join("posts").join(slug);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("meta.yaml"), meta).unwrap();
    fs::write(dir.join("content.html"), content).unwrap();
}

fn meta(title: &str, created: &str, extra: &str) -> String {
    format!(
        "title: {title}\ncreated: {created}\nmodified: {created}\nsummary: s\ntags: t\n{extra}"
    )
}

fn slugs(posts: &[simple_posts::types::Post]) -> Vec<&str> {
    posts.iter().map(|p| p.slug.as_str()).collect()
}

#[test]
fn full_pass_orders_and_filters() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_post(root, "pinned", &meta("Pinned", "2020-01-01T00:00:00Z", "order: top\n"), "a");
    write_post(root, "old", &meta("Old", "2023-01-01T00:00:00Z", ""), "b");
    write_post(root, "new", &meta("New", "2023-06-01T00:00:00Z", ""), "c");
    write_post(root, "end", &meta("End", "2025-01-01T00:00:00Z", "order: last\n"), "d");
    write_post(root, "draft", "draft: true\ncreated: not-a-date\n", "");

    let manifest = scan::scan(root).unwrap();
    assert_eq!(slugs(&manifest.posts), vec!["pinned", "new", "old", "end"]);
    assert_eq!(manifest.posts[0].order, Order::Top);
    assert!(manifest.links.is_empty());
}

#[test]
fn missing_content_root_aborts() {
    let tmp = TempDir::new().unwrap();
    let result = scan::scan(&tmp.path().join("does-not-exist"));
    assert!(matches!(result, Err(ScanError::Walk(_))));
}

#[test]
fn field_error_names_file_and_field() {
    let tmp = TempDir::new().unwrap();
    write_post(
        tmp.path(),
        "untagged",
        "title: T\ncreated: 2023-01-01T00:00:00Z\nmodified: 2023-01-01T00:00:00Z\n",
        "body",
    );

    match scan::scan(tmp.path()) {
        Err(ScanError::Field(e)) => {
            assert_eq!(e.field, "tags");
            assert!(e.file.ends_with("posts/untagged/meta.yaml"));
            assert!(e.to_string().contains("`tags`"));
        }
        other => panic!("expected field error, got {other:?}"),
    }
}

#[test]
fn custom_layout_from_config() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("config.toml"),
        r#"
date_format = "%Y-%m-%d %H:%M:%S %z"

[layout]
posts_dir = "articles"
meta_file = "post.yaml"
content_file = "body.md"

[urls]
root = "https://example.com"
posts = "blog"
suffix = "/"
"#,
    )
    .unwrap();
    let dir = root.join("articles/hello");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("post.yaml"),
        "title: Hello\ncreated: 2023-01-01 10:00:00 +0000\nmodified: 2023-01-01 10:00:00 +0000\ntags: x\n",
    )
    .unwrap();
    fs::write(dir.join("body.md"), "# Hello").unwrap();

    let manifest = scan::scan(root).unwrap();
    assert_eq!(manifest.posts.len(), 1);
    assert_eq!(manifest.posts[0].permalink, "https://example.com/blog/hello/");
}

/// A resolver that only delegates, standing in for a caller-supplied layout.
struct Delegating {
    inner: ContentLayout,
}

impl PathResolver for Delegating {
    fn posts_dir(&self) -> PathBuf {
        self.inner.posts_dir()
    }

    fn post_meta_path(&self, slug: &str) -> PathBuf {
        self.inner.post_meta_path(slug)
    }

    fn post_content_path(&self, slug: &str) -> PathBuf {
        self.inner.post_content_path(slug)
    }

    fn links_path(&self) -> PathBuf {
        self.inner.links_path()
    }
}

struct FlatUrls;

impl UrlPolicy for FlatUrls {
    fn post_url(&self, slug: &str) -> String {
        format!("/{slug}")
    }
}

#[test]
fn custom_resolver_and_url_policy() {
    let tmp = TempDir::new().unwrap();
    write_post(tmp.path(), "a", &meta("A", "2023-01-01T00:00:00Z", ""), "body");

    let config = SiteConfig::default();
    let paths = Delegating {
        inner: ContentLayout::new(tmp.path(), &LayoutConfig::default()),
    };
    let ctx = LoadContext {
        config: &config,
        paths: &paths,
        urls: &FlatUrls,
    };

    let found = scan::discover_slugs(&paths).unwrap();
    let posts = scan::load_posts(&ctx, &found).unwrap();
    assert_eq!(posts[0].permalink, "/a");
}

#[test]
fn duplicate_slug_returns_no_collection() {
    let tmp = TempDir::new().unwrap();
    write_post(tmp.path(), "same", &meta("Same", "2023-01-01T00:00:00Z", ""), "body");

    let config = SiteConfig::default();
    let paths = ContentLayout::new(tmp.path(), &LayoutConfig::default());
    let urls = SiteUrls::new(&UrlsConfig::default());
    let ctx = LoadContext {
        config: &config,
        paths: &paths,
        urls: &urls,
    };

    let result = scan::load_posts(&ctx, &["same".to_string(), "same".to_string()]);
    match result {
        Err(ScanError::DuplicateSlug(slug)) => assert_eq!(slug, "same"),
        other => panic!("expected duplicate slug error, got {other:?}"),
    }
}

#[test]
fn manifest_serializes_to_json() {
    let tmp = TempDir::new().unwrap();
    write_post(tmp.path(), "a", &meta("A", "2023-01-01T00:00:00Z", "order: last\n"), "Body");

    let manifest = scan::scan(tmp.path()).unwrap();
    let json = serde_json::to_value(&manifest).unwrap();
    let post = &json["posts"][0];
    assert_eq!(post["slug"], "a");
    assert_eq!(post["order"], "last");
    assert!(post["created"].as_str().unwrap().starts_with("2023-01-01T00:00:00"));
    assert!(post.get("search_content").is_none());
}
