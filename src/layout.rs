//! Where things live on disk and on the web.
//!
//! The ingestion pipeline never builds paths or URLs itself. It asks a
//! [`PathResolver`] for file locations and a [`UrlPolicy`] for a post's
//! public URL, so alternative layouts can be plugged in without touching the
//! loader. [`ContentLayout`] and [`SiteUrls`] are the config-driven defaults.

use crate::config::{LayoutConfig, UrlsConfig};
use std::path::{Path, PathBuf};

/// Resolves content file locations.
pub trait PathResolver: Sync {
    /// Root of the post directory tree.
    fn posts_dir(&self) -> PathBuf;
    fn post_meta_path(&self, slug: &str) -> PathBuf;
    fn post_content_path(&self, slug: &str) -> PathBuf;
    /// The site-wide links file.
    fn links_path(&self) -> PathBuf;
}

/// Computes the public URL of a post. Must be a pure function of the slug.
pub trait UrlPolicy: Sync {
    fn post_url(&self, slug: &str) -> String;
}

/// Stock layout: `<root>/<posts_dir>/<slug>/<meta_file|content_file>`.
#[derive(Debug, Clone)]
pub struct ContentLayout {
    root: PathBuf,
    names: LayoutConfig,
}

impl ContentLayout {
    pub fn new(root: &Path, names: &LayoutConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            names: names.clone(),
        }
    }

    fn post_dir(&self, slug: &str) -> PathBuf {
        let mut dir = self.posts_dir();
        // Slugs are always '/'-separated; join per segment for the host OS.
        for segment in slug.split('/').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir
    }
}

impl PathResolver for ContentLayout {
    fn posts_dir(&self) -> PathBuf {
        self.root.join(&self.names.posts_dir)
    }

    fn post_meta_path(&self, slug: &str) -> PathBuf {
        self.post_dir(slug).join(&self.names.meta_file)
    }

    fn post_content_path(&self, slug: &str) -> PathBuf {
        self.post_dir(slug).join(&self.names.content_file)
    }

    fn links_path(&self) -> PathBuf {
        self.root.join(&self.names.links_file)
    }
}

/// Stock URL policy: `{root}/{posts}/{slug}{suffix}`.
#[derive(Debug, Clone)]
pub struct SiteUrls {
    urls: UrlsConfig,
}

impl SiteUrls {
    pub fn new(urls: &UrlsConfig) -> Self {
        Self { urls: urls.clone() }
    }
}

impl UrlPolicy for SiteUrls {
    fn post_url(&self, slug: &str) -> String {
        let root = self.urls.root.trim_end_matches('/');
        let posts = self.urls.posts.trim_matches('/');
        let mut url = String::from(root);
        if !posts.is_empty() {
            url.push('/');
            url.push_str(posts);
        }
        url.push('/');
        url.push_str(slug);
        url.push_str(&self.urls.suffix);
        url
    }
}
