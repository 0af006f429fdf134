//! Post discovery and the ingestion pipeline.
//!
//! Scans the posts directory tree for post directories, loads each one, and
//! produces an ordered, validated [`Manifest`].
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── meta/links.yaml              # Site links (optional)
//! └── posts/
//!     ├── hello-world/             # slug "hello-world"
//!     │   ├── meta.yaml
//!     │   └── content.html
//!     ├── 2023/
//!     │   └── recap/               # slug "2023/recap"
//!     │       ├── meta.yaml
//!     │       └── content.html
//!     └── notes/                   # no content.html: not a post
//!         └── meta.yaml
//! ```
//!
//! Every directory in the tree is a candidate, including intermediate ones:
//! a directory is a post exactly when both its metadata and content files
//! exist. Symlinked directories are not followed.
//!
//! ## Pipeline
//!
//! ```text
//! discover_slugs → load_post (parallel) → drop drafts → check_duplicates → sort_posts
//! ```
//!
//! Any error aborts the whole pass. No partial collection is ever returned.

use crate::config::{self, SiteConfig};
use crate::dedup::check_duplicates;
use crate::layout::{ContentLayout, PathResolver, SiteUrls};
use crate::links::load_links;
use crate::order::sort_posts;
use crate::post::{LoadContext, load_post};
use crate::types::{Link, Post, PostRecord};
use crate::validate::FieldError;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot walk posts directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Cannot parse {}: {}", .path.display(), .source)]
    Metadata {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("{0}")]
    Field(#[from] FieldError),
    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),
    #[error("Post directory name is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// Result of one ingestion pass.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Published posts in publication order.
    pub posts: Vec<Post>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    pub config: SiteConfig,
}

/// Scan a content root using its `config.toml` (or the defaults).
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    scan_with_config(root, config)
}

/// Scan a content root with an already loaded config.
pub fn scan_with_config(root: &Path, config: SiteConfig) -> Result<Manifest, ScanError> {
    let layout = ContentLayout::new(root, &config.layout);
    let urls = SiteUrls::new(&config.urls);
    let ctx = LoadContext {
        config: &config,
        paths: &layout,
        urls: &urls,
    };

    let slugs = discover_slugs(&layout)?;
    let posts = load_posts(&ctx, &slugs)?;
    let links = load_links(&layout.links_path())?;

    info!(
        root = %root.display(),
        posts = posts.len(),
        links = links.len(),
        "scan complete"
    );

    Ok(Manifest {
        posts,
        links,
        config,
    })
}

/// Find every directory under the posts root holding both post files.
///
/// Slugs are returned sorted. A missing or unreadable posts root is an error,
/// and so is a directory whose name is not valid UTF-8.
pub fn discover_slugs(paths: &dyn PathResolver) -> Result<Vec<String>, ScanError> {
    let root = paths.posts_dir();
    let mut slugs = Vec::new();

    for entry in WalkDir::new(&root) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(&root) else {
            continue;
        };
        let slug = slug_from_relative(rel)
            .ok_or_else(|| ScanError::NonUtf8Path(entry.path().to_path_buf()))?;
        if paths.post_meta_path(&slug).is_file() && paths.post_content_path(&slug).is_file() {
            debug!(slug = %slug, "discovered post");
            slugs.push(slug);
        }
    }

    slugs.sort();
    Ok(slugs)
}

/// Load every slug, drop drafts, reject duplicates, and sort.
///
/// Loads run on the rayon pool. The first failure aborts the pass.
pub fn load_posts(ctx: &LoadContext<'_>, slugs: &[String]) -> Result<Vec<Post>, ScanError> {
    let records = slugs
        .par_iter()
        .map(|slug| load_post(ctx, slug))
        .collect::<Result<Vec<_>, _>>()?;

    let mut posts = Vec::with_capacity(records.len());
    for record in records {
        match record {
            PostRecord::Published(post) => posts.push(post),
            draft => debug!(slug = %draft.slug(), "skipping draft"),
        }
    }

    check_duplicates(&posts)?;
    sort_posts(&mut posts);
    Ok(posts)
}

/// Slash-joined form of a path relative to the posts root. The root itself
/// maps to the empty slug. `None` when a component is not valid UTF-8.
fn slug_from_relative(rel: &Path) -> Option<String> {
    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
