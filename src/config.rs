//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the content
//! root. Every key has a default, so an absent file or an empty one gives a
//! working setup for the stock layout:
//!
//! ```text
//! content/
//! ├── config.toml              # Site config (optional)
//! ├── meta/
//! │   └── links.yaml           # Site links (optional)
//! └── posts/
//!     ├── hello-world/
//!     │   ├── meta.yaml        # Post metadata
//!     │   └── content.html     # Post body
//!     └── 2023/
//!         └── recap/           # Nested: slug is "2023/recap"
//!             ├── meta.yaml
//!             └── content.html
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! date_format = "rfc3339"   # or any chrono format string
//! post_template = "post"    # template for posts without `template:`
//!
//! [layout]
//! posts_dir = "posts"
//! meta_file = "meta.yaml"
//! content_file = "content.html"
//! links_file = "meta/links.yaml"
//!
//! [urls]
//! root = ""                 # prefix, e.g. "https://example.com"
//! posts = "posts"
//! suffix = ".html"
//!
//! [processing]
//! max_processes = 4         # Max parallel loaders (omit for auto = CPU cores)
//!
//! [author]                  # Default author for posts without one
//! name = "Jane Doe"
//!
//! [outdated]                # Staleness notice (optional)
//! type = "modified"
//! duration = 365
//! content = "Last updated %d days ago."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{Author, Icon, Link, Outdated};
use crate::validate::{FieldError, Sanitize, require};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// `date_format` value selecting strict RFC 3339 parsing.
pub const RFC3339: &str = "rfc3339";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Field(#[from] FieldError),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Format of `created`/`modified` in post metadata: `"rfc3339"` or a
    /// chrono `strftime`-style pattern that includes an offset.
    pub date_format: String,
    /// Template identifier for posts that do not name one.
    pub post_template: String,
    pub layout: LayoutConfig,
    pub urls: UrlsConfig,
    pub processing: ProcessingConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated: Option<Outdated>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            date_format: RFC3339.to_string(),
            post_template: "post".to_string(),
            layout: LayoutConfig::default(),
            urls: UrlsConfig::default(),
            processing: ProcessingConfig::default(),
            author: None,
            license: None,
            icon: None,
            outdated: None,
        }
    }
}

impl SiteConfig {
    /// Validate required values and the optional site-wide records.
    pub fn validate(&self) -> Result<(), FieldError> {
        require(&self.date_format, "date_format")?;
        require(&self.post_template, "post_template")?;
        self.layout.sanitize().map_err(|e| e.within("layout"))?;
        if let Some(author) = &self.author {
            author.sanitize().map_err(|e| e.within("author"))?;
        }
        if let Some(license) = &self.license {
            license.sanitize().map_err(|e| e.within("license"))?;
        }
        if let Some(icon) = &self.icon {
            icon.sanitize().map_err(|e| e.within("icon"))?;
        }
        if let Some(outdated) = &self.outdated {
            outdated.sanitize().map_err(|e| e.within("outdated"))?;
        }
        Ok(())
    }

    /// Parse a metadata timestamp with the configured `date_format`.
    pub fn parse_timestamp(&self, raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        if self.date_format == RFC3339 {
            DateTime::parse_from_rfc3339(raw)
        } else {
            DateTime::parse_from_str(raw, &self.date_format)
        }
    }
}

/// File and directory names under the content root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Directory holding one subdirectory per post.
    pub posts_dir: String,
    /// Metadata file name inside each post directory.
    pub meta_file: String,
    /// Content file name inside each post directory.
    pub content_file: String,
    /// Links file, relative to the content root.
    pub links_file: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            meta_file: "meta.yaml".to_string(),
            content_file: "content.html".to_string(),
            links_file: "meta/links.yaml".to_string(),
        }
    }
}

impl Sanitize for LayoutConfig {
    fn sanitize(&self) -> Result<(), FieldError> {
        require(&self.posts_dir, "posts_dir")?;
        require(&self.meta_file, "meta_file")?;
        require(&self.content_file, "content_file")?;
        require(&self.links_file, "links_file")?;
        if self.meta_file == self.content_file {
            return Err(FieldError::new(
                "content_file",
                "must differ from meta_file",
            ));
        }
        Ok(())
    }
}

/// Public URL policy for posts: `{root}/{posts}/{slug}{suffix}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlsConfig {
    /// Prefix for every URL, e.g. `"https://example.com"`. Empty for
    /// site-relative URLs.
    pub root: String,
    /// Path segment under which posts are served.
    pub posts: String,
    /// Appended to the slug, e.g. `".html"`.
    pub suffix: String,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            posts: "posts".to_string(),
            suffix: ".html".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel post loaders.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// Load config from `config.toml` in the given directory.
///
/// Returns the stock defaults if the file does not exist. Validation errors
/// carry the config file path.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate().map_err(|e| e.in_file(&config_path))?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Posts Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Format of `created` and `modified` in post metadata.
# "rfc3339" (e.g. 2023-06-01T09:30:00+02:00) or a chrono format string
# that includes a UTC offset, e.g. "%Y-%m-%d %H:%M:%S %z".
date_format = "rfc3339"

# Template used for posts whose metadata has no `template` key.
post_template = "post"

# ---------------------------------------------------------------------------
# Content layout
# ---------------------------------------------------------------------------
[layout]
# Directory (under the content root) with one subdirectory per post.
# Nested directories are allowed; the slug is the path below posts_dir.
posts_dir = "posts"

# A post directory needs both of these files to be picked up.
meta_file = "meta.yaml"
content_file = "content.html"

# Ordered list of site links (url, text, icon, title, rel).
links_file = "meta/links.yaml"

# ---------------------------------------------------------------------------
# Public URLs: {root}/{posts}/{slug}{suffix}
# ---------------------------------------------------------------------------
[urls]
root = ""
posts = "posts"
suffix = ".html"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel post loaders.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4

# ---------------------------------------------------------------------------
# Site-wide defaults (optional)
# ---------------------------------------------------------------------------
# [author]
# name = "Jane Doe"
# url = "https://example.com"
# email = "jane@example.com"
# avatar = "/avatar.png"

# [license]
# url = "https://creativecommons.org/licenses/by/4.0/"
# text = "CC BY 4.0"

# [icon]
# url = "/favicon.png"
# type = "image/png"
# sizes = "32x32"

# Notice shown on posts older than `duration` days, measured from
# `created` or `modified`. `%d` is replaced with the age in days.
# [outdated]
# type = "modified"
# duration = 365
# content = "This post was last updated %d days ago."
"##
}
