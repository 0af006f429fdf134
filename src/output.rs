//! CLI output formatting for the scan and check commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each post leads with
//! its position in publication order and its title; the slug, timestamps and
//! other details follow as indented context lines. The listing reads as the
//! site's table of contents while still letting users trace every entry back
//! to its directory.
//!
//! # Output Format
//!
//! ```text
//! Posts
//! 001 Welcome [top]
//!     Source: posts/welcome/
//!     Created: 2023-01-01 09:00 +00:00
//!     A short tour of the blog...
//! 002 Year in Review
//!     Source: posts/2023/year-in-review/
//!     Created: 2023-12-31 18:00 +01:00
//!     Outdated: Written 290 days ago.
//!
//! Links
//! 001 GitHub → https://github.com/example
//!
//! Config
//!     config.toml
//! ```
//!
//! # Architecture
//!
//! [`format_scan_output`] returns `Vec<String>` for testability and
//! [`print_scan_output`] writes it to stdout. The format function is pure:
//! no I/O apart from checking whether `config.toml` exists, and the current
//! time is passed in.

use crate::order::Order;
use crate::scan::Manifest;
use crate::types::Post;
use chrono::{DateTime, Utc};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a post header: positional index + title, with the pin class for
/// non-default posts.
///
/// ```text
/// 001 Welcome [top]
/// 002 Year in Review
/// ```
fn post_header(index: usize, post: &Post) -> String {
    match post.order {
        Order::Default => format!("{} {}", format_index(index), post.title),
        order => format!("{} {} [{}]", format_index(index), post.title, order),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan output: posts in publication order, links, and config source.
pub fn format_scan_output(
    manifest: &Manifest,
    source_root: &Path,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut lines = Vec::new();
    let detail = indent(1);

    lines.push("Posts".to_string());
    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(post_header(i + 1, post));
        lines.push(format!(
            "{}Source: {}/{}/",
            detail, manifest.config.layout.posts_dir, post.slug
        ));
        lines.push(format!(
            "{}Created: {}",
            detail,
            post.created.format("%Y-%m-%d %H:%M %:z")
        ));

        let summary = truncate_desc(post.summary.trim(), 60);
        if !summary.is_empty() {
            lines.push(format!("{}{}", detail, summary));
        }

        if let Some(notice) = manifest
            .config
            .outdated
            .as_ref()
            .and_then(|o| o.notice(post, now))
        {
            lines.push(format!("{}Outdated: {}", detail, notice));
        }
    }

    if !manifest.links.is_empty() {
        lines.push(String::new());
        lines.push("Links".to_string());
        for (i, link) in manifest.links.iter().enumerate() {
            lines.push(format!("{} {} → {}", format_index(i + 1), link.text, link.url));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", detail));
    } else {
        lines.push(format!("{}(defaults)", detail));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root, Utc::now()) {
        println!("{}", line);
    }
}
