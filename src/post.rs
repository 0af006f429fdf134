//! Loading a single post directory.
//!
//! [`load_post`] turns one discovered slug into a [`PostRecord`]. Drafts stop
//! right after the metadata parse. Everything else is checked field by field
//! in a fixed order, and the first failing check is returned as a
//! [`FieldError`] that names the metadata file and the field:
//!
//! 1. metadata parse (`draft: true` returns here)
//! 2. `content`: content file readable and non-empty
//! 3. `created`: parses with the site date format; permalink computed
//! 4. `modified`: parses with the site date format
//! 5. `title`, `tags`: non-empty
//! 6. `keywords`, `template`: defaulted when empty
//! 7. `order`: empty → default, otherwise top | default | last
//! 8. `author`, `license`: validated when present
//! 9. lowercase search copies

use crate::config::SiteConfig;
use crate::layout::{PathResolver, UrlPolicy};
use crate::metadata::PostMeta;
use crate::order::Order;
use crate::scan::ScanError;
use crate::types::{DraftPost, Post, PostRecord};
use crate::validate::{FieldError, MSG_EMPTY, MSG_INVALID, Sanitize};
use std::fs;

/// Everything a loader needs besides the slug.
#[derive(Clone, Copy)]
pub struct LoadContext<'a> {
    pub config: &'a SiteConfig,
    pub paths: &'a dyn PathResolver,
    pub urls: &'a dyn UrlPolicy,
}

/// Load and validate the post at `slug`.
pub fn load_post(ctx: &LoadContext<'_>, slug: &str) -> Result<PostRecord, ScanError> {
    let meta_path = ctx.paths.post_meta_path(slug);
    let meta = PostMeta::from_file(&meta_path)?;
    if meta.draft {
        return Ok(PostRecord::Draft(DraftPost {
            slug: slug.to_string(),
            meta,
        }));
    }

    let field_err = |field: &str, message: String| {
        ScanError::Field(FieldError::new(field, message).in_file(&meta_path))
    };

    let content = fs::read_to_string(ctx.paths.post_content_path(slug))
        .map_err(|e| field_err("content", e.to_string()))?;
    if content.is_empty() {
        return Err(field_err("content", MSG_EMPTY.to_string()));
    }

    let created = ctx
        .config
        .parse_timestamp(&meta.created)
        .map_err(|e| field_err("created", e.to_string()))?;
    let permalink = ctx.urls.post_url(slug);

    let modified = ctx
        .config
        .parse_timestamp(&meta.modified)
        .map_err(|e| field_err("modified", e.to_string()))?;

    if meta.title.is_empty() {
        return Err(field_err("title", MSG_EMPTY.to_string()));
    }
    if meta.tags.is_empty() {
        return Err(field_err("tags", MSG_EMPTY.to_string()));
    }

    let PostMeta {
        title,
        summary,
        tags,
        order,
        author,
        license,
        template,
        keywords,
        ..
    } = meta;

    let keywords = if keywords.is_empty() {
        tags.clone()
    } else {
        keywords
    };
    let template = if template.is_empty() {
        ctx.config.post_template.clone()
    } else {
        template
    };

    let order = if order.is_empty() {
        Order::Default
    } else {
        order
            .parse::<Order>()
            .map_err(|_| field_err("order", MSG_INVALID.to_string()))?
    };

    if let Some(author) = &author {
        author
            .sanitize()
            .map_err(|e| ScanError::Field(e.within("author").in_file(&meta_path)))?;
    }
    if let Some(license) = &license {
        license
            .sanitize()
            .map_err(|e| ScanError::Field(e.within("license").in_file(&meta_path)))?;
    }

    Ok(PostRecord::Published(Post {
        slug: slug.to_string(),
        search_title: title.to_lowercase(),
        search_content: content.to_lowercase(),
        title,
        permalink,
        created,
        modified,
        summary,
        content,
        tags,
        order,
        author,
        license,
        template,
        keywords,
    }))
}
