//! # Simple Posts
//!
//! Ingests a directory tree of blog posts into a validated, deduplicated,
//! deterministically ordered collection for downstream rendering.
//! Your filesystem is the data source: every directory under `posts/` that
//! holds a metadata file and a content file is a post, and its path is its
//! slug.
//!
//! # Pipeline
//!
//! ```text
//! 1. Discover  posts/            →  slugs            (walk the tree)
//! 2. Load      slug              →  Draft | Post     (parse, derive, validate)
//! 3. Filter    records           →  published posts  (drafts dropped unchecked)
//! 4. Dedup     posts             →  pass / fail      (slug uniqueness)
//! 5. Sort      posts             →  Manifest         (pin class, then newest first)
//! ```
//!
//! Every stage fully consumes the previous one, and any error aborts the
//! pass: a caller gets either the complete collection or an error naming the
//! file and field to fix. Loads are independent and run in parallel.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Discovery and the ingestion pipeline, produces the [`scan::Manifest`] |
//! | [`post`] | Loads and validates one post directory |
//! | [`metadata`] | Raw YAML metadata as written on disk |
//! | [`dedup`] | Slug uniqueness check |
//! | [`order`] | Pin classes and the publication sort |
//! | [`links`] | Site-wide links list |
//! | [`layout`] | Path and URL resolution traits with config-driven defaults |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Records handed to callers (`Post`, `Link`, `Author`, ...) |
//! | [`validate`] | Field-scoped validation errors |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Drafts Are a Separate Variant
//!
//! A draft is exempt from validation because the loader stops after reading
//! its metadata, not because the rules are relaxed. [`types::PostRecord`]
//! makes that visible: `Draft` carries raw metadata only, `Published` carries
//! a fully checked [`types::Post`].
//!
//! ## Raw Timestamps Stay in the Loader
//!
//! `created` and `modified` are read as text into [`metadata::PostMeta`] and
//! parsed with the site's `date_format`. The published record only holds the
//! typed timestamps and the computed permalink.
//!
//! ## Explicit Sort Key
//!
//! Publication order is a stable sort on `(pin class, newest created)` with
//! `top < default < last`. Exact ties keep discovery order, and discovery
//! order is itself sorted, so output is reproducible across runs and
//! filesystems.

pub mod config;
pub mod dedup;
pub mod layout;
pub mod links;
pub mod metadata;
pub mod order;
pub mod output;
pub mod post;
pub mod scan;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
