//! Post metadata files as written on disk.
//!
//! Each post directory carries a YAML metadata file next to its content:
//!
//! ```yaml
//! title: Hello World
//! created: 2023-06-01T09:30:00+02:00
//! modified: 2023-06-02T10:00:00+02:00
//! summary: A first post.
//! tags: intro,meta
//! order: top              # optional: top | default | last
//! draft: false            # optional
//! template: wide          # optional, defaults to the site post template
//! keywords: hello,world   # optional, defaults to tags
//! author:                 # optional override of the site author
//!   name: Guest Writer
//! license:                # optional override of the site license
//!   url: https://creativecommons.org/licenses/by/4.0/
//!   text: CC BY 4.0
//! ```
//!
//! Keys are case-sensitive and unknown keys are ignored. Every key is
//! optional at this level: [`PostMeta`] only captures raw text, and the
//! loader decides what is required. `created` and `modified` stay as text
//! here because their format is a site setting, not a YAML type.

use crate::scan::ScanError;
use crate::types::{Author, Link};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Raw contents of a post metadata file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostMeta {
    pub title: String,
    /// Raw creation timestamp text.
    pub created: String,
    /// Raw modification timestamp text.
    pub modified: String,
    pub summary: String,
    /// Raw tag list text.
    pub tags: String,
    pub order: String,
    pub draft: bool,
    pub author: Option<Author>,
    pub license: Option<Link>,
    pub template: String,
    pub keywords: String,
}

impl PostMeta {
    pub fn from_file(path: &Path) -> Result<Self, ScanError> {
        read_yaml(path)
    }
}

/// Read and deserialize a YAML file. An empty file deserializes as if it
/// held an empty mapping.
pub(crate) fn read_yaml<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ScanError> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(&text).map_err(|source| ScanError::Metadata {
        path: path.to_path_buf(),
        source,
    })
}
