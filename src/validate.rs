//! Field-scoped validation errors.
//!
//! Every record read from disk (posts, links, config sections) is checked
//! against a small set of rules: required strings must be non-empty, enum-like
//! strings must be one of a fixed set. A failing check produces a
//! [`FieldError`] naming the field. The caller that knows which file the
//! record came from attaches the path, and callers that know where the record
//! sits inside a larger structure prefix the field path:
//!
//! ```text
//! url                       ← Link::sanitize
//! [2].url                   ← load_links, third entry
//! meta/links.yaml: [2].url  ← with the file attached
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A validation failure scoped to one file and one named field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: invalid field `{}`: {}", .file.display(), .field, .message)]
pub struct FieldError {
    /// File the offending record was read from. Empty until attached.
    pub file: PathBuf,
    /// Dotted field path, e.g. `content`, `author.name`, `[3].url`.
    pub field: String,
    pub message: String,
}

pub(crate) const MSG_EMPTY: &str = "must not be empty";
pub(crate) const MSG_INVALID: &str = "invalid value";

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: PathBuf::new(),
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn empty(field: impl Into<String>) -> Self {
        Self::new(field, MSG_EMPTY)
    }

    pub(crate) fn invalid(field: impl Into<String>) -> Self {
        Self::new(field, MSG_INVALID)
    }

    /// Attach the file the record was read from.
    pub fn in_file(mut self, file: &Path) -> Self {
        self.file = file.to_path_buf();
        self
    }

    /// Prefix the field path with the name of the enclosing field.
    ///
    /// `url` under `license` → `license.url`, under `[3]` → `[3].url`.
    pub fn within(mut self, parent: &str) -> Self {
        self.field = format!("{}.{}", parent, self.field);
        self
    }
}

/// Records that can check their own required fields.
pub trait Sanitize {
    fn sanitize(&self) -> Result<(), FieldError>;
}

/// Fail with an "empty" error for `field` when `value` is empty.
pub(crate) fn require(value: &str, field: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::empty(field))
    } else {
        Ok(())
    }
}
