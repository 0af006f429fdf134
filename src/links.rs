//! The site-wide links list.
//!
//! ```yaml
//! - text: GitHub
//!   url: https://github.com/example
//!   icon: github
//! - text: Feed
//!   url: /atom.xml
//!   rel: alternate
//! ```

use crate::metadata::read_yaml;
use crate::scan::ScanError;
use crate::types::Link;
use crate::validate::Sanitize;
use std::path::Path;
use tracing::info;

/// Load and validate the links file. A missing file means no links.
///
/// The first invalid entry fails the load with its zero-based index in the
/// field path, e.g. `[2].url`.
pub fn load_links(path: &Path) -> Result<Vec<Link>, ScanError> {
    if !path.exists() {
        info!(path = %path.display(), "no links file, site has no links");
        return Ok(Vec::new());
    }
    let links: Vec<Link> = read_yaml(path)?;
    for (index, link) in links.iter().enumerate() {
        link.sanitize()
            .map_err(|e| ScanError::Field(e.within(&format!("[{index}]")).in_file(path)))?;
    }
    Ok(links)
}
