//! Upload profile loading and option merging.
//!
//! A profile is a small JSON file that pre-fills categories and the license
//! template for a batch of related uploads, so the flags don't have to be
//! retyped per photo:
//!
//! ```json
//! {
//!     "categories": ["Film festivals", "Toronto"],
//!     "license": "{{cc-by-sa-4.0}}"
//! }
//! ```
//!
//! Both keys are optional. Unknown keys are rejected to catch typos early.
//!
//! ## Precedence
//!
//! Explicit CLI flags win over profile values; the profile fills gaps:
//!
//! - **categories**: CLI-supplied categories first, profile categories
//!   appended after. No deduplication — category order is caller-owned.
//! - **license**: `--license` flag → profile `license` → stock default.

use crate::description::DEFAULT_LICENSE;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Upload profile loaded from a JSON config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    /// Categories appended after any CLI-supplied ones.
    pub categories: Vec<String>,
    /// License template used when `--license` is not passed.
    pub license: Option<String>,
}

impl UploadConfig {
    /// Load a profile from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Split a comma-separated category list into trimmed labels.
///
/// Empty entries are dropped: `"Film festivals, Toronto,"` yields two labels.
pub fn parse_category_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Merge CLI categories with profile categories: CLI first, profile appended.
pub fn merge_categories(cli: &[String], config: Option<&UploadConfig>) -> Vec<String> {
    let mut merged = cli.to_vec();
    if let Some(config) = config {
        merged.extend(config.categories.iter().cloned());
    }
    merged
}

/// Resolve the license template. First available source wins:
/// explicit `--license` flag → profile value → [`DEFAULT_LICENSE`].
pub fn resolve_license(cli: Option<&str>, config: Option<&UploadConfig>) -> String {
    cli.map(String::from)
        .or_else(|| config.and_then(|c| c.license.clone()))
        .unwrap_or_else(|| DEFAULT_LICENSE.to_string())
}
