//! Filename parsing for the subject_event_year convention.
//!
//! Portfolio photos destined for Commons are named with up to three
//! underscore-delimited tokens: `subject_event_year.ext`. This module provides
//! a single parsing function that extracts all three parts consistently.
//!
//! ## Display Form
//!
//! Dashes within the subject and event tokens are converted to spaces and the
//! result is title-cased:
//! - `vanessa-kirby_toronto-film-festival_2024.jpg` → "Vanessa Kirby",
//!   "Toronto Film Festival", "2024"
//! - `photo.jpg` → "Photo", "", ""
//!
//! The year token is used verbatim — no format validation, since the slot is
//! occasionally used for free-form qualifiers like `2024-09`.

use std::path::Path;

/// Result of parsing a photo filename like `subject_event_year.jpg`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    /// First token, title-cased with dashes converted to spaces.
    /// Empty for an empty filename.
    pub subject: String,
    /// Second token, same transformation. Empty when absent.
    pub event: String,
    /// Third token, verbatim. Empty when absent.
    pub year: String,
}

/// Parse a photo filename following the `subject_event_year.ext` convention.
///
/// Strips one extension, splits the stem on `_`, and normalizes the first two
/// tokens for display. Tokens beyond the third are ignored. Absent tokens
/// degrade to empty strings; no input is an error.
///
/// - `"vanessa-kirby_toronto-film-festival_2024.jpg"` →
///   subject="Vanessa Kirby", event="Toronto Film Festival", year="2024"
/// - `"red-carpet_tiff.jpg"` → subject="Red Carpet", event="Tiff", year=""
/// - `"photo.jpg"` → subject="Photo", event="", year=""
pub fn parse_filename(filename: &str) -> ParsedName {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts = stem.split('_');

    let subject = parts.next().map(title_case).unwrap_or_default();
    let event = parts.next().map(title_case).unwrap_or_default();
    let year = parts.next().map(str::to_string).unwrap_or_default();

    ParsedName {
        subject,
        event,
        year,
    }
}

/// Convert a filename token to its display form: dashes become spaces, the
/// first letter of each whitespace-delimited word is uppercased and the rest
/// lowercased. Whitespace runs are preserved as-is.
fn title_case(token: &str) -> String {
    let spaced = token.replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
