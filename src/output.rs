//! CLI output formatting.
//!
//! Before any network action, the user sees exactly what was derived from the
//! filename and what will be sent: parsed fields, the merged category list,
//! and the full description page between separator lines.
//!
//! ```text
//! Uploading: vanessa-kirby_toronto-film-festival_2024.jpg
//! Subject: Vanessa Kirby
//! Event: Toronto Film Festival
//! Year: 2024
//! Categories: Film festivals, Toronto
//!
//! Description page:
//! ============================================================
//! == {{int:filedesc}} ==
//! ...
//! ============================================================
//! ```
//!
//! `format_preview` is pure (returns `Vec<String>`, no I/O) for testability;
//! `print_preview` is the stdout wrapper.

use crate::description::UploadMetadata;

const SEPARATOR_WIDTH: usize = 60;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Format the pre-upload preview for `meta` and its rendered description.
pub fn format_preview(meta: &UploadMetadata, description: &str) -> Vec<String> {
    let mut lines = vec![
        format!("Uploading: {}", meta.filename),
        format!("Subject: {}", meta.parsed.subject),
        format!("Event: {}", meta.parsed.event),
        format!("Year: {}", meta.parsed.year),
        format!("Categories: {}", meta.categories.join(", ")),
        String::new(),
        "Description page:".to_string(),
        separator(),
    ];
    lines.extend(description.lines().map(String::from));
    lines.push(separator());
    lines
}

/// Print the preview to stdout.
pub fn print_preview(meta: &UploadMetadata, description: &str) {
    for line in format_preview(meta, description) {
        println!("{line}");
    }
}
