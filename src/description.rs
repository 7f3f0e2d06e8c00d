//! Commons description page generation.
//!
//! Renders the wiki-markup text block uploaded alongside a photo: an
//! `{{Information}}` template carrying subject/event/year metadata, a license
//! section, and one `[[Category:...]]` line per category.
//!
//! [`generate_description`] is a pure function — no I/O, deterministic, and
//! total: every combination of empty and non-empty fields produces a valid
//! page. The caption degrades gracefully as tokens go missing:
//!
//! ```text
//! Vanessa Kirby at Toronto Film Festival in 2024   (all three tokens)
//! Vanessa Kirby at Toronto Film Festival           (no year)
//! Vanessa Kirby                                    (subject only)
//! ```

use crate::naming::ParsedName;

/// Stock license template applied when neither the CLI nor a config file
/// supplies one.
pub const DEFAULT_LICENSE: &str = "{{self|cc-by-sa-4.0}}";

/// Stock author credited on the description page.
pub const DEFAULT_AUTHOR: &str = "Jay Dixit";

/// Everything needed to render one photo's description page.
///
/// Built once per run from the parsed filename plus CLI/config options, then
/// passed by reference to the generator and the preview formatter. Nothing
/// here outlives the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadMetadata {
    /// Target filename on the remote site (the photo's base name).
    pub filename: String,
    /// Subject/event/year tokens from the filename.
    pub parsed: ParsedName,
    /// Author display name, also used for the user-page link.
    pub author: String,
    /// License template string, emitted literally.
    pub license: String,
    /// Category labels, one `[[Category:...]]` line each, in order.
    pub categories: Vec<String>,
    /// Free-form extra markup inserted after the Information block.
    pub additional_info: String,
}

/// Render the full description page for `meta`.
///
/// The `Description` field is the subject, suffixed with `" at " + event` and
/// `" in " + year` when those tokens are non-empty (both may apply, in that
/// order). `Date` is the year verbatim. The license string is emitted exactly
/// as supplied. Categories are not deduplicated — callers own that.
pub fn generate_description(meta: &UploadMetadata) -> String {
    let mut caption = meta.parsed.subject.clone();
    if !meta.parsed.event.is_empty() {
        caption.push_str(" at ");
        caption.push_str(&meta.parsed.event);
    }
    if !meta.parsed.year.is_empty() {
        caption.push_str(" in ");
        caption.push_str(&meta.parsed.year);
    }

    let mut page = format!(
        "== {{{{int:filedesc}}}} ==\n\
         {{{{Information\n\
         |Description={{{{en|1={caption}}}}}\n\
         |Source={{{{Own}}}}\n\
         |Author=[[User:{author}|{author}]]\n\
         |Date={year}\n\
         |Permission=\n\
         |other_versions=\n\
         }}}}\n",
        author = meta.author,
        year = meta.parsed.year,
    );

    if !meta.additional_info.is_empty() {
        page.push_str(&meta.additional_info);
        page.push('\n');
    }

    page.push_str("\n== {{int:license-header}} ==\n");
    page.push_str(&meta.license);
    page.push_str("\n\n");

    for category in &meta.categories {
        page.push_str(&format!("[[Category:{category}]]\n"));
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(subject: &str, event: &str, year: &str) -> UploadMetadata {
        UploadMetadata {
            filename: "photo.jpg".to_string(),
            parsed: ParsedName {
                subject: subject.to_string(),
                event: event.to_string(),
                year: year.to_string(),
            },
            author: DEFAULT_AUTHOR.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            categories: Vec::new(),
            additional_info: String::new(),
        }
    }

    #[test]
    fn full_caption_with_event_and_year() {
        let m = meta("Vanessa Kirby", "Toronto Film Festival", "2024");
        let page = generate_description(&m);
        assert!(
            page.contains("|Description={{en|1=Vanessa Kirby at Toronto Film Festival in 2024}}")
        );
        assert!(page.contains("|Date=2024\n"));
    }

    #[test]
    fn caption_without_event_skips_at() {
        let m = meta("Vanessa Kirby", "", "2024");
        let page = generate_description(&m);
        assert!(page.contains("|Description={{en|1=Vanessa Kirby in 2024}}"));
        assert!(!page.contains(" at "));
    }

    #[test]
    fn caption_without_year_skips_in() {
        let m = meta("Vanessa Kirby", "Toronto Film Festival", "");
        let page = generate_description(&m);
        assert!(page.contains("|Description={{en|1=Vanessa Kirby at Toronto Film Festival}}"));
        assert!(!page.contains(" in "));
        assert!(page.contains("|Date=\n"));
    }

    #[test]
    fn subject_only_caption_is_bare() {
        let m = meta("Photo", "", "");
        let page = generate_description(&m);
        assert!(page.contains("|Description={{en|1=Photo}}\n"));
        assert!(!page.contains(" at "));
        assert!(!page.contains(" in "));
    }

    #[test]
    fn license_emitted_literally() {
        let mut m = meta("Photo", "", "");
        m.license = "{{cc-by-4.0|Custom Attribution}}".to_string();
        let page = generate_description(&m);
        assert!(page.contains("{{cc-by-4.0|Custom Attribution}}"));
        assert!(page.contains("== {{int:license-header}} =="));
    }

    #[test]
    fn categories_in_input_order_one_per_line() {
        let mut m = meta("Vanessa Kirby", "Toronto Film Festival", "2024");
        m.categories = vec!["Film festivals".to_string(), "Toronto".to_string()];
        let page = generate_description(&m);

        let lines: Vec<&str> = page
            .lines()
            .filter(|l| l.starts_with("[[Category:"))
            .collect();
        assert_eq!(
            lines,
            vec!["[[Category:Film festivals]]", "[[Category:Toronto]]"]
        );
    }

    #[test]
    fn duplicate_categories_kept() {
        let mut m = meta("Photo", "", "");
        m.categories = vec!["Toronto".to_string(), "Toronto".to_string()];
        let page = generate_description(&m);
        assert_eq!(page.matches("[[Category:Toronto]]").count(), 2);
    }

    #[test]
    fn no_categories_no_category_lines() {
        let page = generate_description(&meta("Photo", "", ""));
        assert!(!page.contains("[[Category:"));
    }

    #[test]
    fn author_rendered_as_user_link() {
        let page = generate_description(&meta("Photo", "", ""));
        assert!(page.contains("|Author=[[User:Jay Dixit|Jay Dixit]]"));
    }

    #[test]
    fn information_block_fixed_fields() {
        let page = generate_description(&meta("Photo", "", ""));
        assert!(page.starts_with("== {{int:filedesc}} ==\n{{Information\n"));
        assert!(page.contains("|Source={{Own}}\n"));
        assert!(page.contains("|Permission=\n"));
        assert!(page.contains("|other_versions=\n"));
    }

    #[test]
    fn additional_info_inserted_after_information_block() {
        let mut m = meta("Photo", "", "");
        m.additional_info = "{{Personality rights}}".to_string();
        let page = generate_description(&m);
        let info_pos = page.find("{{Personality rights}}").unwrap();
        let license_pos = page.find("{{int:license-header}}").unwrap();
        assert!(info_pos < license_pos);
    }

    #[test]
    fn empty_everything_still_renders() {
        let m = meta("", "", "");
        let page = generate_description(&m);
        assert!(page.contains("|Description={{en|1=}}\n"));
    }

    #[test]
    fn deterministic() {
        let m = meta("Vanessa Kirby", "Toronto Film Festival", "2024");
        assert_eq!(generate_description(&m), generate_description(&m));
    }
}
