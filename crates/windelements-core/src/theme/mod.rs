//! Theme merging for the project's global stylesheet
//!
//! Merging is pure: it maps the current file content (if any) to the new
//! content. The caller owns the filesystem write.

/// Light and dark design tokens appended to the stylesheet
pub const THEME_PAYLOAD: &str = include_str!("payload.css");

/// Tailwind v4 single-line import
pub const IMPORT_DIRECTIVE: &str = "@import \"tailwindcss\";";

/// Prefix shared by the legacy `@tailwind base/components/utilities` directives
const LEGACY_DIRECTIVE: &str = "@tailwind";

/// Either marker means the theme was installed before
const THEME_MARKERS: &[&str] = &[":root", "--radius"];

/// Which merge rule applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No stylesheet existed; a new one was produced
    Created,
    /// Theme markers were found; content is unchanged
    AlreadyPresent,
    /// Theme payload was appended to existing content
    Appended { import_added: bool },
}

/// Merge the theme payload into `existing` stylesheet content
pub fn merge(existing: Option<&str>) -> String {
    merge_outcome(existing).0
}

/// Like [`merge`], also reporting which rule applied
pub fn merge_outcome(existing: Option<&str>) -> (String, MergeOutcome) {
    let Some(content) = existing else {
        return (
            format!("{IMPORT_DIRECTIVE}\n\n{THEME_PAYLOAD}"),
            MergeOutcome::Created,
        );
    };

    if has_theme(content) {
        return (content.to_string(), MergeOutcome::AlreadyPresent);
    }

    let import_added = !has_import(content);
    let mut merged = String::with_capacity(
        IMPORT_DIRECTIVE.len() + content.len() + THEME_PAYLOAD.len() + 3,
    );
    if import_added {
        merged.push_str(IMPORT_DIRECTIVE);
        merged.push('\n');
    }
    merged.push_str(content);
    merged.push_str("\n\n");
    merged.push_str(THEME_PAYLOAD);

    (merged, MergeOutcome::Appended { import_added })
}

pub fn has_theme(content: &str) -> bool {
    THEME_MARKERS.iter().any(|marker| content.contains(marker))
}

fn has_import(content: &str) -> bool {
    content.contains(IMPORT_DIRECTIVE) || content.contains(LEGACY_DIRECTIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_has_both_scopes() {
        assert!(THEME_PAYLOAD.starts_with(":root {"));
        assert!(THEME_PAYLOAD.contains(".dark {"));
        assert!(!THEME_PAYLOAD.contains("@import"));
    }

    #[test]
    fn test_new_file_gets_import_then_theme() {
        let (css, outcome) = merge_outcome(None);
        assert_eq!(outcome, MergeOutcome::Created);
        assert!(css.starts_with(IMPORT_DIRECTIVE));
        assert!(css.ends_with(THEME_PAYLOAD));
    }

    #[test]
    fn test_idempotent_on_marked_content() {
        for existing in [
            ":root { --brand: red; }\n",
            "body { border-radius: var(--radius); }",
        ] {
            assert_eq!(merge(Some(existing)), existing);
        }

        let once = merge(Some("body { margin: 0; }\n"));
        assert_eq!(merge(Some(&once)), once);
    }

    #[test]
    fn test_import_prepended_exactly_once() {
        let existing = "body { margin: 0; }\n";
        let (css, outcome) = merge_outcome(Some(existing));
        assert_eq!(outcome, MergeOutcome::Appended { import_added: true });
        assert_eq!(css.matches(IMPORT_DIRECTIVE).count(), 1);

        let import_at = css.find(IMPORT_DIRECTIVE).unwrap();
        let theme_at = css.find(":root").unwrap();
        assert!(import_at < theme_at);
        assert!(css.contains(existing));
    }

    #[test]
    fn test_existing_import_kept() {
        let existing = "@import \"tailwindcss\";\n\nbody { margin: 0; }\n";
        let (css, outcome) = merge_outcome(Some(existing));
        assert_eq!(outcome, MergeOutcome::Appended { import_added: false });
        assert!(css.starts_with(existing));
        assert_eq!(css.matches(IMPORT_DIRECTIVE).count(), 1);
    }

    #[test]
    fn test_legacy_directives_count_as_import() {
        let existing = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";
        let (css, outcome) = merge_outcome(Some(existing));
        assert_eq!(outcome, MergeOutcome::Appended { import_added: false });
        assert!(!css.contains(IMPORT_DIRECTIVE));
    }
}
