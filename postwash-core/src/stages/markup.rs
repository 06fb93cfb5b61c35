//! Markup normalization for plain-text publishers.
//!
//! The publisher renders plain text, so markdown emphasis markers read as
//! literal asterisks and underscores. This pass strips them, rewrites
//! numbered lists to dash bullets, and tidies blank lines. Standalone, not
//! part of the sanitize pipeline.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC_STAR: Regex = Regex::new(r"\*(.*?)\*").unwrap();
    static ref ITALIC_UNDERSCORE: Regex = Regex::new(r"_(.*?)_").unwrap();
    static ref NUMBERED_ITEM: Regex = Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap();
    static ref BLANK_RUNS: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref SPACE_RUNS: Regex = Regex::new(r"[ \t]{2,}").unwrap();
}

/// Strips markdown emphasis markers (keeping the words), converts numbered
/// list items to dash bullets, caps blank-line runs at one, and trims.
pub fn normalize_markup(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let t = BOLD.replace_all(text, "$1");
    let t = ITALIC_STAR.replace_all(&t, "$1");
    let t = ITALIC_UNDERSCORE.replace_all(&t, "$1");
    let t = t.replace("\r\n", "\n").replace('\r', "\n");
    let t = NUMBERED_ITEM.replace_all(&t, "\u{2013} ");
    let t = BLANK_RUNS.replace_all(&t, "\n\n");
    let t = SPACE_RUNS.replace_all(&t, " ");
    t.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emphasis_markers() {
        assert_eq!(normalize_markup("**bold** and *slanted* and _low_"), "bold and slanted and low");
    }

    #[test]
    fn converts_numbered_lists_to_dash_bullets() {
        let input = "1. First thing\n2. Second thing";
        assert_eq!(normalize_markup(input), "\u{2013} First thing\n\u{2013} Second thing");
    }

    #[test]
    fn caps_blank_line_runs() {
        let input = "para one\n\n\n\npara two";
        assert_eq!(normalize_markup(input), "para one\n\npara two");
    }

    #[test]
    fn normalizes_line_endings() {
        assert_eq!(normalize_markup("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn is_idempotent() {
        let input = "**Launch!**\r\n\n\n1. ship\n2. learn";
        let once = normalize_markup(input);
        assert_eq!(normalize_markup(&once), once);
    }
}
