//! Typography normalization: smart punctuation, HTML entity fixups, and
//! whitespace collapsing, plus the URL filter.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;

use crate::stages::DraftStage;

lazy_static! {
    static ref SPACE_RUNS: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    static ref URL_TOKEN: Regex = Regex::new(r"https?://\S+").unwrap();
}

/// Decodes the handful of HTML entities that survive feed extraction.
/// `&amp;` goes last so double-escaped input does not grow new entities.
fn normalize_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Maps smart punctuation to ASCII, collapses tab/space runs, and trims.
pub struct TypographyNormalizer;

impl DraftStage for TypographyNormalizer {
    fn name(&self) -> &'static str {
        "typography"
    }

    fn apply(&self, draft: &str) -> String {
        if draft.is_empty() {
            return String::new();
        }
        let t = normalize_entities(draft);
        let t = t.replace(['\u{2018}', '\u{2019}'], "'");
        let t = t.replace(['\u{201C}', '\u{201D}'], "\"");
        let t = t.replace(['\u{2013}', '\u{2014}'], "-");
        // Literal patch for a recurring typo in one upstream feed. Runs after
        // the quote mapping so the curly-apostrophe spelling is matched too.
        // Deliberately a fixed find-and-replace, not grammar correction.
        let t = t.replace("rival to Microsoft's OpenAI rival", "rival to OpenAI");
        let t = SPACE_RUNS.replace_all(&t, " ");
        t.trim().to_string()
    }
}

/// Removes raw `http(s)://` URLs from the body. The publisher's link card
/// carries the preview, so inline URLs are noise.
pub struct UrlFilter;

impl DraftStage for UrlFilter {
    fn name(&self) -> &'static str {
        "urls"
    }

    fn apply(&self, draft: &str) -> String {
        let t = URL_TOKEN.replace_all(draft, "");
        let t = SPACE_RUNS.replace_all(&t, " ");
        t.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_smart_punctuation_to_ascii() {
        let input = "It\u{2019}s great\u{2014}truly";
        assert_eq!(TypographyNormalizer.apply(input), "It's great-truly");
    }

    #[test]
    fn maps_curly_double_quotes_and_en_dash() {
        let input = "\u{201C}quoted\u{201D} \u{2013} done";
        assert_eq!(TypographyNormalizer.apply(input), "\"quoted\" - done");
    }

    #[test]
    fn collapses_space_runs_and_trims() {
        let input = "  spaced\t\tout   text  ";
        assert_eq!(TypographyNormalizer.apply(input), "spaced out text");
    }

    #[test]
    fn decodes_common_entities() {
        let input = "Ben &amp; Jerry say &quot;hi&quot;&nbsp;now";
        assert_eq!(TypographyNormalizer.apply(input), "Ben & Jerry say \"hi\" now");
    }

    #[test]
    fn applies_the_literal_rival_correction() {
        let input = "A rival to Microsoft\u{2019}s OpenAI rival emerged.";
        assert_eq!(TypographyNormalizer.apply(input), "A rival to OpenAI emerged.");
    }

    #[test]
    fn strips_raw_urls() {
        let input = "Read https://example.com/a?x=1 now";
        assert_eq!(UrlFilter.apply(input), "Read now");
    }

    #[test]
    fn url_filter_keeps_plain_text_intact() {
        let input = "No links here.";
        assert_eq!(UrlFilter.apply(input), "No links here.");
    }
}
