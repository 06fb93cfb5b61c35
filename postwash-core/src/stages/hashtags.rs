//! Hashtag policy: capping with relocation, plus the standalone scrub pass.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::stages::DraftStage;

lazy_static! {
    static ref HASHTAG_TOKEN: Regex = Regex::new(r"#\w+").unwrap();
    // Refuses to fire after '#' or a word character so the rewrite is
    // idempotent: "#hashtag X" must not become "##X" on a second pass.
    static ref HASHTAG_WORD: Regex = Regex::new(r"(?i)(^|[^#\w])hashtag\s*#?(\w+)").unwrap();
    static ref HIGH_CONTROL: Regex = Regex::new("[\u{0080}-\u{009F}]").unwrap();
    static ref SPACE_RUNS: Regex = Regex::new(r"[ \t]{2,}").unwrap();
}

/// True when the token starting at `start` is bounded by whitespace or the
/// start of the string, which is what makes `#word` a hashtag.
fn is_bounded(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().map_or(true, char::is_whitespace)
}

/// Hashtag tokens in order of appearance.
pub fn find_hashtags(text: &str) -> Vec<&str> {
    HASHTAG_TOKEN
        .find_iter(text)
        .filter(|m| is_bounded(text, m.start()))
        .map(|m| m.as_str())
        .collect()
}

/// Caps the hashtag count. Above the cap, every hashtag is removed from the
/// body and the first `max_hashtags` are relocated to a trailing block,
/// separated from the body by a blank line.
pub struct HashtagReducer {
    max_hashtags: usize,
}

impl HashtagReducer {
    pub fn new(max_hashtags: usize) -> Self {
        Self { max_hashtags }
    }
}

impl DraftStage for HashtagReducer {
    fn name(&self) -> &'static str {
        "hashtags"
    }

    fn apply(&self, draft: &str) -> String {
        let tags = find_hashtags(draft);
        if tags.len() <= self.max_hashtags {
            return draft.to_string();
        }
        debug!(
            "Reducing {} hashtags to {} and relocating them",
            tags.len(),
            self.max_hashtags
        );

        let kept = tags[..self.max_hashtags].join(" ");

        let mut body = String::with_capacity(draft.len());
        let mut last_end = 0usize;
        for m in HASHTAG_TOKEN.find_iter(draft) {
            if is_bounded(draft, m.start()) {
                body.push_str(&draft[last_end..m.start()]);
                last_end = m.end();
            }
        }
        body.push_str(&draft[last_end..]);

        let body = SPACE_RUNS.replace_all(&body, " ");
        let body = body.trim();

        if body.is_empty() {
            kept
        } else {
            format!("{body}\n\n{kept}")
        }
    }
}

/// Standalone scrub pass, usable over already-published or externally-sourced
/// text: strips U+0080-U+009F control characters, then rewrites
/// "hashtag word" / "hashtag #word" text into "#word" form, and trims.
/// Idempotent: scrubbing scrubbed text is a no-op.
pub fn scrub(text: &str) -> String {
    let t = HIGH_CONTROL.replace_all(text, "");
    let t = HASHTAG_WORD.replace_all(&t, "${1}#${2}");
    t.trim().to_string()
}
