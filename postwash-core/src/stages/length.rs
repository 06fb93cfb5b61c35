//! Word-count limiting.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use crate::stages::DraftStage;

/// Truncates the draft to at most `max_words` whitespace-delimited words,
/// rejoined with single spaces. This can cut mid-sentence.
pub struct LengthLimiter {
    max_words: usize,
}

impl LengthLimiter {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }
}

impl DraftStage for LengthLimiter {
    fn name(&self) -> &'static str {
        "length"
    }

    fn apply(&self, draft: &str) -> String {
        let words: Vec<&str> = draft.split_whitespace().collect();
        if words.len() <= self.max_words {
            return draft.to_string();
        }
        debug!("Truncating draft from {} to {} words", words.len(), self.max_words);
        words[..self.max_words].join(" ")
    }
}
