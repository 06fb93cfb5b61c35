//! Prompt-leakage filters.
//!
//! Generated drafts sometimes echo parts of the instruction prompt verbatim.
//! The line filter removes exact structural leakage (a whole echoed line);
//! the sentence filter catches leakage that was inline rather than on its
//! own line.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::sync::Arc;

use crate::patterns::CompiledPatterns;
use crate::stages::DraftStage;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Drops lines that begin with a leakage pattern. Surviving lines are
/// rejoined with a single newline and the result trimmed.
pub struct LeakageLineFilter {
    patterns: Arc<CompiledPatterns>,
}

impl LeakageLineFilter {
    pub fn new(patterns: Arc<CompiledPatterns>) -> Self {
        Self { patterns }
    }
}

impl DraftStage for LeakageLineFilter {
    fn name(&self) -> &'static str {
        "leakage-lines"
    }

    fn apply(&self, draft: &str) -> String {
        let kept: Vec<&str> = LINE_BREAK
            .split(draft)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| {
                let leaked = self.patterns.matches_start(line);
                if leaked {
                    debug!("Dropping leaked instruction line: {:?}", line);
                }
                !leaked
            })
            .collect();
        kept.join("\n").trim().to_string()
    }
}

/// Re-splits on sentence boundaries and drops leaked-instruction sentences.
///
/// The split is `.`, `?`, or `!` followed by whitespace. It is deliberately
/// naive about abbreviations and decimal numbers ("U.S.", "3.5 million");
/// the fragmentation there is an accepted limitation. Kept units are
/// rejoined with ". ", which does not preserve the original delimiters.
pub struct SentenceFilter {
    patterns: Arc<CompiledPatterns>,
}

impl SentenceFilter {
    pub fn new(patterns: Arc<CompiledPatterns>) -> Self {
        Self { patterns }
    }
}

impl DraftStage for SentenceFilter {
    fn name(&self) -> &'static str {
        "leakage-sentences"
    }

    fn apply(&self, draft: &str) -> String {
        let units: Vec<&str> = SENTENCE_BREAK
            .split(draft)
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .collect();

        let kept: Vec<&str> = units
            .iter()
            .copied()
            .filter(|unit| {
                let leaked = self.patterns.matches_start(unit);
                if leaked {
                    debug!("Dropping leaked instruction sentence: {:?}", unit);
                }
                !leaked
            })
            .collect();

        // If nothing survives, or nothing was dropped, retain the previous
        // stage's output unchanged.
        if kept.is_empty() || kept.len() == units.len() {
            return draft.to_string();
        }
        kept.join(". ")
    }
}

/// Number of lines the line filter would drop as leaked instructions.
pub fn leaked_line_count(text: &str, patterns: &CompiledPatterns) -> usize {
    LINE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|line| !line.is_empty() && patterns.matches_start(line))
        .count()
}
