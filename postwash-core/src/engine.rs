//! The `DraftEngine`: ordered application of the sanitization stages.
//!
//! Construction compiles the leakage pattern set and is the only fallible
//! step; every transform afterwards accepts any string and returns a string.
//! The engine is `Send + Sync` and holds no mutable state, so one instance
//! can serve concurrent callers.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::sync::Arc;

use crate::config::SanitizeConfig;
use crate::patterns::{get_or_compile_patterns, CompiledPatterns};
use crate::stages::hashtags::{self, HashtagReducer};
use crate::stages::leakage::{self, LeakageLineFilter, SentenceFilter};
use crate::stages::length::LengthLimiter;
use crate::stages::markup;
use crate::stages::mojibake::MojibakeRepair;
use crate::stages::typography::{TypographyNormalizer, UrlFilter};
use crate::stages::DraftStage;

/// Draft statistics reported by [`DraftEngine::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftStats {
    /// Whitespace-delimited word count.
    pub words: usize,
    /// Bounded hashtag tokens present.
    pub hashtags: usize,
    /// Lines the line filter would drop as leaked instructions.
    pub leakage_lines: usize,
    /// Characters in the U+0080-U+009F control range.
    pub control_chars: usize,
}

pub struct DraftEngine {
    config: SanitizeConfig,
    patterns: Arc<CompiledPatterns>,
    stages: Vec<Box<dyn DraftStage>>,
}

impl DraftEngine {
    pub fn new(config: SanitizeConfig) -> Result<Self> {
        let patterns = get_or_compile_patterns(&config.leakage_patterns)
            .context("Failed to compile leakage patterns for DraftEngine")?;

        let mut stages: Vec<Box<dyn DraftStage>> = vec![
            Box::new(MojibakeRepair),
            Box::new(TypographyNormalizer),
        ];
        if config.strip_urls {
            stages.push(Box::new(UrlFilter));
        }
        stages.push(Box::new(LeakageLineFilter::new(Arc::clone(&patterns))));
        stages.push(Box::new(SentenceFilter::new(Arc::clone(&patterns))));
        // Hashtag capping runs before length limiting, so truncation can cut
        // a relocated tag block. Compatibility quirk, kept deliberately.
        stages.push(Box::new(HashtagReducer::new(config.max_hashtags)));
        stages.push(Box::new(LengthLimiter::new(config.max_words)));

        Ok(Self {
            config,
            patterns,
            stages,
        })
    }

    /// Runs the full normalization pipeline over a draft.
    ///
    /// Never fails and never fabricates content: an empty in yields an empty
    /// out, and an all-leakage draft can come back empty. Choosing a fallback
    /// for an empty result belongs to the caller.
    pub fn sanitize(&self, draft: &str) -> String {
        if draft.is_empty() {
            return String::new();
        }
        let mut current = draft.to_string();
        for stage in &self.stages {
            let next = stage.apply(&current);
            if next != current {
                debug!(
                    "Stage '{}' rewrote draft ({} -> {} bytes)",
                    stage.name(),
                    current.len(),
                    next.len()
                );
            }
            current = next;
        }
        current
    }

    /// Standalone scrub pass; see [`crate::stages::hashtags::scrub`].
    pub fn scrub(&self, text: &str) -> String {
        hashtags::scrub(text)
    }

    /// Standalone markup normalization; see [`crate::stages::markup::normalize_markup`].
    pub fn normalize_markup(&self, text: &str) -> String {
        markup::normalize_markup(text)
    }

    /// Appends a `Source: <title>` footer followed by the link, unless title
    /// or link is blank or the link already occurs in the draft. The link is
    /// compared as a literal substring, never interpreted as a pattern, which
    /// also makes repeated application a no-op.
    pub fn attach_source(&self, draft: &str, title: &str, link: &str) -> String {
        let title = title.trim();
        let link = link.trim();
        if title.is_empty() || link.is_empty() || draft.contains(link) {
            return draft.to_string();
        }
        format!("{draft}\n\nSource: {title}\n{link}")
            .trim()
            .to_string()
    }

    /// Reports statistics about a draft without modifying it.
    pub fn analyze(&self, text: &str) -> DraftStats {
        DraftStats {
            words: text.split_whitespace().count(),
            hashtags: hashtags::find_hashtags(text).len(),
            leakage_lines: leakage::leaked_line_count(text, &self.patterns),
            control_chars: text
                .chars()
                .filter(|c| ('\u{0080}'..='\u{009F}').contains(c))
                .count(),
        }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &SanitizeConfig {
        &self.config
    }
}
