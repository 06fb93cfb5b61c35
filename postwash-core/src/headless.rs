// postwash-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use of the engine without holding an
//! instance: build from the embedded defaults, sanitize, scrub, done.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::config::SanitizeConfig;
use crate::engine::DraftEngine;

/// Fully sanitizes a draft using the embedded default configuration,
/// including the trailing scrub pass. This is the primary entry point for
/// callers that do not need a custom configuration.
pub fn sanitize_with_defaults(draft: &str) -> Result<String> {
    let config = SanitizeConfig::load_defaults()?;
    let engine = DraftEngine::new(config)?;
    let sanitized = engine.sanitize(draft);
    Ok(engine.scrub(&sanitized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_with_the_shipped_patterns() -> Result<()> {
        let input = "Keep it under 50 words.\nThis is the real content.";
        assert_eq!(sanitize_with_defaults(input)?, "This is the real content.");
        Ok(())
    }

    #[test]
    fn empty_input_is_an_empty_output() -> Result<()> {
        assert_eq!(sanitize_with_defaults("")?, "");
        Ok(())
    }

    #[test]
    fn scrub_pass_runs_after_the_pipeline() -> Result<()> {
        let input = "Shipping today, hashtag Launch";
        assert_eq!(sanitize_with_defaults(input)?, "Shipping today, #Launch");
        Ok(())
    }
}
