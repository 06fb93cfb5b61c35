//! Configuration management for `postwash-core`.
//!
//! This module defines the sanitization configuration: the word and hashtag
//! caps, URL stripping, and the leakage pattern set. It handles
//! serialization/deserialization of YAML configurations and provides
//! utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed length for a leakage pattern string.
pub const MAX_PATTERN_LENGTH: usize = 200;

/// Default cap on whitespace-delimited words in a sanitized draft.
pub const DEFAULT_MAX_WORDS: usize = 180;

/// Default cap on hashtag tokens retained in a sanitized draft.
pub const DEFAULT_MAX_HASHTAGS: usize = 3;

/// Represents the top-level configuration for the sanitization pipeline.
///
/// The leakage pattern set is explicit, immutable configuration passed into
/// the engine constructor rather than a hidden global, so tests can
/// substitute custom pattern sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Maximum number of whitespace-delimited words kept by the length limiter.
    pub max_words: usize,
    /// Maximum number of hashtag tokens retained by the hashtag reducer.
    pub max_hashtags: usize,
    /// If true, raw `http(s)://` URLs are removed from the draft body.
    pub strip_urls: bool,
    /// Case-insensitive prefixes identifying echoed prompt instructions.
    /// Matched anchored at the start of a line or sentence, never as regex.
    pub leakage_patterns: Vec<String>,
}

impl Default for SanitizeConfig {
    /// Default caps with an empty pattern set. Use [`SanitizeConfig::load_defaults`]
    /// for the shipped leakage patterns.
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            max_hashtags: DEFAULT_MAX_HASHTAGS,
            strip_urls: true,
            leakage_patterns: Vec::new(),
        }
    }
}

impl SanitizeConfig {
    /// Loads the default configuration from the embedded YAML.
    pub fn load_defaults() -> Result<Self> {
        debug!("Loading default config from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: SanitizeConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default config")?;

        validate_config(&config)?;
        debug!("Loaded {} default leakage patterns.", config.leakage_patterns.len());
        Ok(config)
    }
}

/// A partial configuration loaded from a user file and merged over the defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub max_words: Option<usize>,
    pub max_hashtags: Option<usize>,
    pub strip_urls: Option<bool>,
    /// Patterns contributed by the overlay. Appended to the base list unless
    /// `replace_patterns` is set, in which case they substitute it wholesale.
    pub leakage_patterns: Vec<String>,
    pub replace_patterns: bool,
}

impl ConfigOverlay {
    /// Loads a configuration overlay from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading config overlay from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let overlay: ConfigOverlay = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(overlay)
    }
}

/// Merges a user overlay over a base configuration and validates the result.
pub fn merge_config(base: SanitizeConfig, overlay: Option<ConfigOverlay>) -> Result<SanitizeConfig> {
    let mut merged = base;

    if let Some(overlay) = overlay {
        if let Some(max_words) = overlay.max_words {
            debug!("Overriding max_words with user value: {}", max_words);
            merged.max_words = max_words;
        }
        if let Some(max_hashtags) = overlay.max_hashtags {
            debug!("Overriding max_hashtags with user value: {}", max_hashtags);
            merged.max_hashtags = max_hashtags;
        }
        if let Some(strip_urls) = overlay.strip_urls {
            debug!("Overriding strip_urls with user value: {}", strip_urls);
            merged.strip_urls = strip_urls;
        }
        if overlay.replace_patterns {
            debug!(
                "Replacing pattern list with {} user patterns.",
                overlay.leakage_patterns.len()
            );
            merged.leakage_patterns = overlay.leakage_patterns;
        } else if !overlay.leakage_patterns.is_empty() {
            debug!("Appending {} user patterns.", overlay.leakage_patterns.len());
            merged.leakage_patterns.extend(overlay.leakage_patterns);
        }
    }

    validate_config(&merged)?;
    debug!("Final pattern count after merge: {}", merged.leakage_patterns.len());
    Ok(merged)
}

/// Validates configuration integrity, collecting every problem found.
pub fn validate_config(config: &SanitizeConfig) -> Result<()> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    if config.max_words == 0 {
        errors.push("`max_words` must be at least 1.".to_string());
    }

    for pattern in &config.leakage_patterns {
        if pattern.trim().is_empty() {
            errors.push("A leakage pattern is empty.".to_string());
            continue;
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Pattern '{}' exceeds the maximum length of {} bytes.",
                pattern, MAX_PATTERN_LENGTH
            ));
        }
        if !seen.insert(pattern.to_lowercase()) {
            warn!("Duplicate leakage pattern found: '{}'.", pattern);
            errors.push(format!("Duplicate leakage pattern found: '{}'.", pattern));
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Config validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
