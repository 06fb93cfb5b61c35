//! patterns.rs - Manages the compilation and caching of leakage patterns.
//!
//! This module provides a thread-safe, cached mechanism to convert the
//! configured leakage pattern list into `CompiledPatterns`, anchored
//! case-insensitive regexes optimized for repeated matching. It uses a
//! global, shared cache to avoid redundant compilation.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::RegexBuilder;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::MAX_PATTERN_LENGTH;
use crate::errors::PostwashError;

/// A single compiled leakage pattern.
///
/// The regex is the escaped pattern text anchored at the start, so a match
/// means "this fragment begins with the pattern", case-insensitively.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The compiled regular expression used for matching.
    pub regex: regex::Regex,
    /// The original pattern text, kept for diagnostics.
    pub source: String,
}

/// The full set of compiled patterns for one engine configuration.
#[derive(Debug)]
pub struct CompiledPatterns {
    pub patterns: Vec<CompiledPattern>,
}

impl CompiledPatterns {
    /// True if `fragment` (already trimmed by the caller) begins with any
    /// leakage pattern.
    pub fn matches_start(&self, fragment: &str) -> bool {
        self.patterns.iter().any(|p| p.regex.is_match(fragment))
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled pattern sets.
    /// The key is a hash of the ordered pattern list.
    static ref COMPILED_PATTERNS_CACHE: RwLock<HashMap<u64, Arc<CompiledPatterns>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the pattern list to create a stable, unique key for the cache.
/// Order is significant, so the list is hashed as-is.
fn hash_patterns(patterns: &[String]) -> u64 {
    let mut hasher = DefaultHasher::new();
    patterns.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a pattern list into `CompiledPatterns`.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_patterns(patterns: &[String]) -> Result<CompiledPatterns, PostwashError> {
    debug!("Starting compilation of {} leakage patterns.", patterns.len());

    let mut compiled = Vec::new();
    let mut compilation_errors = Vec::new();

    for pattern in patterns {
        if pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(PostwashError::PatternLengthExceeded(
                pattern.clone(),
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        // The pattern text is escaped so it never acts as a regex itself;
        // the anchor restricts matches to the start of the fragment.
        let anchored = format!("^{}", regex::escape(pattern));
        let regex_result = RegexBuilder::new(&anchored)
            .case_insensitive(true)
            .size_limit(1 << 20)
            .build();

        match regex_result {
            Ok(regex) => {
                compiled.push(CompiledPattern {
                    regex,
                    source: pattern.clone(),
                });
            }
            Err(e) => {
                compilation_errors.push(PostwashError::PatternCompilationError(pattern.clone(), e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(PostwashError::Fatal(format!(
            "Failed to compile {} pattern(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling patterns. Total compiled: {}.", compiled.len());
        Ok(CompiledPatterns { patterns: compiled })
    }
}

/// Gets a `CompiledPatterns` instance from the cache or compiles it if not found.
///
/// This is the public entry point for retrieving compiled patterns. It returns
/// an `Arc` to a `CompiledPatterns` instance, allowing for cheap sharing.
pub fn get_or_compile_patterns(patterns: &[String]) -> Result<Arc<CompiledPatterns>> {
    let cache_key = hash_patterns(patterns);

    {
        let cache = COMPILED_PATTERNS_CACHE.read().unwrap();
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled patterns from cache for key: {}", &cache_key);
            return Ok(Arc::clone(compiled));
        }
    } // Read lock is released here.

    debug!("Compiled patterns not found in cache. Compiling now.");
    let compiled = compile_patterns(patterns)?;
    let compiled_arc = Arc::new(compiled);

    COMPILED_PATTERNS_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached patterns for key: {}", &cache_key);
    Ok(compiled_arc)
}
