// postwash-core/src/lib.rs
//! # Postwash Core Library
//!
//! `postwash-core` provides the pure, platform-independent logic for
//! sanitizing machine-generated social-media drafts before they are shown,
//! saved, or published. It defines the configuration for the pipeline,
//! compiles the leakage pattern set, and applies an ordered sequence of text
//! transforms through the `DraftEngine`.
//!
//! The library is stateless and synchronous: each invocation operates on its
//! own string value, with no I/O beyond optional config-file loading and no
//! shared mutable state, so concurrent use is safe.
//!
//! ## Modules
//!
//! * `config`: Defines `SanitizeConfig` and the overlay/merge/validation logic.
//! * `patterns`: Compiles the leakage pattern list into cached, anchored regexes.
//! * `stages`: The pure transforms (typography, leakage filters, hashtag policy, ...).
//! * `engine`: The `DraftEngine` applying the stages in their fixed order.
//! * `errors`: The structured `PostwashError` type.
//! * `headless`: One-shot convenience wrappers over the embedded defaults.
//!
//! ## Usage Example
//!
//! ```rust
//! use postwash_core::{DraftEngine, SanitizeConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the embedded default configuration.
//!     let config = SanitizeConfig::load_defaults()?;
//!
//!     // 2. Build the engine; pattern compilation is the only fallible step.
//!     let engine = DraftEngine::new(config)?;
//!
//!     // 3. Sanitize a generated draft and run the scrub pass.
//!     let draft = "Keep it under 50 words.\nIt\u{2019}s a big day \u{2014} hashtag Launch";
//!     let clean = engine.scrub(&engine.sanitize(draft));
//!     assert_eq!(clean, "It's a big day - #Launch");
//!
//!     // 4. Attach the source footer; repeated application is a no-op.
//!     let post = engine.attach_source(&clean, "Launch notes", "https://example.com/launch");
//!     assert!(post.ends_with("https://example.com/launch"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Construction and config loading report failures through `PostwashError`
//! wrapped in `anyhow::Result`. The transforms themselves have no failure
//! modes: every stage accepts any string and returns a string, and an empty
//! result ("no usable draft") is a signal for the caller, not an error.
//!
//! ## Design Principles
//!
//! * **Ordered pure transforms:** each stage is a pure `&str -> String`
//!   function behind the `DraftStage` trait, independently unit-testable.
//! * **Explicit configuration:** the leakage pattern set is a value passed
//!   into the constructor, never a hidden global.
//! * **Stateless:** no draft is retained across invocations.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod patterns;
pub mod stages;

/// Re-exports the public configuration types and functions.
pub use config::{
    merge_config, validate_config, ConfigOverlay, SanitizeConfig, DEFAULT_MAX_HASHTAGS,
    DEFAULT_MAX_WORDS, MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::PostwashError;

/// Re-exports the engine and its statistics type.
pub use engine::{DraftEngine, DraftStats};

/// Re-exports the stage trait and the standalone passes.
pub use stages::hashtags::scrub;
pub use stages::markup::normalize_markup;
pub use stages::DraftStage;

/// Re-exports pattern compilation for advanced usage.
pub use patterns::{compile_patterns, CompiledPattern, CompiledPatterns};

/// Re-exports the one-shot convenience wrapper.
pub use headless::sanitize_with_defaults;
