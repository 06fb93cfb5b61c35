//! The pure text transforms applied by the `DraftEngine`.
//!
//! Each stage is a pure `&str -> String` transform behind the [`DraftStage`]
//! trait, independently unit-testable, applied in a fixed order by the
//! engine. Stages never fail: any input string yields an output string.
//!
//! License: MIT OR Apache-2.0

pub mod hashtags;
pub mod leakage;
pub mod length;
pub mod markup;
pub mod mojibake;
pub mod typography;

/// A single pure transform in the sanitization pipeline.
pub trait DraftStage: Send + Sync {
    /// Short identifier used in debug logging.
    fn name(&self) -> &'static str;

    /// Applies the transform. Accepts any string and must not fail.
    fn apply(&self, draft: &str) -> String;
}
