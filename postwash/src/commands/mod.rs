//! Command implementations for the `postwash` CLI.
//!
//! License: MIT OR Apache-2.0

pub mod markup;
pub mod sanitize;
pub mod scan;
pub mod scrub;
