//! Shared helpers for the `postwash` binary.
//!
//! License: MIT OR Apache-2.0

pub mod clipboard;
pub mod io;
pub mod msg;
