// postwash/src/lib.rs
//! # Postwash CLI
//!
//! This crate provides the command-line interface for the `postwash-core`
//! draft sanitization engine: the `sanitize`, `scrub`, `markup`, and `scan`
//! commands plus their input/output plumbing.
//!
//! License: MIT OR Apache-2.0

pub mod cli;
pub mod commands;
pub mod utils;
