//! Markup command implementation: lightweight markup normalization only.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use log::info;
use std::path::PathBuf;

use postwash_core::DraftEngine;

use crate::utils::io::write_output;

pub struct MarkupOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
}

pub fn run_markup_opts(engine: &DraftEngine, opts: MarkupOptions) -> Result<()> {
    info!("Starting markup normalization.");
    let normalized = engine.normalize_markup(&opts.input);
    write_output(opts.output_path.as_deref(), &normalized)?;
    Ok(())
}
