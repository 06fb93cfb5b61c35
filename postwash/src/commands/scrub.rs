//! Scrub command implementation: the standalone scrub pass only.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use log::info;
use std::path::PathBuf;

use postwash_core::DraftEngine;

use crate::utils::io::write_output;

pub struct ScrubOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
}

pub fn run_scrub_opts(engine: &DraftEngine, opts: ScrubOptions) -> Result<()> {
    info!("Starting scrub operation.");
    let scrubbed = engine.scrub(&opts.input);
    write_output(opts.output_path.as_deref(), &scrubbed)?;
    Ok(())
}
