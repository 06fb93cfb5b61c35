//! Scan command implementation: statistics without modification.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use postwash_core::{DraftEngine, DraftStats};

use crate::utils::msg::info_msg;

pub struct ScanOptions {
    pub input: String,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub quiet: bool,
}

pub fn run_scan_opts(engine: &DraftEngine, opts: ScanOptions) -> Result<()> {
    info!("Starting scan operation.");
    let stats = engine.analyze(&opts.input);

    if opts.json_stdout {
        let json =
            serde_json::to_string_pretty(&stats).context("Failed to serialize scan summary")?;
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", json)?;
        return Ok(());
    }

    if let Some(path) = &opts.json_file {
        let json =
            serde_json::to_string_pretty(&stats).context("Failed to serialize scan summary")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write JSON summary to {}", path.display()))?;
        if !opts.quiet {
            info_msg(format!("Scan summary written to {}", path.display()));
        }
        return Ok(());
    }

    print_stats_table(&stats)?;
    Ok(())
}

fn print_stats_table(stats: &DraftStats) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![Cell::new("Metric"), Cell::new("Count")]);
    table.add_row(vec![Cell::new("Words"), Cell::new(stats.words)]);
    table.add_row(vec![Cell::new("Hashtags"), Cell::new(stats.hashtags)]);
    table.add_row(vec![
        Cell::new("Leaked instruction lines"),
        Cell::new(stats.leakage_lines),
    ]);
    table.add_row(vec![
        Cell::new("Control characters (U+0080-U+009F)"),
        Cell::new(stats.control_chars),
    ]);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{}", table)?;
    Ok(())
}
