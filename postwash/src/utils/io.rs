//! Input and output plumbing for the CLI commands.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Reads the whole input, either from the given file or from stdin.
pub fn read_input(input_file: Option<&PathBuf>) -> Result<String> {
    match input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes `content` followed by a newline to the given file, or to stdout.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            info!("Writing output to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", content)?;
        }
    }
    Ok(())
}
