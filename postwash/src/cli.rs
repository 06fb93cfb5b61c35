// postwash/src/cli.rs
//! This file defines the command-line interface (CLI) for the postwash application,
//! including all available commands and their arguments.
//!
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "postwash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize machine-generated social drafts before publishing",
    long_about = "Postwash is a command-line utility for cleaning machine-generated draft text before it is published. It repairs mojibake, normalizes typography, removes echoed prompt instructions, caps hashtags, and enforces a word limit according to a configurable policy.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'postwash' crates to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `postwash` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the full sanitization pipeline over a draft.
    #[command(about = "Sanitizes a draft from a file or stdin.")]
    Sanitize(SanitizeCommand),

    /// Applies only the scrub pass: control characters and 'hashtag word' text.
    #[command(about = "Scrubs control characters and rewrites 'hashtag word' text.")]
    Scrub(ScrubCommand),

    /// Normalizes lightweight markup into plain text.
    #[command(about = "Strips markdown emphasis and rewrites numbered lists.")]
    Markup(MarkupCommand),

    /// Reports draft statistics without modifying anything.
    #[command(about = "Scans a draft and reports statistics without modifying it.")]
    Scan(ScanCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Copy sanitized output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy sanitized output to the system clipboard.")]
    pub clipboard: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Path to a custom policy configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom policy configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Override the word cap from the configuration.
    #[arg(long = "max-words", value_name = "N", help = "Override the maximum word count.")]
    pub max_words: Option<usize>,

    /// Override the hashtag cap from the configuration.
    #[arg(long = "max-hashtags", value_name = "N", help = "Override the maximum hashtag count.")]
    pub max_hashtags: Option<usize>,

    /// Keep raw URLs in the draft body instead of stripping them.
    #[arg(long = "keep-urls", help = "Keep raw URLs in the draft body.")]
    pub keep_urls: bool,

    /// Title for a source attribution footer (requires --source-link).
    #[arg(long = "source-title", value_name = "TITLE", requires = "source_link", help = "Append a 'Source: <title>' footer (requires --source-link).")]
    pub source_title: Option<String>,

    /// Link for a source attribution footer (requires --source-title).
    #[arg(long = "source-link", value_name = "URL", requires = "source_title", help = "Link placed under the source footer (requires --source-title).")]
    pub source_link: Option<String>,

    /// Synthesize a short fallback draft when sanitization removes everything.
    #[arg(long = "fallback", help = "Synthesize a fallback draft instead of failing when the result is empty.")]
    pub fallback: bool,
}

/// Arguments for the `scrub` command.
#[derive(Parser, Debug)]
pub struct ScrubCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write scrubbed output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `markup` command.
#[derive(Parser, Debug)]
pub struct MarkupCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write normalized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom policy configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom policy configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Export the draft statistics to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the draft statistics to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print draft statistics as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the draft statistics to stdout as JSON.")]
    pub json_stdout: bool,
}
