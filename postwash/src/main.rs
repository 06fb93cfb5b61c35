// postwash/src/main.rs
//! Postwash entry point: argument parsing, logger setup, engine
//! construction, and command dispatch.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use postwash_core::{merge_config, ConfigOverlay, DraftEngine, SanitizeConfig};

use postwash::cli::{Cli, Commands, SanitizeCommand};
use postwash::commands::markup::{run_markup_opts, MarkupOptions};
use postwash::commands::sanitize::{run_sanitize_opts, SanitizeOptions};
use postwash::commands::scan::{run_scan_opts, ScanOptions};
use postwash::commands::scrub::{run_scrub_opts, ScrubOptions};
use postwash::utils::io::read_input;
use postwash::utils::msg::error_msg;

fn init_logger(quiet: bool, debug: bool) {
    let default_level = if quiet {
        "off"
    } else if debug {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Builds the policy configuration: embedded defaults, then the overlay file,
/// then CLI flag overrides.
fn load_config(
    config_path: Option<&Path>,
    max_words: Option<usize>,
    max_hashtags: Option<usize>,
    keep_urls: bool,
) -> Result<SanitizeConfig> {
    let base = SanitizeConfig::load_defaults()?;
    let overlay = match config_path {
        Some(path) => Some(ConfigOverlay::load_from_file(path)?),
        None => None,
    };
    let mut config = merge_config(base, overlay)?;

    if let Some(max_words) = max_words {
        config.max_words = max_words;
    }
    if let Some(max_hashtags) = max_hashtags {
        config.max_hashtags = max_hashtags;
    }
    if keep_urls {
        config.strip_urls = false;
    }
    postwash_core::validate_config(&config)?;
    Ok(config)
}

fn run_sanitize(args: SanitizeCommand, quiet: bool) -> Result<i32> {
    let config = load_config(
        args.config.as_deref(),
        args.max_words,
        args.max_hashtags,
        args.keep_urls,
    )?;
    let engine = DraftEngine::new(config).context("Failed to build sanitization engine")?;
    let input = read_input(args.input_file.as_ref())?;

    let source = match (args.source_title, args.source_link) {
        (Some(title), Some(link)) => Some((title, link)),
        _ => None,
    };

    run_sanitize_opts(
        &engine,
        SanitizeOptions {
            input,
            clipboard: args.clipboard,
            diff: args.diff,
            output_path: args.output,
            source,
            fallback: args.fallback,
            quiet,
        },
    )
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Sanitize(args) => run_sanitize(args, cli.quiet),
        Commands::Scrub(args) => {
            let engine = DraftEngine::new(SanitizeConfig::load_defaults()?)?;
            let input = read_input(args.input_file.as_ref())?;
            run_scrub_opts(
                &engine,
                ScrubOptions {
                    input,
                    output_path: args.output,
                },
            )?;
            Ok(0)
        }
        Commands::Markup(args) => {
            let engine = DraftEngine::new(SanitizeConfig::load_defaults()?)?;
            let input = read_input(args.input_file.as_ref())?;
            run_markup_opts(
                &engine,
                MarkupOptions {
                    input,
                    output_path: args.output,
                },
            )?;
            Ok(0)
        }
        Commands::Scan(args) => {
            let config = load_config(args.config.as_deref(), None, None, false)?;
            let engine = DraftEngine::new(config)?;
            let input = read_input(args.input_file.as_ref())?;
            run_scan_opts(
                &engine,
                ScanOptions {
                    input,
                    json_file: args.json_file,
                    json_stdout: args.json_stdout,
                    quiet: cli.quiet,
                },
            )?;
            Ok(0)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.debug);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error_msg(format!("Error: {e:#}"));
            std::process::exit(1);
        }
    }
}
