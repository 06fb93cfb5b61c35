//! Sanitize command implementation: the full pipeline plus output handling.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use diffy::create_patch;
use log::{debug, info};
use std::path::PathBuf;

use postwash_core::DraftEngine;

use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::io::write_output;
use crate::utils::msg::{info_msg, warn_msg};

/// Exit code returned when sanitization removes everything and no fallback
/// was requested. Distinct from generic failures so callers can branch on
/// "no usable draft".
pub const EMPTY_DRAFT_EXIT_CODE: i32 = 2;

/// Options for the ergonomic run_sanitize_opts API.
pub struct SanitizeOptions {
    pub input: String,
    pub clipboard: bool,
    pub diff: bool,
    pub output_path: Option<PathBuf>,
    pub source: Option<(String, String)>,
    pub fallback: bool,
    pub quiet: bool,
}

/// The main operation runner for the `sanitize` command. Returns the process
/// exit code.
pub fn run_sanitize_opts(engine: &DraftEngine, opts: SanitizeOptions) -> Result<i32> {
    info!("Starting sanitize operation.");

    let mut sanitized = engine.scrub(&engine.sanitize(&opts.input));
    debug!(
        "Draft sanitized. Original length: {}, sanitized length: {}",
        opts.input.len(),
        sanitized.len()
    );

    if sanitized.is_empty() && !opts.input.trim().is_empty() {
        if opts.fallback {
            let title = opts.source.as_ref().map(|(title, _)| title.as_str());
            sanitized = fallback_draft(&opts.input, title);
            if !opts.quiet {
                warn_msg("Sanitization removed everything; emitting a fallback draft.");
            }
        } else {
            if !opts.quiet {
                warn_msg("Sanitization removed everything and no --fallback was given.");
            }
            return Ok(EMPTY_DRAFT_EXIT_CODE);
        }
    }

    if let Some((title, link)) = &opts.source {
        sanitized = engine.attach_source(&sanitized, title, link);
    }

    if opts.diff {
        let patch = create_patch(&opts.input, &sanitized);
        write_output(opts.output_path.as_deref(), patch.to_string().trim_end())?;
    } else {
        write_output(opts.output_path.as_deref(), &sanitized)?;
    }

    if opts.clipboard {
        match copy_to_clipboard(&sanitized) {
            Ok(()) => {
                if !opts.quiet {
                    info_msg("Sanitized draft copied to clipboard successfully.");
                }
            }
            Err(e) => warn_msg(format!("Failed to copy to clipboard: {}", e)),
        }
    }

    info!("Sanitize operation completed.");
    Ok(0)
}

/// Synthesizes a short draft from the raw input when the pipeline removed
/// everything: first sentence of the input with URLs dropped, headlined by
/// the source title when one is available.
fn fallback_draft(input: &str, source_title: Option<&str>) -> String {
    let title = source_title.unwrap_or("").trim();
    let head = first_sentence(input, 240);

    let headline = if head.is_empty() {
        if title.is_empty() {
            "Quick update".to_string()
        } else {
            title.to_string()
        }
    } else if !title.is_empty() && !head.to_lowercase().starts_with(&title.to_lowercase()) {
        format!("{title}: {head}")
    } else {
        head
    };

    format!("Key takeaway: {headline}")
}

/// First sentence of `text`, with URL tokens dropped and whitespace
/// collapsed, clipped to `limit` characters with a `…` marker.
fn first_sentence(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| !w.starts_with("http://") && !w.starts_with("https://"))
        .collect();
    let flat = words.join(" ");

    let mut head = flat.as_str();
    let mut prev_was_terminator = false;
    for (idx, c) in flat.char_indices() {
        if prev_was_terminator && c.is_whitespace() {
            head = &flat[..idx];
            break;
        }
        prev_was_terminator = matches!(c, '.' | '!' | '?');
    }
    let head = head.trim();

    if head.chars().count() > limit {
        let clipped: String = head.chars().take(limit - 1).collect();
        format!("{}…", clipped.trim_end_matches([',', ';', ':', ' ']))
    } else {
        head.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sentence_stops_at_the_first_terminator() {
        assert_eq!(
            first_sentence("One thing happened. Then another.", 240),
            "One thing happened."
        );
    }

    #[test]
    fn first_sentence_drops_urls_and_collapses_whitespace() {
        assert_eq!(
            first_sentence("Read https://example.com/x before\n  deciding. More.", 240),
            "Read before deciding."
        );
    }

    #[test]
    fn first_sentence_clips_long_text_with_a_marker() {
        let long = "word ".repeat(100);
        let head = first_sentence(&long, 40);
        assert!(head.ends_with('…'));
        assert!(head.chars().count() <= 40);
    }

    #[test]
    fn fallback_prefixes_the_title_when_missing_from_the_head() {
        assert_eq!(
            fallback_draft("Margins improved this quarter.", Some("Q3 results")),
            "Key takeaway: Q3 results: Margins improved this quarter."
        );
        assert_eq!(
            fallback_draft("Q3 results are in. Details below.", Some("Q3 results")),
            "Key takeaway: Q3 results are in."
        );
    }

    #[test]
    fn fallback_degrades_to_title_then_generic() {
        assert_eq!(
            fallback_draft("   ", Some("Q3 results")),
            "Key takeaway: Q3 results"
        );
        assert_eq!(fallback_draft("   ", None), "Key takeaway: Quick update");
    }
}
