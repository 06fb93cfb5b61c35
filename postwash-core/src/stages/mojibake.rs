//! Repairs UTF-8 text that was mis-decoded as Latin-1.
//!
//! Generated drafts occasionally round-trip through a service that reads
//! UTF-8 bytes as Latin-1, turning a right single quote into "â" followed by
//! two control characters. The repair narrows each char back to its Latin-1
//! byte and re-decodes the result as UTF-8.
//!
//! License: MIT OR Apache-2.0

use encoding_rs::UTF_8;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::stages::DraftStage;

lazy_static! {
    // Control block U+0080-U+009F, or an "Â"/"â"/"ð" lead byte followed by a
    // continuation char in U+0080-U+00BF. A bare accented letter followed by
    // ASCII is legitimate text (château, Âncora, orð) and must not trigger
    // the round trip, which would drop it as an invalid UTF-8 sequence.
    static ref MOJIBAKE_HINT: Regex =
        Regex::new("[\u{0080}-\u{009F}]|[Ââ][\u{0080}-\u{00BF}]|ð[\u{0080}-\u{00BF}]").unwrap();
}

/// Heuristic: true if the text contains common UTF-8-read-as-Latin-1 garbage.
pub fn looks_like_mojibake(text: &str) -> bool {
    !text.is_empty() && MOJIBAKE_HINT.is_match(text)
}

/// One repair pass: narrow chars to Latin-1 bytes (dropping wider chars),
/// then re-decode as UTF-8, dropping invalid sequences.
fn roundtrip_once(text: &str) -> String {
    let bytes: Vec<u8> = text
        .chars()
        .filter(|&c| (c as u32) <= 0xFF)
        .map(|c| c as u8)
        .collect();
    let (decoded, _) = UTF_8.decode_without_bom_handling(&bytes);
    decoded.replace('\u{FFFD}', "")
}

pub struct MojibakeRepair;

impl DraftStage for MojibakeRepair {
    fn name(&self) -> &'static str {
        "mojibake"
    }

    fn apply(&self, draft: &str) -> String {
        // Up to two passes for doubly-mangled text. A pass only runs while
        // the text still looks mangled; a clean result would otherwise lose
        // repaired characters outside the Latin-1 range on the next narrow.
        let mut current = draft.to_string();
        for _ in 0..2 {
            if !looks_like_mojibake(&current) {
                break;
            }
            let repaired = roundtrip_once(&current);
            if repaired.is_empty() || repaired == current {
                break;
            }
            debug!("Mojibake repair pass rewrote {} bytes to {}", current.len(), repaired.len());
            current = repaired;
        }
        // NBSP artifacts that sneak past the round trip: "Â " carries no
        // continuation char, so it is handled as a literal replacement, not
        // a repair trigger.
        current
            .replace("\u{00C2}\u{00A0}", " ")
            .replace("\u{00C2} ", " ")
    }
}
