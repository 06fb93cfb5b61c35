//! Clipboard integration, compiled in only with the `clipboard` feature.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(content: &str) -> Result<()> {
    use anyhow::Context;
    let mut clipboard = arboard::Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(content.to_string())
        .context("Failed to copy content to clipboard")?;
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_content: &str) -> Result<()> {
    anyhow::bail!("Clipboard support was not compiled in (enable the 'clipboard' feature).")
}
