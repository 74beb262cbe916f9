//! System clipboard access behind a narrow seam.
//!
//! Copying a color is the one platform service whose failure is part of the
//! UI contract, so the write sits behind a trait: the app uses the arboard
//! clipboard, tests substitute an in-memory double.

use anyhow::{Context, Result};

/// Sink for copy-to-clipboard writes.
pub trait CopySink {
    /// Write `text` to the clipboard.
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// The real system clipboard via arboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl CopySink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .context("Failed to copy to clipboard")
    }
}

/// In-memory clipboard double that records every write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    /// Every string copied, in order.
    pub copied: Vec<String>,
}

impl CopySink for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

/// Clipboard double whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingClipboard;

impl CopySink for FailingClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<()> {
        anyhow::bail!("clipboard unavailable")
    }
}
