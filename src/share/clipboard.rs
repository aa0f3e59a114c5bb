//! Clipboard access behind a trait so link copying can be tested

use super::link::encode_link;
use crate::error::{ClipboardError, LinkError};
use crate::state::CardDraft;
use thiserror::Error;

/// Destination for copied text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened on each write
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Why copying a share link failed
#[derive(Debug, Error)]
pub enum CopyLinkError {
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Build the share link for `draft` and put it on the clipboard.
/// Returns the link that was copied.
pub fn copy_share_link(
    draft: &CardDraft,
    base_url: &str,
    clipboard: &mut dyn ClipboardSink,
) -> Result<String, CopyLinkError> {
    let link = encode_link(draft, base_url)?;
    clipboard.write_text(link.as_str())?;
    tracing::info!(link = %link, "share link copied");
    Ok(link.into())
}
