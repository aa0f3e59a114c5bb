//! Share links and the clipboard they are copied to

mod clipboard;
mod link;

pub use clipboard::{copy_share_link, ClipboardSink, CopyLinkError, SystemClipboard};
pub use link::{decode_link, parse_link, LinkFields};

#[cfg(test)]
pub use clipboard::MockClipboardSink;
