//! Overlay components for TUI

mod base;
mod toast;

pub use toast::render_toast;
