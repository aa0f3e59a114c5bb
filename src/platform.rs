//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy link shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Download as image shortcut display.
/// Ctrl+S works on all platforms.
pub const EXPORT_IMAGE_SHORTCUT: &str = "Ctrl+S";

/// Download as PDF shortcut display
pub const EXPORT_PDF_SHORTCUT: &str = "Ctrl+P";

/// Copy link shortcut display
/// - macOS: "Cmd+L"
/// - Linux/Windows: "Ctrl+L"
#[cfg(target_os = "macos")]
pub const COPY_LINK_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const COPY_LINK_SHORTCUT: &str = "Ctrl+L";
