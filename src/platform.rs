//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
/// Terminals on every platform deliver Ctrl, so no Cmd variant is needed.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Line ending hint for the message field
/// - macOS: "Return"
/// - Linux/Windows: "Enter"
#[cfg(target_os = "macos")]
pub const NEWLINE_KEY: &str = "Return";

#[cfg(not(target_os = "macos"))]
pub const NEWLINE_KEY: &str = "Enter";
