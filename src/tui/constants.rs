//! TUI constants: colors, timing, and labels.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent, soft cyan (#7EC8E3).
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: u16 = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: u16 = 10;

/// How long the "Copied" toast stays visible.
pub(crate) const TOAST_SECS: u64 = 2;

pub(super) const INPUT_PLACEHOLDER: &str = "Paste text here...";

pub(super) const INTRO: &str =
    "Paste your text on the left, press Ctrl+R to clean, then copy from the right.";

pub(super) const CLEANED_STATUS: &str = "Done. Copy from the cleaned output box.";
