//! TUI application state: input text, cleaned output, status line.

use std::time::{Duration, Instant};

use text_cleanup::core::Normalizer;

use super::constants;

pub struct App {
    normalizer: Normalizer,
    /// Text in the input panel.
    pub(crate) input: String,
    /// Result of the last Clean.
    pub(crate) cleaned: String,
    /// One-line message under the panels (e.g. after Clean).
    pub(crate) status: Option<String>,
    /// Output panel scroll offset (lines).
    pub(crate) output_scroll: u16,
    /// Until when to show the "Copied" toast.
    pub(crate) copy_toast_until: Option<Instant>,
}

impl App {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            input: String::new(),
            cleaned: String::new(),
            status: None,
            output_scroll: 0,
            copy_toast_until: None,
        }
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Insert pasted text. Terminals deliver pasted newlines as `\r` or `\r\n`.
    pub(crate) fn insert_str(&mut self, s: &str) {
        self.input.push_str(&s.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub(crate) fn backspace(&mut self) {
        self.input.pop();
    }

    /// Normalize the input panel into the output panel.
    pub(crate) fn clean(&mut self) {
        self.cleaned = self.normalizer.apply(&self.input).into_owned();
        self.output_scroll = 0;
        self.status = Some(constants::CLEANED_STATUS.to_string());
    }

    pub(crate) fn clear(&mut self) {
        self.input.clear();
        self.cleaned.clear();
        self.output_scroll = 0;
        self.status = None;
    }

    pub(crate) fn scroll_output_up(&mut self, n: u16) {
        self.output_scroll = self.output_scroll.saturating_sub(n);
    }

    pub(crate) fn scroll_output_down(&mut self, n: u16) {
        let max = self.cleaned.lines().count().min(u16::MAX as usize) as u16;
        self.output_scroll = self.output_scroll.saturating_add(n).min(max);
    }

    /// Copy the cleaned output to the system clipboard. Returns true if successful.
    pub(crate) fn copy_output(&mut self) -> bool {
        if self.cleaned.is_empty() {
            self.status = Some("Nothing to copy yet. Press Ctrl+R first.".to_string());
            return false;
        }
        if arboard::Clipboard::new()
            .and_then(|mut c| c.set_text(self.cleaned.clone()))
            .is_ok()
        {
            self.copy_toast_until =
                Some(Instant::now() + Duration::from_secs(constants::TOAST_SECS));
            true
        } else {
            log::warn!("clipboard unavailable");
            self.status = Some("Clipboard unavailable.".to_string());
            false
        }
    }

    pub(crate) fn toast_visible(&self) -> bool {
        self.copy_toast_until
            .is_some_and(|deadline| deadline > Instant::now())
    }
}
