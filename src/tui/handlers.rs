//! Keyboard and paste handling for the two-panel UI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::constants;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a key press.
pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if let Some(shortcut) = Shortcut::match_key(&key) {
        match shortcut {
            Shortcut::Quit => return HandleResult::Break,
            Shortcut::Clean => app.clean(),
            Shortcut::Copy => {
                app.copy_output();
            }
            Shortcut::Clear => app.clear(),
        }
        return HandleResult::Continue;
    }

    match key.code {
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Tab => app.insert_char('\t'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Up => app.scroll_output_up(constants::SCROLL_LINES_SMALL),
        KeyCode::Down => app.scroll_output_down(constants::SCROLL_LINES_SMALL),
        KeyCode::PageUp => app.scroll_output_up(constants::SCROLL_LINES_PAGE),
        KeyCode::PageDown => app.scroll_output_down(constants::SCROLL_LINES_PAGE),
        KeyCode::Char(c) => {
            // Ignore Ctrl/Alt+key that is not a shortcut
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                app.insert_char(c);
            }
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Handle a bracketed paste.
pub(crate) fn handle_paste(text: &str, app: &mut App) -> HandleResult {
    app.insert_str(text);
    HandleResult::Continue
}
