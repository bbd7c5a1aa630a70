//! Centralized keyboard shortcuts.
//!
//! | Action        | Keys                 |
//! |---------------|----------------------|
//! | Clean         | Ctrl+R, F5           |
//! | Copy output   | Ctrl+Y               |
//! | Clear panels  | Ctrl+U               |
//! | Scroll output | ↑ ↓ PageUp PageDown  |
//! | Quit          | Ctrl+C, Esc          |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Run the normalizer on the input panel.
    Clean,
    /// Copy the cleaned output to the clipboard.
    Copy,
    /// Empty both panels.
    Clear,
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches. Only key presses count.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') if ctrl => Some(Shortcut::Clean),
            KeyCode::F(5) => Some(Shortcut::Clean),
            KeyCode::Char('y') if ctrl => Some(Shortcut::Copy),
            KeyCode::Char('u') if ctrl => Some(Shortcut::Clear),
            KeyCode::Char('c') if ctrl => Some(Shortcut::Quit),
            KeyCode::Esc => Some(Shortcut::Quit),
            _ => None,
        }
    }
}


/// Labels for the bottom bar.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar() -> Line<'static> {
        Line::from(vec![
            Span::styled("Ctrl+R ", DIM),
            Span::raw("clean"),
            Span::styled("  Ctrl+Y ", DIM),
            Span::raw("copy"),
            Span::styled("  Ctrl+U ", DIM),
            Span::raw("clear"),
            Span::styled("  ↑↓ ", DIM),
            Span::raw("scroll"),
            Span::styled("  Ctrl+C ", DIM),
            Span::raw("quit"),
        ])
    }
}
