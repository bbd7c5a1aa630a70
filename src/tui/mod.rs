//! Interactive two-panel UI: paste text on the left, clean, copy from the right.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;

use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::time::Duration;

use text_cleanup::core::Normalizer;

use draw::draw;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableBracketedPaste);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the UI loop until the user quits.
pub fn run() -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    // Pasted text arrives as one Event::Paste instead of a key per character
    execute!(stdout, crossterm::event::EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Normalizer::standard());
    log::info!("interactive session started");

    loop {
        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            let result = match event::read()? {
                Event::Key(key) => handlers::handle_key(key, &mut app),
                Event::Paste(text) => handlers::handle_paste(&text, &mut app),
                _ => HandleResult::Continue,
            };
            if result == HandleResult::Break {
                break;
            }
        }
    }

    terminal.show_cursor()?;
    log::info!("interactive session ended");
    Ok(())
}
