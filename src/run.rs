//! Application run modes: logger init, stdin filter, in-place cleanup, UI launch.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use log::debug;
use text_cleanup::core;
use text_cleanup::core::CleanupError;

use crate::cli::Args;

/// Exit status when the interactive UI cannot start.
pub const EXIT_NO_TERMINAL: u8 = 2;

/// Initialize env_logger. In interactive mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.interactive
        && let Some(path) = core::paths::log_file()
        && let Some(dir) = path.parent()
        && std::fs::create_dir_all(dir).is_ok()
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        logger.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = logger.try_init();
}

/// Batch mode: clean the given paths in place, or filter stdin to stdout when there are none.
pub fn run_batch(args: &Args) -> Result<(), CleanupError> {
    let mode = args.decode_mode();
    if args.paths.is_empty() {
        debug!("no paths given, reading stdin");
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        return core::stream::normalize_stream(stdin, stdout, mode);
    }
    core::normalize_paths(&args.paths, mode)?;
    Ok(())
}

/// Launch the interactive UI. Requires stdin and stdout to be a terminal.
pub fn run_interactive() -> ExitCode {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Interactive mode requires a terminal (stdin and stdout must be a TTY)");
        return ExitCode::from(EXIT_NO_TERMINAL);
    }
    match crate::tui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
