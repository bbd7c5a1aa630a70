//! # text-cleanup
//!
//! Entry point for the batch CLI and the interactive UI.
//!
//! ## Modes
//! - No paths: filter stdin to stdout
//! - Paths: clean files and directory trees in place
//! - `-i` / `--interactive`: two-panel terminal UI
//! - `completions <shell>`: shell completion script

mod cli;
mod run;
mod tui;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use text_cleanup::core;

use cli::{Args, Commands};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(Commands::Completions { shell }) = args.command {
        let mut cmd = Args::command();
        cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    run::init_logger(&args);

    if args.interactive {
        return run::run_interactive();
    }

    match run::run_batch(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
