//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use text_cleanup::core::DecodeMode;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  text-cleanup < in.txt > out.txt     Clean stdin, write to stdout
  text-cleanup notes.md               Clean a file in place
  text-cleanup docs/                  Clean every non-hidden file under docs/
  text-cleanup --strict docs/         Refuse files that are not valid UTF-8
  text-cleanup -i                     Launch the interactive two-panel UI
  text-cleanup completions bash       Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Replace curly quotes, dashes, ellipses and bullets with plain ASCII",
    after_help = AFTER_HELP,
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files or directories to clean in place. Reads stdin when omitted.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Launch the interactive UI (input panel, Clean, output panel)
    #[arg(short = 'i', long, visible_alias = "web", conflicts_with = "paths")]
    pub interactive: bool,

    /// Fail on invalid UTF-8 instead of replacing it with U+FFFD
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    pub fn decode_mode(&self) -> DecodeMode {
        if self.strict {
            DecodeMode::Strict
        } else {
            DecodeMode::ReplaceInvalid
        }
    }
}
