//! Pocket calculator CLI: argument parsing and command plumbing.
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc                  # Interactive TUI (default)
//! pocketcalc tui              # Same, explicit
//! pocketcalc eval "12+34="    # Scripted key sequence
//! pocketcalc eval "5+3*2=" --tape
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod eval;
pub mod tui_runner;

pub use config::{init_tracing, CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use eval::{run_sequence, EvalOutcome};

use clap::{ArgAction, Parser, Subcommand};

/// Command line interface
#[derive(Debug, Parser)]
#[command(
    name = "pocketcalc",
    version,
    about = "Pocket calculator: interactive TUI or scripted key sequences"
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Command to run; defaults to the interactive TUI
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui,
    /// Feed a key sequence to the calculator and print the final display
    Eval(EvalArgs),
}

/// Arguments for the eval command
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Key sequence: digits, '.', '+', '-', '*', '/', '=' (whitespace ignored)
    pub sequence: String,

    /// Print the calculation tape afterwards
    #[arg(long)]
    pub tape: bool,

    /// Print the tape as JSON instead of text
    #[arg(long, requires = "tape")]
    pub json: bool,
}

impl Cli {
    /// Builds the runtime configuration from the parsed flags
    #[must_use]
    pub fn config(&self) -> CliConfig {
        CliConfig::new().with_verbosity(Verbosity::from_flags(self.verbose, self.quiet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_default_tui() {
        let cli = Cli::parse_from(["pocketcalc"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config().verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_cli_parses_eval() {
        let cli = Cli::parse_from(["pocketcalc", "eval", "12+34="]);
        match cli.command {
            Some(Commands::Eval(args)) => {
                assert_eq!(args.sequence, "12+34=");
                assert!(!args.tape);
            }
            _ => panic!("expected eval command"),
        }
    }

    #[test]
    fn test_cli_parses_verbosity() {
        let cli = Cli::parse_from(["pocketcalc", "-vv", "eval", "1="]);
        assert_eq!(cli.config().verbosity, Verbosity::Debug);
    }

    #[test]
    fn test_cli_parses_quiet() {
        let cli = Cli::parse_from(["pocketcalc", "--quiet", "eval", "1="]);
        assert_eq!(cli.config().verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_cli_eval_tape_flags() {
        let cli = Cli::parse_from(["pocketcalc", "eval", "1+1=", "--tape", "--json"]);
        match cli.command {
            Some(Commands::Eval(args)) => {
                assert!(args.tape);
                assert!(args.json);
            }
            _ => panic!("expected eval command"),
        }
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
