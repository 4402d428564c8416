//! Pocket calculator CLI entry point

use std::process::ExitCode;

use clap::Parser;
use console::style;

use pocket_calc_cli::{init_tracing, run_sequence, Cli, CliResult, Commands, EvalArgs};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli.config());

    match cli.command {
        None | Some(Commands::Tui) => pocket_calc_cli::tui_runner::run(),
        Some(Commands::Eval(args)) => run_eval(&args),
    }
}

fn run_eval(args: &EvalArgs) -> CliResult<()> {
    let outcome = run_sequence(&args.sequence)?;

    for alert in &outcome.alerts {
        eprintln!("{}", style(alert).red());
    }

    if !outcome.previous.is_empty() {
        println!("{}", style(&outcome.previous).dim());
    }
    println!("{}", style(&outcome.current).bold());
    println!("{}", style(&outcome.memory).magenta());

    if args.tape {
        if args.json {
            println!("{}", outcome.tape_json);
        } else {
            for line in &outcome.tape {
                println!("{line}");
            }
        }
    }

    Ok(())
}
