use std::io;
use std::process::ExitCode;

use clap::Parser;
use fetal_cli::commands::{load_pipeline, run_check, run_interactive, run_predict};
use fetal_cli::{Cli, Command};
use fetal_core::FetalConfig;

/// Exit status when the input was rejected or no category could be produced.
const EXIT_NO_PREDICTION: u8 = 1;
/// Exit status for configuration and artifact problems.
const EXIT_SETUP: u8 = 2;

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = FetalConfig::resolve(cli.config.as_deref(), cli.overrides())?;
    fetal_observability::init_tracing(&config.observability);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Predict(args) => run_predict(&load_pipeline(&config)?, &args, &mut out),
        Command::Interactive(args) => {
            let pipeline = load_pipeline(&config)?;
            run_interactive(&pipeline, &args, io::stdin().lock(), &mut out)
        }
        Command::Check => run_check(&config, &mut out).map(|()| true),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_NO_PREDICTION),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_SETUP)
        }
    }
}
