//! sheetmaker CLI - Build typed spreadsheets from guided terminal prompts

mod cli;
mod colors;
mod commands;
mod export;
mod interaction;
mod logging;
mod output;
mod splash;

use std::process::ExitCode;

use anyhow::Result;
use sheetmaker_core::{Config, SheetError};

use cli::{Cli, Commands};
use output::{JsonIssue, JsonResponse, RunData};

fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Some(Commands::Init { force }) => {
            let dir = std::env::current_dir()?;
            commands::run_init(&dir, force, cli.json, cli.quiet)
        }
        Some(Commands::Run { output_dir }) => {
            let config = Config::discover(cli.config.as_deref())?;
            commands::run_session(&config, output_dir, cli.json, cli.quiet)
        }
        None => {
            let config = Config::discover(cli.config.as_deref())?;
            commands::run_session(&config, None, cli.json, cli.quiet)
        }
    }
}

fn main() -> ExitCode {
    let cli = cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("warning: {}", e);
    }

    let json_output = cli.json;
    let command = match cli.command {
        Some(Commands::Init { .. }) => "init",
        _ => "run",
    };

    match dispatch(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            let (code, exit) = match e.downcast_ref::<SheetError>() {
                Some(err) => (err.code(), err.exit_code()),
                None => ("E000", 1),
            };
            tracing::debug!(code, "exiting with error: {:#}", e);

            if json_output {
                let issues = vec![JsonIssue {
                    code: code.to_string(),
                    message: format!("{:#}", e),
                }];
                JsonResponse::error(command, RunData::default(), issues).print();
            } else {
                eprintln!("error: {:#}", e);
            }
            ExitCode::from(exit as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        crate::cli::Cli::command().debug_assert();
    }
}
