//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sheetmaker - Build typed spreadsheets from guided terminal prompts
#[derive(Parser)]
#[command(name = "sheetmaker")]
#[command(version = VERSION)]
#[command(about = "Build typed spreadsheets from guided terminal prompts")]
#[command(long_about = "Sheetmaker walks you through naming columns, choosing a data type for each one and typing in rows.\n\nEvery value is checked against its column type before it is accepted:\n  text      anything that is not purely numeric\n  number    digits only\n  date      DD/MM/YYYY\n  currency  a decimal amount, stored with two decimals\n\nThe finished table is saved as an .xlsx file.")]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not show the title banner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print a JSON summary when finished
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: ./sheetmaker.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive spreadsheet session (default)
    ///
    /// Prompts for a file name, columns, column types and rows, then saves
    /// the table. Repeats until you decline to create another spreadsheet.
    Run {
        /// Directory to save spreadsheets in (overrides the config file)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Write a default sheetmaker.toml in the current directory
    #[command(long_about = "Write a default sheetmaker.toml in the current directory.\n\nThe file configures:\n  output_dir           Where spreadsheets are saved (default: sheets)\n  affirmative_answers  Answers accepted as \"yes\"")]
    Init {
        /// Overwrite an existing sheetmaker.toml
        #[arg(long)]
        force: bool,
    },
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["sheetmaker"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_run_with_output_dir() {
        let cli = Cli::try_parse_from(["sheetmaker", "--json", "run", "--output-dir", "out"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Run { output_dir }) => {
                assert_eq!(output_dir, Some(PathBuf::from("out")));
            }
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::try_parse_from(["sheetmaker", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }
}
