//! Implementation of the interactive `sheetmaker run` command

use std::path::PathBuf;

use anyhow::Result;
use sheetmaker_core::{Config, SessionController};
use tracing::info;

use crate::export::XlsxExporter;
use crate::interaction::CliAdapter;
use crate::output::{JsonResponse, RunData};

/// Run interactive sessions until the user declines another spreadsheet
///
/// # Arguments
/// * `config` - Loaded configuration
/// * `output_dir` - Overrides the configured output directory
/// * `json_output` - Print a JSON summary at the end
/// * `quiet` - Hide the title banner
pub fn run_session(
    config: &Config,
    output_dir: Option<PathBuf>,
    json_output: bool,
    quiet: bool,
) -> Result<i32> {
    let output_dir = output_dir.unwrap_or_else(|| config.sheetmaker.output_dir.clone());
    let exporter = XlsxExporter::new(output_dir);
    info!(output_dir = %exporter.output_dir().display(), "starting session");

    let adapter = CliAdapter::new(quiet);
    let controller = SessionController::new(&adapter, &exporter, config.affirmatives());

    let summary = controller.run()?;

    if json_output {
        JsonResponse::ok("run", RunData::from(&summary)).print();
    }

    Ok(0)
}
