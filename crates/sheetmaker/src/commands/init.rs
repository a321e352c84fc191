//! Implementation of the `sheetmaker init` command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sheetmaker_core::config::LOCAL_CONFIG_FILE;

use crate::output::{InitData, JsonIssue, JsonResponse};

/// Default sheetmaker.toml content
pub const DEFAULT_CONFIG: &str = r#"[sheetmaker]
# Directory spreadsheets are saved in (created on first export)
output_dir = "sheets"

# Answers accepted as "yes" at every confirmation prompt (case-insensitive).
# Any other answer, including an empty one, counts as "no".
affirmative_answers = ["y", "yes", "s", "sim"]
"#;

/// Run the init command in `dir`
pub fn run_init(dir: &Path, force: bool, json_output: bool, quiet: bool) -> Result<i32> {
    let config_path = dir.join(LOCAL_CONFIG_FILE);

    if config_path.exists() && !force {
        let message = format!("{} already exists (use --force to overwrite)", LOCAL_CONFIG_FILE);
        if json_output {
            let issues = vec![JsonIssue {
                code: "E030".to_string(),
                message: message.clone(),
            }];
            JsonResponse::error(
                "init",
                InitData {
                    path: config_path.display().to_string(),
                },
                issues,
            )
            .print();
        } else {
            eprintln!("error: {}", message);
        }
        return Ok(1);
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    if json_output {
        JsonResponse::ok(
            "init",
            InitData {
                path: config_path.display().to_string(),
            },
        )
        .print();
    } else if !quiet {
        println!("Created {}", config_path.display());
    }

    Ok(0)
}
