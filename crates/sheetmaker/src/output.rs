//! JSON output formatting for `--json`

use serde::{Deserialize, Serialize};
use sheetmaker_core::SessionSummary;

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    /// Errors, if any
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues: vec![],
        }
    }

    /// Create an error response
    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data,
            issues,
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    /// Print as a single JSON line on stdout
    pub fn print(&self) {
        match serde_json::to_string(self) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("error: failed to serialize JSON output: {}", e),
        }
    }
}

/// Issue object structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Error code (e.g., "E020")
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Data payload for init command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitData {
    /// Path to the written config file
    pub path: String,
}

/// Data payload for run command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunData {
    /// Spreadsheets written during the session
    pub spreadsheets: Vec<SpreadsheetData>,
}

/// One written spreadsheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetData {
    /// Base name typed by the user
    pub name: String,
    /// Path of the created file
    pub path: String,
    /// Number of columns
    pub columns: usize,
    /// Number of data rows
    pub rows: usize,
}

impl From<&SessionSummary> for RunData {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            spreadsheets: summary
                .exports
                .iter()
                .map(|e| SpreadsheetData {
                    name: e.filename.clone(),
                    path: e.path.display().to_string(),
                    columns: e.columns,
                    rows: e.rows,
                })
                .collect(),
        }
    }
}
