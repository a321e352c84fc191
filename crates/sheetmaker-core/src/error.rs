//! Error types for sheetmaker operations

use thiserror::Error;

use crate::interaction::InteractionError;

/// Core error type for sheetmaker operations
///
/// Recoverable input problems (empty input, rejected cell values, out-of-range
/// menu selections) never reach this type: they are handled by re-prompting.
/// Only failures that end the run are represented here.
#[derive(Error, Debug)]
pub enum SheetError {
    // === Interaction errors (E001-E003) ===
    /// E001: User pressed Ctrl+C
    #[error("E001: Cancelled by user")]
    Cancelled,

    /// E002: Input stream ended while a prompt was waiting
    #[error("E002: Input closed before the session finished")]
    InputClosed,

    /// E003: The interaction adapter failed
    #[error("E003: Interaction failed: {reason}")]
    Interaction { reason: String },

    // === Table errors (E010) ===
    /// E010: A row does not carry exactly the table's columns
    #[error("E010: Row columns {found:?} do not match table columns {expected:?}")]
    RowShapeMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    // === Export errors (E020-E022) ===
    /// E020: The export adapter could not write the spreadsheet
    #[error("E020: Export failed: {0}")]
    Export(String),

    /// E021: IO error
    #[error("E021: IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E022: Archive packaging error
    #[error("E022: Spreadsheet packaging error: {0}")]
    Zip(String),

    // === Configuration errors (E030) ===
    /// E030: Configuration could not be read or parsed
    #[error("E030: Configuration error: {0}")]
    Config(String),
}

impl SheetError {
    /// Get the error code (e.g., "E001", "E020")
    pub fn code(&self) -> &'static str {
        match self {
            SheetError::Cancelled => "E001",
            SheetError::InputClosed => "E002",
            SheetError::Interaction { .. } => "E003",
            SheetError::RowShapeMismatch { .. } => "E010",
            SheetError::Export(_) => "E020",
            SheetError::Io(_) => "E021",
            SheetError::Zip(_) => "E022",
            SheetError::Config(_) => "E030",
        }
    }

    /// Get the process exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            SheetError::Cancelled => 130,
            SheetError::InputClosed => 3,
            SheetError::Interaction { .. } => 4,
            SheetError::Export(_) | SheetError::Io(_) | SheetError::Zip(_) => 5,
            SheetError::Config(_) => 2,
            SheetError::RowShapeMismatch { .. } => 1,
        }
    }
}

impl From<InteractionError> for SheetError {
    fn from(err: InteractionError) -> Self {
        match err {
            InteractionError::Cancelled => SheetError::Cancelled,
            InteractionError::InputClosed => SheetError::InputClosed,
            InteractionError::Io(reason) => SheetError::Interaction { reason },
        }
    }
}
