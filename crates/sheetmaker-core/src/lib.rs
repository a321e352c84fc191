//! sheetmaker-core: Core library for column registry, validation and data entry
//!
//! This crate holds the interactive data-entry state machine and the narrow
//! adapter traits it talks through. Terminal handling and file formats live
//! in the `sheetmaker` binary.

/// Core error types for sheetmaker operations
pub mod error;

/// Configuration handling
pub mod config;

/// Core data types (ColumnType, Column, Row, Table)
pub mod types;

/// Cell validation against column types
pub mod validator;

/// Column registry
pub mod columns;

/// Interaction adapter seam
pub mod interaction;

/// Entry collection
pub mod entry;

/// Export adapter seam
pub mod export;

/// Session state machine
pub mod session;

// Re-exports for convenience
pub use columns::{AddOutcome, ColumnRegistry, parse_column_names};
pub use config::Config;
pub use entry::collect_row;
pub use error::SheetError;
pub use export::TableExporter;
pub use interaction::{
    Affirmatives, InteractionAdapter, InteractionError, InteractionResult, ProgressHandle,
    ask_yes_no,
};
pub use session::{ExportRecord, SessionController, SessionState, SessionSummary};
pub use types::{Column, ColumnType, Row, Table};
pub use validator::{Rejection, validate};
