//! Session controller: the interactive data-entry state machine
//!
//! One run goes filename -> column naming -> type configuration -> row entry
//! -> export, and then either starts over or ends. Each call to `step`
//! performs one pass through the current state and returns the next one, so
//! redo answers are simply transitions back into the same state.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::columns::ColumnRegistry;
use crate::entry::collect_row;
use crate::error::SheetError;
use crate::export::TableExporter;
use crate::interaction::{Affirmatives, InteractionAdapter, ask_yes_no};
use crate::types::{ColumnType, Table};
use crate::validator::is_numeric;

const PROMPT_FILENAME: &str = "Enter the spreadsheet file name:";
const PROMPT_COLUMN_NAMES: &str = "Enter the name of each column separated by commas:";
const PROMPT_TYPE_NUMBER: &str = "Type the number:";
const PROMPT_RETRY: &str = "Press ENTER to try again...";

const ASK_ANOTHER_COLUMN: &str = "Do you want to insert another column?";
const ASK_REDO_COLUMNS: &str = "Do you want to redo the spreadsheet columns?";
const ASK_CONFIGURE_COLUMNS: &str = "Do you want to configure the columns of your spreadsheet?";
const ASK_REDO_CONFIGURATION: &str = "Do you want to redo the column configuration?";
const ASK_ANOTHER_RECORD: &str = "Do you want to insert another record?";
const ASK_ANOTHER_SPREADSHEET: &str = "Do you want to create another spreadsheet?";

const MSG_COLUMN_EMPTY: &str = "Enter at least one column name!";
const MSG_INVALID_TYPE_SELECTION: &str = "Select one of the available numbers!";
const MSG_CREATING: &str = "Creating table...";
const MSG_SAVED: &str = "Spreadsheet saved successfully!";
const MSG_GOODBYE: &str = "Goodbye! =)";

/// States of the session machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ask for the base filename of the next spreadsheet
    AskFilename,
    /// Collect column names (with "another?" and "redo?" questions)
    CollectColumns,
    /// Assign a type to every column
    ConfigureColumns,
    /// Collect one row per pass
    CollectRows,
    /// Export the table and ask whether to start another spreadsheet
    Finalize,
    /// User declined another spreadsheet
    Done,
}

impl SessionState {
    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Done)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AskFilename => write!(f, "ask_filename"),
            SessionState::CollectColumns => write!(f, "collect_columns"),
            SessionState::ConfigureColumns => write!(f, "configure_columns"),
            SessionState::CollectRows => write!(f, "collect_rows"),
            SessionState::Finalize => write!(f, "finalize"),
            SessionState::Done => write!(f, "done"),
        }
    }
}

/// One exported spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    /// Base filename as typed by the user
    pub filename: String,
    /// Path the exporter wrote
    pub path: PathBuf,
    /// Number of columns
    pub columns: usize,
    /// Number of data rows
    pub rows: usize,
}

/// Outcome of a full run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub exports: Vec<ExportRecord>,
}

/// Drives the interactive phases and owns all session state
pub struct SessionController<'a> {
    adapter: &'a dyn InteractionAdapter,
    exporter: &'a dyn TableExporter,
    affirmatives: Affirmatives,
    state: SessionState,
    filename: String,
    registry: ColumnRegistry,
    table: Table,
    summary: SessionSummary,
}

impl<'a> SessionController<'a> {
    pub fn new(
        adapter: &'a dyn InteractionAdapter,
        exporter: &'a dyn TableExporter,
        affirmatives: Affirmatives,
    ) -> Self {
        Self {
            adapter,
            exporter,
            affirmatives,
            state: SessionState::AskFilename,
            filename: String::new(),
            registry: ColumnRegistry::new(),
            table: Table::default(),
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// Table being built in the current spreadsheet
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Run until the user declines another spreadsheet
    pub fn run(mut self) -> Result<SessionSummary, SheetError> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.summary)
    }

    /// Perform one pass through the current state
    pub fn step(&mut self) -> Result<SessionState, SheetError> {
        let next = match self.state {
            SessionState::AskFilename => self.ask_filename()?,
            SessionState::CollectColumns => self.collect_columns()?,
            SessionState::ConfigureColumns => self.configure_columns()?,
            SessionState::CollectRows => self.collect_rows()?,
            SessionState::Finalize => self.finalize()?,
            SessionState::Done => SessionState::Done,
        };

        if next != self.state {
            debug!(from = %self.state, to = %next, "session transition");
        }
        self.state = next;
        Ok(next)
    }

    fn confirm(&self, prompt: &str) -> Result<bool, SheetError> {
        Ok(ask_yes_no(self.adapter, &self.affirmatives, prompt)?)
    }

    fn ask_filename(&mut self) -> Result<SessionState, SheetError> {
        self.adapter.clear_and_show_title();
        self.filename = self.adapter.ask_text(PROMPT_FILENAME, None)?;
        self.registry.reset();
        self.table = Table::default();
        Ok(SessionState::CollectColumns)
    }

    fn collect_columns(&mut self) -> Result<SessionState, SheetError> {
        self.adapter.clear_and_show_title();
        let raw = self.adapter.ask_text(PROMPT_COLUMN_NAMES, None)?;

        if let Some(outcome) = self.registry.add_columns(&raw) {
            if !outcome.duplicates.is_empty() {
                self.adapter.print_warning(&format!(
                    "Already registered, ignored: {}",
                    outcome.duplicates.join(", ")
                ));
            }
        }

        if self.registry.is_empty() {
            self.adapter.clear_and_show_title();
            self.adapter.print_warning(MSG_COLUMN_EMPTY);
            self.adapter.ask_text(PROMPT_RETRY, None)?;
            return Ok(SessionState::CollectColumns);
        }

        self.adapter.clear_and_show_title();
        if self.confirm(ASK_ANOTHER_COLUMN)? {
            return Ok(SessionState::CollectColumns);
        }

        self.show_columns_info();
        if self.confirm(ASK_REDO_COLUMNS)? {
            self.registry.reset();
            return Ok(SessionState::CollectColumns);
        }

        Ok(SessionState::ConfigureColumns)
    }

    fn configure_columns(&mut self) -> Result<SessionState, SheetError> {
        self.adapter.clear_and_show_title();
        if self.confirm(ASK_CONFIGURE_COLUMNS)? {
            let names = self.registry.names().to_vec();
            for name in names {
                self.show_input_types(&name);
                let column_type = self.select_input_type()?;
                self.registry.assign_type(&name, column_type);
            }
        } else {
            self.registry.assign_uniform_type(ColumnType::Text);
        }

        self.show_columns_info();
        if self.confirm(ASK_REDO_CONFIGURATION)? {
            self.registry.clear_types();
            return Ok(SessionState::ConfigureColumns);
        }

        self.table = Table::new(self.registry.columns());
        Ok(SessionState::CollectRows)
    }

    fn collect_rows(&mut self) -> Result<SessionState, SheetError> {
        let row = collect_row(self.adapter, &self.table.columns)?;
        self.table.push_row(row)?;

        self.adapter.clear_and_show_title();
        if self.confirm(ASK_ANOTHER_RECORD)? {
            Ok(SessionState::CollectRows)
        } else {
            Ok(SessionState::Finalize)
        }
    }

    fn finalize(&mut self) -> Result<SessionState, SheetError> {
        self.adapter.clear_and_show_title();
        let progress = self.adapter.start_progress(MSG_CREATING);
        let exported = self.exporter.export_table(&self.table, &self.filename);
        self.adapter.end_progress(progress, exported.is_ok());
        let path = exported?;

        info!(
            path = %path.display(),
            columns = self.table.columns.len(),
            rows = self.table.rows.len(),
            "spreadsheet exported"
        );
        self.summary.exports.push(ExportRecord {
            filename: self.filename.clone(),
            path: path.clone(),
            columns: self.table.columns.len(),
            rows: self.table.rows.len(),
        });

        self.adapter.clear_and_show_title();
        self.adapter.print_success(MSG_SAVED);
        self.adapter.print_info(&path.display().to_string());

        if self.confirm(ASK_ANOTHER_SPREADSHEET)? {
            return Ok(SessionState::AskFilename);
        }

        self.adapter.clear_and_show_title();
        self.adapter.print_info(MSG_GOODBYE);
        Ok(SessionState::Done)
    }

    fn show_columns_info(&self) {
        self.adapter.clear_and_show_title();
        self.adapter.print_header(&format!(
            "Your spreadsheet has {} columns:",
            self.registry.len()
        ));

        for (i, name) in self.registry.names().iter().enumerate() {
            let column_type = self
                .registry
                .type_of(name)
                .map(|t| t.label())
                .unwrap_or("-");
            self.adapter.print_info(&format!(
                "Column #{}: [{}] | Type: [{}]",
                i + 1,
                name,
                column_type
            ));
        }
    }

    fn show_input_types(&self, column: &str) {
        self.adapter.clear_and_show_title();
        self.adapter.print_header(&format!(
            "What type of data will column [{}] hold?",
            column
        ));
        self.adapter.show_menu(&ColumnType::menu_items());
    }

    /// Read a menu number until it names one of the column types
    fn select_input_type(&self) -> Result<ColumnType, SheetError> {
        loop {
            let raw = self.adapter.ask_text(PROMPT_TYPE_NUMBER, None)?;
            let selected = Some(raw.as_str())
                .filter(|s| is_numeric(s))
                .and_then(|s| s.parse::<usize>().ok())
                .and_then(ColumnType::from_menu_index);

            match selected {
                Some(column_type) => return Ok(column_type),
                None => self.adapter.print_warning(MSG_INVALID_TYPE_SELECTION),
            }
        }
    }
}
