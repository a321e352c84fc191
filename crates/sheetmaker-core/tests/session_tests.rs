//! Integration tests for the session state machine
//!
//! These tests drive a full session with scripted answers and capture what
//! reaches the export adapter.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

use sheetmaker_core::{
    Affirmatives, ColumnType, InteractionAdapter, InteractionError, InteractionResult,
    ProgressHandle, SessionController, SheetError, Table, TableExporter,
};

/// Scripted adapter: answers prompts in order and records output
struct ScriptedAdapter {
    answers: RefCell<VecDeque<String>>,
    prompts: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    successes: RefCell<Vec<String>>,
    progress: RefCell<Vec<(String, bool)>>,
}

impl ScriptedAdapter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            prompts: RefCell::new(vec![]),
            warnings: RefCell::new(vec![]),
            successes: RefCell::new(vec![]),
            progress: RefCell::new(vec![]),
        }
    }

    fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl InteractionAdapter for ScriptedAdapter {
    fn ask_text(&self, prompt: &str, _default: Option<&str>) -> InteractionResult<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(InteractionError::InputClosed)
    }

    fn clear_and_show_title(&self) {}

    fn start_progress(&self, message: &str) -> ProgressHandle {
        ProgressHandle::new(0, message)
    }

    fn end_progress(&self, handle: ProgressHandle, success: bool) {
        self.progress
            .borrow_mut()
            .push((handle.message().to_string(), success));
    }

    fn print_info(&self, _message: &str) {}

    fn print_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn print_error(&self, _message: &str) {}

    fn print_success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }
}

/// Exporter that keeps every table it receives
#[derive(Default)]
struct RecordingExporter {
    exports: RefCell<Vec<(Table, String)>>,
}

impl TableExporter for RecordingExporter {
    fn export_table(&self, table: &Table, filename: &str) -> Result<PathBuf, SheetError> {
        self.exports
            .borrow_mut()
            .push((table.clone(), filename.to_string()));
        Ok(PathBuf::from(format!("sheets/{filename}.xlsx")))
    }
}

/// Exporter that always fails
struct FailingExporter;

impl TableExporter for FailingExporter {
    fn export_table(&self, _table: &Table, _filename: &str) -> Result<PathBuf, SheetError> {
        Err(SheetError::Export("directory is not writable".to_string()))
    }
}

fn run(adapter: &ScriptedAdapter, exporter: &dyn TableExporter) -> Result<(), SheetError> {
    SessionController::new(adapter, exporter, Affirmatives::default())
        .run()
        .map(|_| ())
}

#[test]
fn test_scenario_a_numeric_text_is_rejected_under_uniform_text() {
    let adapter = ScriptedAdapter::new(&[
        "people",     // filename
        "Name, Age",  // columns
        "n",          // another column?
        "n",          // redo columns?
        "n",          // configure individually? -> uniform Text
        "n",          // redo configuration?
        "Alice",      // Name
        "30",         // Age: rejected, purely numeric
        "",           // press ENTER
        "thirty",     // Age
        "n",          // another record?
        "n",          // another spreadsheet?
    ]);
    let exporter = RecordingExporter::default();

    run(&adapter, &exporter).unwrap();

    let exports = exporter.exports.borrow();
    assert_eq!(exports.len(), 1);
    let (table, _) = &exports[0];
    assert!(table.columns.iter().all(|c| c.column_type == ColumnType::Text));
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].get("Name"), Some("Alice"));
    assert_eq!(table.rows[0].get("Age"), Some("thirty"));
    assert_eq!(adapter.warnings.borrow().len(), 1);
    assert_eq!(adapter.remaining(), 0);
}

#[test]
fn test_scenario_a_session_cannot_progress_on_numeric_only() {
    // Keeps answering "30" for Age until input runs out.
    let adapter = ScriptedAdapter::new(&[
        "people", "Name, Age", "n", "n", "n", "n", "Alice", "30", "", "30", "", "30",
    ]);
    let exporter = RecordingExporter::default();

    let err = run(&adapter, &exporter).unwrap_err();

    assert!(matches!(err, SheetError::InputClosed));
    assert!(exporter.exports.borrow().is_empty());
}

#[test]
fn test_scenario_b_currency_normalized_and_text_rejected() {
    let adapter = ScriptedAdapter::new(&[
        "prices", // filename
        "Price",  // columns
        "n",      // another column?
        "n",      // redo columns?
        "y",      // configure individually?
        "4",      // Currency
        "n",      // redo configuration?
        "19.9",   // row 1
        "y",      // another record?
        "twenty", // row 2: rejected
        "",       // press ENTER
        "3",      // row 2
        "n",      // another record?
        "n",      // another spreadsheet?
    ]);
    let exporter = RecordingExporter::default();

    run(&adapter, &exporter).unwrap();

    let exports = exporter.exports.borrow();
    let (table, filename) = &exports[0];
    assert_eq!(filename, "prices");
    assert_eq!(table.columns[0].column_type, ColumnType::Currency);
    let values: Vec<_> = table.rows.iter().filter_map(|r| r.get("Price")).collect();
    assert_eq!(values, vec!["19.90", "3.00"]);
    assert_eq!(adapter.warnings.borrow().len(), 1);
}

#[test]
fn test_scenario_c_empty_column_names_shows_message() {
    let adapter = ScriptedAdapter::new(&[
        "empty", // filename
        "",      // no columns
        "",      // press ENTER
        "Item",  // columns
        "n", "n", "n", "n", "widget", "n", "n",
    ]);
    let exporter = RecordingExporter::default();

    run(&adapter, &exporter).unwrap();

    assert_eq!(
        adapter.warnings.borrow().as_slice(),
        &["Enter at least one column name!"]
    );
    let exports = exporter.exports.borrow();
    assert_eq!(exports[0].0.columns.len(), 1);
}

#[test]
fn test_scenario_d_single_row_single_export_then_exit() {
    let adapter = ScriptedAdapter::new(&[
        "single", "Name", "n", "n", "n", "n", "Bob", "n", "n",
    ]);
    let exporter = RecordingExporter::default();

    run(&adapter, &exporter).unwrap();

    let exports = exporter.exports.borrow();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].0.rows.len(), 1);
    assert_eq!(adapter.remaining(), 0);
    assert_eq!(
        adapter.progress.borrow().as_slice(),
        &[("Creating table...".to_string(), true)]
    );
    assert_eq!(adapter.successes.borrow().len(), 1);
}

#[test]
fn test_create_another_spreadsheet_resets_state() {
    let adapter = ScriptedAdapter::new(&[
        "first", "A, B", "n", "n", "n", "n", "x", "y", "n", // row + no more records
        "yes", // another spreadsheet
        "second", "C", "n", "n", "n", "n", "z", "n", "n",
    ]);
    let exporter = RecordingExporter::default();

    run(&adapter, &exporter).unwrap();

    let exports = exporter.exports.borrow();
    assert_eq!(exports.len(), 2);
    assert_eq!(exports[0].1, "first");
    assert_eq!(exports[1].1, "second");
    let second_columns: Vec<_> = exports[1].0.column_names().collect();
    assert_eq!(second_columns, vec!["C"]);
    assert_eq!(exports[1].0.rows.len(), 1);
}

#[test]
fn test_rows_match_column_order() {
    let adapter = ScriptedAdapter::new(&[
        "mixed",
        "Name, Born",
        "y",
        "Qty",
        "n",
        "n",
        "y",
        "1", // Name: Text
        "3", // Born: Date
        "2", // Qty: Number
        "n",
        "Carol",
        "31/12/2024",
        "12",
        "n",
        "n",
    ]);
    let exporter = RecordingExporter::default();

    run(&adapter, &exporter).unwrap();

    let exports = exporter.exports.borrow();
    let table = &exports[0].0;
    let row = &table.rows[0];
    assert_eq!(
        row.column_names().collect::<Vec<_>>(),
        table.column_names().collect::<Vec<_>>()
    );
    assert_eq!(row.values().collect::<Vec<_>>(), vec!["Carol", "31/12/2024", "12"]);
}

#[test]
fn test_export_failure_is_fatal() {
    let adapter = ScriptedAdapter::new(&["report", "Name", "n", "n", "n", "n", "Bob", "n"]);

    let err = run(&adapter, &FailingExporter).unwrap_err();

    assert_eq!(err.code(), "E020");
    assert_eq!(
        adapter.progress.borrow().as_slice(),
        &[("Creating table...".to_string(), false)]
    );
}

#[test]
fn test_affirmative_synonyms_are_case_insensitive() {
    let adapter = ScriptedAdapter::new(&[
        "report", "Name", "SIM", "Age", "no", "N", "n", "n", "Bob", "x9", "n", "n",
    ]);
    let exporter = RecordingExporter::default();

    run(&adapter, &exporter).unwrap();

    let exports = exporter.exports.borrow();
    assert_eq!(exports[0].0.columns.len(), 2);
}
