//! Entry collection: one validated value per column

use tracing::debug;

use crate::error::SheetError;
use crate::interaction::InteractionAdapter;
use crate::types::{Column, Row};
use crate::validator::validate;

const MSG_INVALID_VALUE: &str = "Enter at least one valid value!";
const PROMPT_RETRY: &str = "Press ENTER to try again...";

/// Prompt text for one cell
pub fn cell_prompt(column: &Column) -> String {
    format!(
        "Enter the data for the {} field [{}]:",
        column.column_type, column.name
    )
}

/// Collect one row, re-prompting each column until its value validates
///
/// Only adapter failures (cancellation, closed input) end this early.
pub fn collect_row(
    adapter: &dyn InteractionAdapter,
    columns: &[Column],
) -> Result<Row, SheetError> {
    let mut row = Row::new();

    for column in columns {
        let value = collect_cell(adapter, column)?;
        row.push(column.name.clone(), value);
    }

    Ok(row)
}

fn collect_cell(adapter: &dyn InteractionAdapter, column: &Column) -> Result<String, SheetError> {
    let prompt = cell_prompt(column);

    loop {
        adapter.clear_and_show_title();
        let raw = adapter.ask_text(&prompt, None)?;

        match validate(&raw, column.column_type) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                debug!(column = %column.name, raw = %raw, %rejection, "cell rejected");
                adapter.clear_and_show_title();
                adapter.print_warning(MSG_INVALID_VALUE);
                adapter.print_info(&rejection.to_string());
                adapter.ask_text(PROMPT_RETRY, None)?;
            }
        }
    }
}
