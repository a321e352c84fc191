//! Core data types (ColumnType, Column, Row, Table)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Data type a column accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free text that is not purely numeric
    Text,
    /// Unsigned whole number made only of numeric characters
    Number,
    /// Calendar date written as DD/MM/YYYY
    Date,
    /// Decimal amount stored with two fractional digits
    Currency,
}

impl ColumnType {
    /// All column types, in type-menu order
    pub const ALL: [ColumnType; 4] = [
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::Date,
        ColumnType::Currency,
    ];

    /// Get the display label for this type
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Currency => "currency",
        }
    }

    /// Create from a 1-based type-menu selection
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Menu lines, e.g. "1 - text"
    pub fn menu_items() -> Vec<String> {
        Self::ALL
            .iter()
            .enumerate()
            .map(|(i, ty)| format!("{} - {}", i + 1, ty.label()))
            .collect()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named, typed column of the table under construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Trimmed, non-empty column name
    pub name: String,
    /// Declared data type
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// One complete set of validated values, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a normalized value for the named column
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.push((column.into(), value.into()));
    }

    /// Get the value stored under a column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names, in the order the values were collected
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Values, in column order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A finished table handed to the export adapter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row; its column names must equal the table's, in order
    pub fn push_row(&mut self, row: Row) -> Result<(), SheetError> {
        let matches = row.len() == self.columns.len()
            && row
                .column_names()
                .zip(self.columns.iter())
                .all(|(name, column)| name == column.name);

        if !matches {
            return Err(SheetError::RowShapeMismatch {
                expected: self.column_names().map(str::to_string).collect(),
                found: row.column_names().map(str::to_string).collect(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
