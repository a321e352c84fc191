//! Column registry: ordered column names and their declared types

use std::collections::HashMap;

use crate::types::{Column, ColumnType};

/// Split raw comma-separated input into trimmed column names
///
/// Returns `None` when nothing was typed at all. Blank or separator-only
/// input yields `Some` with zero names.
pub fn parse_column_names(raw: &str) -> Option<Vec<String>> {
    if raw.is_empty() {
        return None;
    }

    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Result of registering a batch of column names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Names that were registered, in input order
    pub added: Vec<String>,
    /// Names skipped because they were already registered
    pub duplicates: Vec<String>,
}

/// Ordered set of columns plus their type assignments
///
/// Owned by the session; there is no process-wide registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRegistry {
    names: Vec<String>,
    types: HashMap<String, ColumnType>,
}

impl ColumnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the comma-separated names in `raw`
    pub fn add_columns(&mut self, raw: &str) -> Option<AddOutcome> {
        let names = parse_column_names(raw)?;
        let mut outcome = AddOutcome::default();

        for name in names {
            if self.names.contains(&name) {
                outcome.duplicates.push(name);
            } else {
                self.names.push(name.clone());
                outcome.added.push(name);
            }
        }

        Some(outcome)
    }

    /// Record the type for one column; later calls overwrite earlier ones
    pub fn assign_type(&mut self, name: &str, column_type: ColumnType) {
        self.types.insert(name.to_string(), column_type);
    }

    /// Apply one type to every registered column
    pub fn assign_uniform_type(&mut self, column_type: ColumnType) {
        for name in &self.names {
            self.types.insert(name.clone(), column_type);
        }
    }

    /// Forget all type assignments but keep the columns
    pub fn clear_types(&mut self) {
        self.types.clear();
    }

    /// Clear all columns and their type assignments
    pub fn reset(&mut self) {
        self.names.clear();
        self.types.clear();
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Declared type of a column, if one was assigned
    pub fn type_of(&self, name: &str) -> Option<ColumnType> {
        self.types.get(name).copied()
    }

    /// True once every registered column has a type
    pub fn is_configured(&self) -> bool {
        !self.names.is_empty() && self.names.iter().all(|n| self.types.contains_key(n))
    }

    /// Columns in order; unassigned columns resolve to Text
    pub fn columns(&self) -> Vec<Column> {
        self.names
            .iter()
            .map(|name| Column::new(name.clone(), self.type_of(name).unwrap_or(ColumnType::Text)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_and_trims() {
        assert_eq!(
            parse_column_names("Name, Age ,  City"),
            Some(vec!["Name".to_string(), "Age".to_string(), "City".to_string()])
        );
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(parse_column_names(""), None);
        assert_eq!(parse_column_names("   "), Some(vec![]));
    }

    #[test]
    fn test_parse_only_separators_is_zero_names() {
        assert_eq!(parse_column_names(" , ,"), Some(vec![]));
    }

    #[test]
    fn test_add_columns_preserves_order_across_calls() {
        let mut registry = ColumnRegistry::new();
        registry.add_columns("Name, Age").unwrap();
        registry.add_columns("City").unwrap();
        assert_eq!(registry.names(), &["Name", "Age", "City"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_columns_reports_duplicates() {
        let mut registry = ColumnRegistry::new();
        registry.add_columns("Name").unwrap();
        let outcome = registry.add_columns("Name, Age, Age").unwrap();
        assert_eq!(outcome.added, vec!["Age"]);
        assert_eq!(outcome.duplicates, vec!["Name", "Age"]);
        assert_eq!(registry.names(), &["Name", "Age"]);
    }

    #[test]
    fn test_add_columns_empty_input() {
        let mut registry = ColumnRegistry::new();
        assert!(registry.add_columns("").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_assign_type_overwrites() {
        let mut registry = ColumnRegistry::new();
        registry.add_columns("Price").unwrap();
        registry.assign_type("Price", ColumnType::Number);
        registry.assign_type("Price", ColumnType::Currency);
        assert_eq!(registry.type_of("Price"), Some(ColumnType::Currency));
    }

    #[test]
    fn test_assign_uniform_type_is_idempotent() {
        let mut once = ColumnRegistry::new();
        once.add_columns("Name, Age").unwrap();
        once.assign_uniform_type(ColumnType::Text);

        let mut twice = once.clone();
        twice.assign_uniform_type(ColumnType::Text);

        assert_eq!(once, twice);
        assert!(once.is_configured());
    }

    #[test]
    fn test_columns_default_to_text() {
        let mut registry = ColumnRegistry::new();
        registry.add_columns("Name, Born").unwrap();
        registry.assign_type("Born", ColumnType::Date);
        assert!(!registry.is_configured());
        assert_eq!(
            registry.columns(),
            vec![
                Column::new("Name", ColumnType::Text),
                Column::new("Born", ColumnType::Date),
            ]
        );
    }

    #[test]
    fn test_clear_types_keeps_columns() {
        let mut registry = ColumnRegistry::new();
        registry.add_columns("Name").unwrap();
        registry.assign_uniform_type(ColumnType::Number);
        registry.clear_types();
        assert_eq!(registry.type_of("Name"), None);
        assert_eq!(registry.names(), &["Name"]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut registry = ColumnRegistry::new();
        registry.add_columns("Name, Age").unwrap();
        registry.assign_uniform_type(ColumnType::Text);
        registry.reset();
        assert!(registry.is_empty());
        assert_eq!(registry, ColumnRegistry::new());
    }
}
