//! Semantic color theme for consistent terminal output
//!
//! - `ACTIVE` => cyan - Headers, menus, spinners
//! - `SUCCESS` => green - Saved spreadsheets
//! - `WARNING` => yellow - Rejected values and re-prompts
//! - `FAIL` => red - Fatal errors

use std::sync::LazyLock;

use owo_colors::Style;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    /// Cyan - headers, menus, active elements
    pub active: Style,
    /// Green - completed operations, success messages
    pub success: Style,
    /// Yellow - recoverable input problems
    pub warning: Style,
    /// Red - errors
    pub fail: Style,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            active: Style::new().cyan().bold(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            fail: Style::new().red().bold(),
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);
