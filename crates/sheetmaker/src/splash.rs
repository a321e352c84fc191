//! Title banner for the sheetmaker CLI
//!
//! Redrawn at the top of the screen every time the adapter clears it.

use std::io::Write;

use owo_colors::OwoColorize;

/// ASCII grid logo
const GRID: &[&str] = &["┌─┬─┬─┐", "├─┼─┼─┤", "└─┴─┴─┘"];

/// Render the banner lines without colors
pub fn banner_lines() -> Vec<String> {
    let version = env!("CARGO_PKG_VERSION");
    vec![
        format!("{}   Ｓｈｅｅｔ  Ｍａｋｅｒ v{}", GRID[0], version),
        format!("{}   Typed spreadsheets, one prompt at a time", GRID[1]),
        GRID[2].to_string(),
    ]
}

/// Write the banner to `out`, colored when `color` is set
pub fn write_banner(out: &mut dyn Write, color: bool) -> std::io::Result<()> {
    if !color {
        for line in banner_lines() {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    let version = env!("CARGO_PKG_VERSION");
    writeln!(
        out,
        "{}   {} v{}",
        GRID[0].cyan(),
        "Ｓｈｅｅｔ  Ｍａｋｅｒ".bold().cyan(),
        version.dimmed()
    )?;
    writeln!(
        out,
        "{}   {}",
        GRID[1].cyan(),
        "Typed spreadsheets, one prompt at a time".dimmed()
    )?;
    writeln!(out, "{}", GRID[2].cyan())?;
    out.flush()
}
