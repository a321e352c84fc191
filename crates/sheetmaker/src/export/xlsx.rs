//! Office Open XML (.xlsx) workbook rendering
//!
//! Produces a single-sheet workbook: a bold header row with the column names
//! followed by one row per record. Cells are typed from the column type.

use std::io::{Seek, Write};

use sheetmaker_core::{ColumnType, SheetError, Table};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const SHEET_NAME: &str = "Sheet1";

/// Style index for two-decimal numbers (built-in numFmtId 2, "0.00")
const STYLE_CURRENCY: usize = 1;
/// Style index for the bold header row
const STYLE_HEADER: usize = 2;

/// Integers longer than this lose precision as spreadsheet numbers
const MAX_NUMERIC_DIGITS: usize = 15;

const RELS_DOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#,
);

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#,
);

const WORKBOOK_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    r#"</Relationships>"#,
);

const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<fonts count="2">"#,
    r#"<font><sz val="11"/><name val="Calibri"/></font>"#,
    r#"<font><b/><sz val="11"/><name val="Calibri"/></font>"#,
    r#"</fonts>"#,
    r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#,
    r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
    r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
    r#"<cellXfs count="3">"#,
    r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#,
    r#"<xf numFmtId="2" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/>"#,
    r#"<xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/>"#,
    r#"</cellXfs>"#,
    r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
    r#"</styleSheet>"#,
);

/// A rendered cell
#[derive(Debug, Clone, PartialEq)]
enum CellValue<'a> {
    Number(&'a str),
    Text(&'a str),
}

fn workbook_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<bookViews><workbookView activeTab="0"/></bookViews>"#,
            r#"<sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets>"#,
            r#"</workbook>"#,
        ),
        SHEET_NAME
    )
}

/// Map a normalized value to a cell according to its column type
fn cell_for(column_type: ColumnType, value: &str) -> (CellValue<'_>, Option<usize>) {
    match column_type {
        ColumnType::Currency => (CellValue::Number(value), Some(STYLE_CURRENCY)),
        ColumnType::Number
            if value.len() <= MAX_NUMERIC_DIGITS
                && value.bytes().all(|b| b.is_ascii_digit())
                && (value == "0" || !value.starts_with('0')) =>
        {
            (CellValue::Number(value), None)
        }
        ColumnType::Number | ColumnType::Text | ColumnType::Date => (CellValue::Text(value), None),
    }
}

/// Render the worksheet part for a table
pub fn sheet_xml(table: &Table) -> String {
    let mut out = String::new();
    out.push_str(concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        r#"<sheetData>"#,
    ));

    out.push_str(r#"<row r="1">"#);
    for (col, column) in table.columns.iter().enumerate() {
        push_cell(&mut out, &make_cell_ref(1, col), &CellValue::Text(&column.name), Some(STYLE_HEADER));
    }
    out.push_str("</row>");

    for (i, row) in table.rows.iter().enumerate() {
        let r = i + 2;
        out.push_str(&format!(r#"<row r="{r}">"#));
        for (col, (column, value)) in table.columns.iter().zip(row.values()).enumerate() {
            let (cell, style) = cell_for(column.column_type, value);
            push_cell(&mut out, &make_cell_ref(r, col), &cell, style);
        }
        out.push_str("</row>");
    }

    out.push_str("</sheetData></worksheet>");
    out
}

fn push_cell(out: &mut String, cell_ref: &str, value: &CellValue<'_>, style: Option<usize>) {
    let s = match style {
        Some(n) => format!(" s=\"{n}\""),
        None => String::new(),
    };

    match value {
        CellValue::Number(n) => {
            out.push_str(&format!("<c r=\"{cell_ref}\"{s}><v>{n}</v></c>"));
        }
        CellValue::Text(text) => {
            let escaped = xml_escape(text);
            out.push_str(&format!(
                "<c r=\"{cell_ref}\"{s} t=\"inlineStr\"><is><t xml:space=\"preserve\">{escaped}</t></is></c>"
            ));
        }
    }
}

/// Write the complete workbook archive
pub fn write_workbook<W: Write + Seek>(writer: W, table: &Table) -> Result<W, SheetError> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip_write_str(&mut zip, "[Content_Types].xml", CONTENT_TYPES_XML, options)?;
    zip_write_str(&mut zip, "_rels/.rels", RELS_DOT_RELS, options)?;
    zip_write_str(&mut zip, "xl/workbook.xml", &workbook_xml(), options)?;
    zip_write_str(&mut zip, "xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML, options)?;
    zip_write_str(&mut zip, "xl/styles.xml", STYLES_XML, options)?;
    zip_write_str(&mut zip, "xl/worksheets/sheet1.xml", &sheet_xml(table), options)?;

    zip.finish().map_err(zip_error)
}

fn zip_write_str<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &str,
    content: &str,
    options: SimpleFileOptions,
) -> Result<(), SheetError> {
    zip.start_file(path, options).map_err(zip_error)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn zip_error(err: zip::result::ZipError) -> SheetError {
    SheetError::Zip(err.to_string())
}

/// Cell reference from a 1-based row and 0-based column, e.g. "B3"
pub fn make_cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", col_to_letters(col), row)
}

/// Column letters from a 0-based index: 0 -> "A", 26 -> "AA"
pub fn col_to_letters(mut col: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (col % 26) as u8));
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Escape XML metacharacters and drop characters XML 1.0 cannot carry
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            c if (c as u32) < 0x20 => {}
            _ => out.push(ch),
        }
    }
    out
}
