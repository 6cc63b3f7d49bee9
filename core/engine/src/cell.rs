//! FILENAME: core/engine/src/cell.rs
//! PURPOSE: Defines the format-neutral value of a single input or output cell.
//! CONTEXT: Both the CSV and the workbook readers normalise every field to a
//! `CellValue` before rows are typed, and the report writer lowers every
//! output table back to `CellValue`s before encoding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the raw content of one cell, independent of the file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Spreadsheet serial date (days since the 1899-12-30 epoch).
    DateTime(f64),
}

impl CellValue {
    /// Builds a value from a text field. Blank fields become `Empty`.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(text.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the display value of the cell as a String.
    /// Text columns (Region, Rep, Item) are keyed by this string.
    pub fn display_value(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) | CellValue::DateTime(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(true) => "TRUE".to_string(),
            CellValue::Boolean(false) => "FALSE".to_string(),
        }
    }

    /// Interprets the cell as a number.
    /// Blank cells read as zero; text must parse as a float.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Empty => Some(0.0),
            CellValue::Number(n) | CellValue::DateTime(n) => Some(*n),
            CellValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => s.parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_value())
    }
}

// Format without unnecessary decimal places
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}
