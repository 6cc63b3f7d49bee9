//! FILENAME: core/persistence/src/format.rs
//! Input format detection by file extension.

use crate::PersistenceError;
use std::path::Path;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Spreadsheet(SpreadsheetFormat),
}

/// Workbook formats read through calamine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Xlsx, // XLSX/XLSM
    Xlsb,
    Xls,
    Ods,
}

impl InputFormat {
    /// Detect format from file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, PersistenceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") | Some("xlsm") => Ok(Self::Spreadsheet(SpreadsheetFormat::Xlsx)),
            Some("xlsb") => Ok(Self::Spreadsheet(SpreadsheetFormat::Xlsb)),
            Some("xls") => Ok(Self::Spreadsheet(SpreadsheetFormat::Xls)),
            Some("ods") => Ok(Self::Spreadsheet(SpreadsheetFormat::Ods)),
            Some(other) => Err(PersistenceError::UnsupportedFormat(format!(".{}", other))),
            None => Err(PersistenceError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
