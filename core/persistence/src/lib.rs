//! FILENAME: core/persistence/src/lib.rs
//! Sales Report Persistence Module
//!
//! Loads order tables from CSV or spreadsheet files and saves the finished
//! report as a multi-sheet XLSX workbook.

mod csv_reader;
mod error;
mod format;
mod report;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_reader::read_csv;
pub use error::PersistenceError;
pub use format::{InputFormat, SpreadsheetFormat};
pub use report::{
    SalesReport, ORDERS_SHEET_NAME, REGION_HEADERS, REGION_SHEET_NAME, REPORT_SHEET_NAMES,
    TOP_REP_HEADER, TOP_REP_SHEET_NAME,
};
pub use xlsx_reader::read_spreadsheet;
pub use xlsx_writer::{save_xlsx, DATE_FORMAT};

use calamine::Reader;
use engine::{CellValue, OrderTable};
use std::path::Path;
use tracing::{debug, warn, Level};

// ============================================================================
// RAW TABLE
// ============================================================================

/// A header row plus untyped data rows, as read from any input format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

// ============================================================================
// WORKBOOK
// ============================================================================

/// An output workbook: named sheets, each a header row plus data rows.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

/// Represents a single worksheet
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: &str, headers: &[&str], rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Loads an order table, choosing the reader by file extension.
/// The extension is checked before the file is opened.
pub fn load_orders(path: &Path) -> Result<OrderTable, PersistenceError> {
    let format = InputFormat::from_path(path)?;
    let data = std::fs::read(path)?;
    debug!("read {} bytes from {} as {:?}", data.len(), path.display(), format);

    let raw = match format {
        InputFormat::Csv => read_csv(&data)?,
        InputFormat::Spreadsheet(kind) => read_spreadsheet(data, kind)?,
    };

    let table = OrderTable::from_raw(raw.headers.as_slice(), raw.rows)?;
    debug!("loaded {} orders", table.len());
    Ok(table)
}

/// Writes the three report sheets to `path`.
pub fn write_report(path: &Path, report: &SalesReport) -> Result<(), PersistenceError> {
    save_xlsx(&report.to_workbook(), path)?;

    if tracing::enabled!(Level::DEBUG) {
        match read_sheet_names(path) {
            Ok(names) => debug!("wrote report to {} with sheets {:?}", path.display(), names),
            Err(e) => warn!("wrote report to {} but could not read it back: {}", path.display(), e),
        }
    }
    Ok(())
}

/// Lists the sheet names of an existing workbook, in workbook order.
pub fn read_sheet_names(path: &Path) -> Result<Vec<String>, PersistenceError> {
    let workbook = calamine::open_workbook_auto(path)?;
    Ok(workbook.sheet_names())
}
