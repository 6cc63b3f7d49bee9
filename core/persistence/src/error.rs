//! FILENAME: core/persistence/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet read error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("XLSX write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("Unsupported file format '{0}'. Please provide a .csv or .xlsx file.")]
    UnsupportedFormat(String),

    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    #[error(transparent)]
    Engine(#[from] engine::EngineError),
}
