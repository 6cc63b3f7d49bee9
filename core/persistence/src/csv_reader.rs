//! FILENAME: core/persistence/src/csv_reader.rs

use crate::{PersistenceError, RawTable};
use engine::CellValue;

/// Parses comma-delimited text with a header row.
/// Every field is read as text; typing happens when rows become orders.
/// Rows may be shorter than the header; their missing cells read as empty.
pub fn read_csv(data: &[u8]) -> Result<RawTable, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::from_text).collect());
    }

    Ok(RawTable { headers, rows })
}
