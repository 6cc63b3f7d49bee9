//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::{PersistenceError, Workbook};
use engine::CellValue;
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook, Worksheet};
use std::path::Path;

/// Number format applied to serial dates carried through from the input.
pub const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Encodes the workbook and writes it to `path`, replacing any existing file.
/// Nothing touches the filesystem until the whole workbook is encoded.
pub fn save_xlsx(workbook: &Workbook, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    for sheet in &workbook.sheets {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        // Header row
        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }

        // Data rows start directly below the header
        for (idx, row) in sheet.rows.iter().enumerate() {
            let row_num = idx as u32 + 1;
            for (col, value) in row.iter().enumerate() {
                write_cell(worksheet, row_num, col as u16, value, &date_format)?;
            }
        }

        worksheet.autofit();
    }

    xlsx.save(path)?;
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    date_format: &Format,
) -> Result<(), PersistenceError> {
    match value {
        CellValue::Empty => {}
        CellValue::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Boolean(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        CellValue::DateTime(serial) => {
            worksheet.write_number_with_format(row, col, *serial, date_format)?;
        }
    }
    Ok(())
}
