// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::{PersistenceError, RawTable, SpreadsheetFormat};
use calamine::{open_workbook_from_rs, Data, Ods, Range, Reader, Xls, Xlsb, Xlsx};
use engine::CellValue;
use std::io::Cursor;

type Source = Cursor<Vec<u8>>;

/// Parses the first sheet of a workbook. The first row is the header.
pub fn read_spreadsheet(data: Vec<u8>, format: SpreadsheetFormat) -> Result<RawTable, PersistenceError> {
    let range = match format {
        SpreadsheetFormat::Xlsx => first_sheet::<Xlsx<Source>>(data)?,
        SpreadsheetFormat::Xlsb => first_sheet::<Xlsb<Source>>(data)?,
        SpreadsheetFormat::Xls => first_sheet::<Xls<Source>>(data)?,
        SpreadsheetFormat::Ods => first_sheet::<Ods<Source>>(data)?,
    };

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(|c| to_cell_value(c).display_value()).collect())
        .unwrap_or_default();

    let rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(to_cell_value).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

fn first_sheet<R>(data: Vec<u8>) -> Result<Range<Data>, PersistenceError>
where
    R: Reader<Source>,
    calamine::Error: From<R::Error>,
{
    let mut workbook: R = open_workbook_from_rs(Cursor::new(data)).map_err(calamine::Error::from)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(PersistenceError::EmptyWorkbook)?
        .map_err(calamine::Error::from)?;

    Ok(range)
}

fn to_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from_text(s),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
