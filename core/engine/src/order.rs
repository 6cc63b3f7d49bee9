//! FILENAME: core/engine/src/order.rs
//! PURPOSE: The typed sales order record and the table that holds them.
//! CONTEXT: Readers hand over a header row plus untyped `CellValue` rows;
//! `OrderTable::from_raw` locates the schema columns by header name and
//! converts each row into an `OrderRow`. Once built, a table is never
//! mutated: filtering produces a new table.

use serde::{Deserialize, Serialize};
use crate::cell::CellValue;
use crate::error::EngineError;

// ============================================================================
// COLUMN SCHEMA
// ============================================================================

pub const COL_ORDER_DATE: &str = "OrderDate";
pub const COL_REGION: &str = "Region";
pub const COL_REP: &str = "Rep";
pub const COL_ITEM: &str = "Item";
pub const COL_UNITS: &str = "Units";
pub const COL_UNIT_COST: &str = "Unit Cost";
pub const COL_TOTAL: &str = "Total";

/// Column names in the order they are read and written.
pub const ORDER_COLUMNS: [&str; 7] = [
    COL_ORDER_DATE,
    COL_REGION,
    COL_REP,
    COL_ITEM,
    COL_UNITS,
    COL_UNIT_COST,
    COL_TOTAL,
];

// ============================================================================
// ORDER ROW
// ============================================================================

/// A single sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    /// Kept exactly as read: text from CSV, a serial date from a workbook.
    pub order_date: CellValue,
    pub region: String,
    pub rep: String,
    pub item: String,
    pub units: f64,
    pub unit_cost: f64,
    pub total: f64,
}

impl OrderRow {
    pub fn new(
        order_date: CellValue,
        region: &str,
        rep: &str,
        item: &str,
        units: f64,
        unit_cost: f64,
        total: f64,
    ) -> Self {
        OrderRow {
            order_date,
            region: region.to_string(),
            rep: rep.to_string(),
            item: item.to_string(),
            units,
            unit_cost,
            total,
        }
    }

    /// Returns the row as cells, in `ORDER_COLUMNS` order.
    pub fn to_cells(&self) -> Vec<CellValue> {
        vec![
            self.order_date.clone(),
            CellValue::Text(self.region.clone()),
            CellValue::Text(self.rep.clone()),
            CellValue::Text(self.item.clone()),
            CellValue::Number(self.units),
            CellValue::Number(self.unit_cost),
            CellValue::Number(self.total),
        ]
    }
}

// ============================================================================
// ORDER TABLE
// ============================================================================

/// An ordered sequence of orders sharing the `ORDER_COLUMNS` schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTable {
    rows: Vec<OrderRow>,
}

/// Positions of the schema columns within a raw header row.
struct ColumnMap {
    order_date: usize,
    region: usize,
    rep: usize,
    item: usize,
    units: usize,
    unit_cost: usize,
    total: usize,
}

impl ColumnMap {
    fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self, EngineError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.as_ref() == name)
                .ok_or_else(|| EngineError::MissingColumn(name.to_string()))
        };

        Ok(ColumnMap {
            order_date: find(COL_ORDER_DATE)?,
            region: find(COL_REGION)?,
            rep: find(COL_REP)?,
            item: find(COL_ITEM)?,
            units: find(COL_UNITS)?,
            unit_cost: find(COL_UNIT_COST)?,
            total: find(COL_TOTAL)?,
        })
    }
}

impl OrderTable {
    pub fn new(rows: Vec<OrderRow>) -> Self {
        OrderTable { rows }
    }

    /// Builds a table from a header row and untyped data rows.
    /// Columns are matched by exact header name; extra columns are ignored
    /// and short rows read their missing trailing cells as empty.
    pub fn from_raw<S: AsRef<str>>(
        headers: &[S],
        raw_rows: Vec<Vec<CellValue>>,
    ) -> Result<Self, EngineError> {
        let columns = ColumnMap::from_headers(headers)?;
        let mut rows = Vec::with_capacity(raw_rows.len());

        for (idx, raw) in raw_rows.iter().enumerate() {
            let row_number = idx + 1;
            let cell = |col: usize| raw.get(col).cloned().unwrap_or_default();
            let number = |col: usize, name: &str| {
                let value = cell(col);
                value.as_number().ok_or_else(|| EngineError::InvalidNumber {
                    row: row_number,
                    column: name.to_string(),
                    value: value.display_value(),
                })
            };

            rows.push(OrderRow {
                order_date: cell(columns.order_date),
                region: cell(columns.region).display_value(),
                rep: cell(columns.rep).display_value(),
                item: cell(columns.item).display_value(),
                units: number(columns.units, COL_UNITS)?,
                unit_cost: number(columns.unit_cost, COL_UNIT_COST)?,
                total: number(columns.total, COL_TOTAL)?,
            });
        }

        Ok(OrderTable { rows })
    }

    pub fn rows(&self) -> &[OrderRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderRow> {
        self.rows.iter()
    }

    /// Sum of `total` over every row, in row order.
    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|r| r.total).sum()
    }
}

impl FromIterator<OrderRow> for OrderTable {
    fn from_iter<I: IntoIterator<Item = OrderRow>>(iter: I) -> Self {
        OrderTable {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OrderTable {
    type Item = &'a OrderRow;
    type IntoIter = std::slice::Iter<'a, OrderRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
