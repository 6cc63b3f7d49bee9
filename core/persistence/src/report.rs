//! FILENAME: core/persistence/src/report.rs
//! Lowers the three report views into named sheets.

use crate::{Sheet, Workbook};
use engine::{CellValue, OrderTable, RegionSummary, ORDER_COLUMNS};

// ============================================================================
// SHEET LAYOUT
// ============================================================================

pub const REGION_SHEET_NAME: &str = "Total Sales by Region";
pub const ORDERS_SHEET_NAME: &str = "Filtered Orders";
pub const TOP_REP_SHEET_NAME: &str = "Top Sales Representative";

/// Sheet names in the order they are written.
pub const REPORT_SHEET_NAMES: [&str; 3] = [REGION_SHEET_NAME, ORDERS_SHEET_NAME, TOP_REP_SHEET_NAME];

pub const REGION_HEADERS: [&str; 2] = ["Region", "Total"];
pub const TOP_REP_HEADER: &str = "Top Sales Rep";

// ============================================================================
// SALES REPORT
// ============================================================================

/// The computed results of one run, ready to be written.
#[derive(Debug, Clone)]
pub struct SalesReport {
    pub region_summary: RegionSummary,
    /// The working table: filtered when an item was requested.
    pub filtered_orders: OrderTable,
    pub top_rep: String,
}

impl SalesReport {
    pub fn to_workbook(&self) -> Workbook {
        Workbook {
            sheets: vec![
                self.region_sheet(),
                self.orders_sheet(),
                self.top_rep_sheet(),
            ],
        }
    }

    fn region_sheet(&self) -> Sheet {
        let rows = self
            .region_summary
            .rows
            .iter()
            .map(|r| vec![CellValue::Text(r.region.clone()), CellValue::Number(r.total)])
            .collect();

        Sheet::new(REGION_SHEET_NAME, &REGION_HEADERS, rows)
    }

    fn orders_sheet(&self) -> Sheet {
        let rows = self.filtered_orders.iter().map(|o| o.to_cells()).collect();
        Sheet::new(ORDERS_SHEET_NAME, &ORDER_COLUMNS, rows)
    }

    fn top_rep_sheet(&self) -> Sheet {
        Sheet::new(
            TOP_REP_SHEET_NAME,
            &[TOP_REP_HEADER],
            vec![vec![CellValue::Text(self.top_rep.clone())]],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{OrderRow, RegionTotal};

    fn sample_report() -> SalesReport {
        SalesReport {
            region_summary: RegionSummary {
                rows: vec![
                    RegionTotal { region: "Central".to_string(), total: 1179.14 },
                    RegionTotal { region: "East".to_string(), total: 189.05 },
                ],
            },
            filtered_orders: OrderTable::new(vec![OrderRow::new(
                CellValue::Text("1-6-21".to_string()),
                "East",
                "Jones",
                "Pencil",
                95.0,
                1.99,
                189.05,
            )]),
            top_rep: "Jones".to_string(),
        }
    }

    #[test]
    fn test_sheets_in_order() {
        let workbook = sample_report().to_workbook();
        let names: Vec<&str> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, REPORT_SHEET_NAMES.to_vec());
    }

    #[test]
    fn test_region_sheet_layout() {
        let workbook = sample_report().to_workbook();
        let sheet = &workbook.sheets[0];

        assert_eq!(sheet.headers, vec!["Region".to_string(), "Total".to_string()]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0][0], CellValue::Text("Central".to_string()));
    }

    #[test]
    fn test_orders_sheet_keeps_all_columns() {
        let workbook = sample_report().to_workbook();
        let sheet = &workbook.sheets[1];

        assert_eq!(sheet.headers.len(), 7);
        assert_eq!(sheet.headers[5], "Unit Cost");
        assert_eq!(sheet.rows[0].len(), 7);
    }

    #[test]
    fn test_top_rep_sheet_is_single_cell() {
        let workbook = sample_report().to_workbook();
        let sheet = &workbook.sheets[2];

        assert_eq!(sheet.headers, vec![TOP_REP_HEADER.to_string()]);
        assert_eq!(sheet.rows, vec![vec![CellValue::Text("Jones".to_string())]]);
    }

    #[test]
    fn test_empty_filter_still_writes_header() {
        let mut report = sample_report();
        report.filtered_orders = OrderTable::default();

        let workbook = report.to_workbook();
        assert_eq!(workbook.sheets[1].headers.len(), 7);
        assert!(workbook.sheets[1].rows.is_empty());
    }
}
