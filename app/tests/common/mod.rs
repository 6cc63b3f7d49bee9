//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for sales report integration tests.

#![allow(dead_code)]

use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// FIXTURES
// ============================================================================

/// The three-order sample used throughout the tests.
pub struct SalesFixture;

impl SalesFixture {
    pub fn headers() -> Vec<&'static str> {
        vec!["OrderDate", "Region", "Rep", "Item", "Units", "Unit Cost", "Total"]
    }

    pub fn data() -> Vec<(&'static str, &'static str, &'static str, &'static str, f64, f64, f64)> {
        vec![
            ("1-6-21", "East", "Jones", "Pencil", 95.0, 1.99, 189.05),
            ("1-23-21", "Central", "Kivell", "Binder", 50.0, 19.99, 999.50),
            ("2-9-21", "Central", "Jardine", "Pencil", 36.0, 4.99, 179.64),
        ]
    }

    pub fn csv() -> String {
        let mut out = Self::headers().join(",");
        out.push('\n');
        for (date, region, rep, item, units, cost, total) in Self::data() {
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                date, region, rep, item, units, cost, total
            ));
        }
        out
    }
}

// ============================================================================
// TEST HARNESS
// ============================================================================

/// A temporary directory holding the input and output files of one run.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes the sample orders as CSV.
    pub fn write_csv(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, SalesFixture::csv()).expect("write csv");
        path
    }

    /// Writes the sample orders as the first sheet of an XLSX workbook.
    pub fn write_xlsx(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (col, header) in SalesFixture::headers().iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        for (i, (date, region, rep, item, units, cost, total)) in SalesFixture::data().into_iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_string(row, 0, date).unwrap();
            sheet.write_string(row, 1, region).unwrap();
            sheet.write_string(row, 2, rep).unwrap();
            sheet.write_string(row, 3, item).unwrap();
            sheet.write_number(row, 4, units).unwrap();
            sheet.write_number(row, 5, cost).unwrap();
            sheet.write_number(row, 6, total).unwrap();
        }

        workbook.save(&path).expect("write xlsx");
        path
    }
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook = open_workbook_auto(path).expect("open output workbook");
    workbook.sheet_names()
}

pub fn sheet(path: &Path, name: &str) -> Range<Data> {
    let mut workbook = open_workbook_auto(path).expect("open output workbook");
    workbook.worksheet_range(name).expect("read sheet")
}

/// Assert that the output holds exactly the three report sheets, in order.
pub fn assert_report_sheets(path: &Path) {
    assert_eq!(
        sheet_names(path),
        vec![
            "Total Sales by Region".to_string(),
            "Filtered Orders".to_string(),
            "Top Sales Representative".to_string(),
        ]
    );
}

/// Assert that a cell contains an expected text value.
pub fn assert_cell_text(range: &Range<Data>, row: u32, col: u32, expected: &str) {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => assert_eq!(s, expected),
        other => panic!("Expected text '{}' at ({}, {}), got {:?}", expected, row, col, other),
    }
}

/// Assert that a cell contains an expected number value.
pub fn assert_cell_number(range: &Range<Data>, row: u32, col: u32, expected: f64) {
    match range.get_value((row, col)) {
        Some(Data::Float(n)) => assert!(
            (n - expected).abs() < 1e-9,
            "Expected {} at ({}, {}), got {}",
            expected, row, col, n
        ),
        Some(Data::Int(n)) => assert_eq!(*n as f64, expected),
        other => panic!("Expected number {} at ({}, {}), got {:?}", expected, row, col, other),
    }
}
