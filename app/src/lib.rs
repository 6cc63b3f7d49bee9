//! FILENAME: app/src/lib.rs
//! Sales report generator.
//!
//! Reads sales orders from a CSV or spreadsheet file and writes a workbook
//! with the total sales per region, the (optionally item-filtered) orders
//! and the top sales representative.

pub mod cli;
pub mod error;
pub mod logging;
pub mod report;

pub use cli::Cli;
pub use error::ReportError;
pub use report::{run, RunOptions, RunSummary};
