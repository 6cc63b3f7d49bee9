//! FILENAME: app/src/report.rs
//! PURPOSE: Runs one load -> aggregate -> write pass.
//! CONTEXT: The region summary always comes from the full table; the top
//! rep comes from the working table, which is filtered only when an item
//! was requested. The output file is written once, after every result has
//! been computed, so a failed run leaves no output behind.

use crate::error::ReportError;
use engine::{filter_by_item, top_rep, total_by_region};
use persistence::{load_orders, write_report, SalesReport};
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for a single run, taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Item to filter on. `None` or an empty string keeps every order.
    pub item: Option<String>,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        RunOptions {
            input: input.into(),
            output: output.into(),
            item: None,
        }
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub orders_read: usize,
    pub orders_written: usize,
    pub regions: usize,
    pub top_rep: String,
}

impl RunSummary {
    /// The line printed when a run finishes.
    pub fn completion_notice(&self) -> String {
        format!("Processed data saved to {}", self.output.display())
    }
}

pub fn run(options: &RunOptions) -> Result<RunSummary, ReportError> {
    let table = load_orders(&options.input).map_err(ReportError::from_load)?;
    debug!("loaded {} orders from {}", table.len(), options.input.display());

    let orders_read = table.len();
    let region_summary = total_by_region(&table);

    let working = match options.item.as_deref().filter(|item| !item.is_empty()) {
        Some(item) => {
            let filtered = filter_by_item(&table, item);
            debug!("item filter '{}' kept {} of {} orders", item, filtered.len(), orders_read);
            filtered
        }
        None => table,
    };

    let best_rep = top_rep(&working)?;

    let report = SalesReport {
        region_summary,
        filtered_orders: working,
        top_rep: best_rep,
    };
    write_report(&options.output, &report).map_err(ReportError::Write)?;

    let summary = RunSummary {
        output: options.output.clone(),
        orders_read,
        orders_written: report.filtered_orders.len(),
        regions: report.region_summary.len(),
        top_rep: report.top_rep,
    };
    info!(
        "{} orders read, {} written, {} regions, top rep {}",
        summary.orders_read, summary.orders_written, summary.regions, summary.top_rep
    );

    Ok(summary)
}
