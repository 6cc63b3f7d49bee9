//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line surface of the report generator.

use crate::report::RunOptions;
use clap::Parser;
use std::path::PathBuf;

/// Process sales order data.
#[derive(Parser, Debug)]
#[command(name = "sales-report", version)]
#[command(about = "Process sales order data", long_about = None)]
pub struct Cli {
    /// Path to the input .csv or spreadsheet file
    #[arg(long)]
    pub input: PathBuf,

    /// Path to the output .xlsx file
    #[arg(long)]
    pub output: PathBuf,

    /// Filter orders by item type
    #[arg(long)]
    pub item: Option<String>,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        RunOptions {
            input: cli.input,
            output: cli.output,
            item: cli.item,
        }
    }
}
