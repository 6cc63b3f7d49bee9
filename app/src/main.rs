//! FILENAME: app/src/main.rs

use clap::Parser;
use sales_report::{logging, run, Cli, RunOptions};

fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    let options = RunOptions::from(cli);
    if let Err(e) = try_main(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main(options: &RunOptions) -> anyhow::Result<()> {
    let summary = run(options)?;
    println!("{}", summary.completion_notice());
    Ok(())
}
