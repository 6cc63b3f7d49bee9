//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the sales order engine.
//! CONTEXT: Typed order rows plus the pure aggregations run over them.
//! No file I/O happens here; see the `persistence` crate for that.

pub mod aggregate;
pub mod cell;
pub mod error;
pub mod order;

// Re-export commonly used types at the crate root
pub use aggregate::{filter_by_item, top_rep, total_by_region, totals_by_rep, RegionSummary, RegionTotal};
pub use cell::CellValue;
pub use error::EngineError;
pub use order::{OrderRow, OrderTable, ORDER_COLUMNS};
