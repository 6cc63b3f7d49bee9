//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Cannot find the top sales representative: no orders with a rep")]
    EmptyTable,

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Row {row}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}
