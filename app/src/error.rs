//! FILENAME: app/src/error.rs

use persistence::PersistenceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The input was rejected before it was opened.
    #[error("Error reading file: {0}")]
    Read(#[source] PersistenceError),

    #[error(transparent)]
    Load(PersistenceError),

    #[error(transparent)]
    Write(PersistenceError),

    #[error(transparent)]
    Engine(#[from] engine::EngineError),
}

impl ReportError {
    /// Wraps a load failure, adding context only to unsupported formats.
    pub fn from_load(err: PersistenceError) -> Self {
        match err {
            PersistenceError::UnsupportedFormat(_) => ReportError::Read(err),
            other => ReportError::Load(other),
        }
    }
}
