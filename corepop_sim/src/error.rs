//! Error types for the run harness.

use corepop_core::SimError;
use thiserror::Error;

/// Errors that can occur while writing results.
#[derive(Debug, Error)]
pub enum ExportError {
    /// File could not be created or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can stop the CLI.
#[derive(Debug, Error)]
pub enum RunError {
    /// Simulation could not be built
    #[error("Simulation setup failed: {0}")]
    Setup(#[from] SimError),

    /// Requested horizon does not fit in a day count
    #[error("Horizon of {years} years overflows the day counter")]
    HorizonOverflow { years: u64 },

    /// Results could not be written
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}
