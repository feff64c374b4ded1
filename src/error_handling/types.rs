//! Error type definitions.
//!
//! Import failures fall into two tiers: `ImportError` aborts the run, while
//! `RowError` only costs the row it was raised for.

use std::num::ParseIntError;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal errors that stop an import before or after the row loop.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The destination could not be reached or opened.
    #[error("Failed to connect to {destination}: {source}")]
    Connect {
        /// Destination as shown to the user (never includes the password)
        destination: String,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// The source CSV file could not be opened.
    #[error("Failed to open source file {}: {source}", .path.display())]
    OpenSource {
        /// Path that was requested
        path: PathBuf,
        /// Reader error
        #[source]
        source: csv::Error,
    },

    /// The import transaction could not be started.
    #[error("Failed to begin import transaction: {0}")]
    Begin(#[source] sqlx::Error),

    /// The final commit failed; nothing from this run was persisted.
    #[error("Failed to commit imported rows: {0}")]
    Commit(#[source] sqlx::Error),
}

/// Row-scoped errors. The row is logged and skipped.
#[derive(Error, Debug)]
pub enum RowError {
    /// The CSV reader could not decode the row.
    #[error("unreadable row: {0}")]
    Read(#[from] csv::Error),

    /// The row ended before a required column.
    #[error("missing field {name} (column {index})")]
    MissingField {
        /// Zero-based column index
        index: usize,
        /// Column name in the source header
        name: &'static str,
    },

    /// The year column is neither the "0" sentinel nor an integer.
    #[error("invalid year {value:?}: {source}")]
    InvalidYear {
        /// Raw field content
        value: String,
        /// Parse failure
        #[source]
        source: ParseIntError,
    },

    /// The database rejected the INSERT.
    #[error("insert failed: {0}")]
    Insert(#[from] sqlx::Error),
}
