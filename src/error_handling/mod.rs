//! Error handling.
//!
//! This module provides the error types for the two failure tiers of an import:
//! - **Fatal** (`ImportError`): connection, source file, transaction begin/commit
//! - **Row-scoped** (`RowError`): anything raised while reading, converting or
//!   inserting a single row; the row is skipped and the run continues

mod types;

pub use types::{ImportError, InitializationError, RowError};
