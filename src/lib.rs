//! book_import library: load a CSV book catalog into a `Products` table.
//!
//! Each data row becomes one product with a fresh UUID and a generated price.
//! Rows that cannot be read, converted or inserted are logged and skipped; the
//! rest are committed together at the end of the run.
//!
//! # Example
//!
//! ```no_run
//! use book_import::{run_import, Config, Destination};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     source: PathBuf::from("csv/Books.csv"),
//!     destination: Destination::Sqlite {
//!         path: PathBuf::from("ProductDB.sqlite"),
//!     },
//!     ..Default::default()
//! };
//!
//! let report = run_import(config).await?;
//! println!("{} of {} rows imported", report.imported, report.total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod import;
pub mod initialization;
pub mod record;
pub mod storage;
pub mod utils;

// Re-export public API
pub use config::{Config, Destination, LogFormat, LogLevel, PgParams};
pub use error_handling::{ImportError, RowError};
pub use import::ImportStats;
pub use record::ProductRecord;
pub use run::{run_import, ImportReport};

// Internal run module (connect, import, commit, close)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use log::{info, warn};
    use sqlx::Connection;

    use crate::config::{Config, Destination};
    use crate::error_handling::ImportError;
    use crate::import::{import_file, ImportStats};
    use crate::storage::{connect_postgres, connect_sqlite, PgStore, SqliteStore};

    /// Results of an import run.
    #[derive(Debug, Clone)]
    pub struct ImportReport {
        /// Data rows read from the source (header excluded)
        pub total_rows: usize,
        /// Rows committed to the destination
        pub imported: usize,
        /// Rows skipped after a row-level failure
        pub skipped: usize,
        /// Source CSV file
        pub source: PathBuf,
        /// Destination as displayed to the user (no credentials)
        pub destination: String,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Imports `config.source` into `config.destination`.
    ///
    /// The destination connection is opened first; if that fails nothing else
    /// happens. Every row is then converted and inserted inside one
    /// transaction, which is committed once after the last row.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The destination cannot be connected to
    /// - The source file cannot be opened
    /// - The transaction cannot be started or committed
    ///
    /// Row-level failures are not errors; they are logged and counted in
    /// `ImportReport::skipped`.
    pub async fn run_import(config: Config) -> Result<ImportReport, ImportError> {
        let start = Instant::now();
        let destination = config.destination.to_string();
        info!("Importing {} into {}", config.source.display(), destination);

        let connect_error = |source| ImportError::Connect {
            destination: destination.clone(),
            source,
        };

        let stats: ImportStats = match &config.destination {
            Destination::Sqlite { path } => {
                let mut conn = connect_sqlite(path).await.map_err(connect_error)?;
                let store = SqliteStore::begin(&mut conn)
                    .await
                    .map_err(ImportError::Begin)?;
                let stats = import_file(&config.source, store, config.sanitize_text).await?;
                if let Err(e) = conn.close().await {
                    warn!("Failed to close SQLite connection cleanly: {e}");
                }
                stats
            }
            Destination::Postgres(params) => {
                let mut conn = connect_postgres(params).await.map_err(connect_error)?;
                let store = PgStore::begin(&mut conn)
                    .await
                    .map_err(ImportError::Begin)?;
                let stats = import_file(&config.source, store, config.sanitize_text).await?;
                if let Err(e) = conn.close().await {
                    warn!("Failed to close PostgreSQL connection cleanly: {e}");
                }
                stats
            }
        };

        info!(
            "Committed {} of {} rows ({} skipped)",
            stats.imported, stats.total_rows, stats.skipped
        );

        Ok(ImportReport {
            total_rows: stats.total_rows,
            imported: stats.imported,
            skipped: stats.skipped,
            source: config.source,
            destination,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
