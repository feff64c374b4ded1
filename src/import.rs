//! The row loop: read, convert, insert, skip on failure.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use log::{info, warn};

use crate::error_handling::{ImportError, RowError};
use crate::record::{external_id, ProductRecord};
use crate::storage::ProductStore;

/// Row counts for one pass over a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Data rows read (header excluded)
    pub total_rows: usize,
    /// Rows staged for commit
    pub imported: usize,
    /// Rows logged and skipped
    pub skipped: usize,
}

/// Opens a CSV source. The first line is always consumed as the header.
///
/// Rows are not required to share the header's width; short rows are
/// rejected one by one while building records.
pub fn open_source(path: &Path) -> Result<Reader<File>, ImportError> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| ImportError::OpenSource {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads `source`, stages every convertible row in `store` and commits once.
///
/// Row failures are logged and skipped; only the final commit can fail.
pub async fn import_file<S: ProductStore>(
    source: &Path,
    mut store: S,
    sanitize_text: bool,
) -> Result<ImportStats, ImportError> {
    let mut reader = open_source(source)?;
    let stats = import_rows(&mut reader, &mut store, sanitize_text).await;
    store.commit().await.map_err(ImportError::Commit)?;
    Ok(stats)
}

/// Stages every row of `reader` in `store` without committing.
pub async fn import_rows<R: Read, S: ProductStore>(
    reader: &mut Reader<R>,
    store: &mut S,
    sanitize_text: bool,
) -> ImportStats {
    let mut stats = ImportStats::default();

    for result in reader.records() {
        stats.total_rows += 1;

        let (label, outcome) = match result {
            Ok(row) => {
                let outcome = import_row(store, &row, sanitize_text).await;
                (external_id(&row).to_string(), outcome)
            }
            Err(e) => {
                let label = e
                    .position()
                    .map(|p| format!("at line {}", p.line()))
                    .unwrap_or_else(|| format!("#{}", stats.total_rows));
                (label, Err(RowError::from(e)))
            }
        };

        match outcome {
            Ok(()) => stats.imported += 1,
            Err(e) => {
                warn!("Failed to insert record {}: {}", label, e);
                stats.skipped += 1;
            }
        }
    }

    stats
}

async fn import_row<S: ProductStore>(
    store: &mut S,
    row: &StringRecord,
    sanitize_text: bool,
) -> Result<(), RowError> {
    let record = ProductRecord::from_row(row, sanitize_text, &mut rand::rng())?;
    info!("Importing book: {}", record.name);
    store.insert(&record).await?;
    Ok(())
}
