//! Embedded SQLite backend.

use std::path::Path;

use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, Sqlite, Transaction};

use crate::record::ProductRecord;
use crate::storage::ProductStore;

// No Discriminator column in the embedded schema; DateAdded uses the store's date.
const INSERT_PRODUCT: &str = "INSERT INTO Products (
        Id, Name, Description, Category, ImageSmall, ImageMedium, ImageLarge,
        Price, DateAdded, ISBN, Author, Year, Publisher
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, DATE('now'), ?, ?, ?, ?)";

/// Opens a single connection to an existing SQLite database file.
///
/// A missing file is an error; the importer never creates a database.
pub async fn connect_sqlite(path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    debug!("Opening SQLite database at {}", path.display());
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false)
        .connect()
        .await
}

/// Stages product records in one SQLite transaction.
pub struct SqliteStore<'c> {
    tx: Transaction<'c, Sqlite>,
}

impl<'c> SqliteStore<'c> {
    /// Begins the import transaction on `conn`.
    pub async fn begin(conn: &'c mut SqliteConnection) -> Result<Self, sqlx::Error> {
        Ok(Self {
            tx: conn.begin().await?,
        })
    }
}

impl ProductStore for SqliteStore<'_> {
    async fn insert(&mut self, record: &ProductRecord) -> Result<(), sqlx::Error> {
        let mut savepoint = Connection::begin(&mut *self.tx).await?;

        sqlx::query(INSERT_PRODUCT)
            .bind(record.id.to_string())
            .bind(&record.name)
            .bind(&record.description)
            .bind(record.category)
            .bind(&record.image_small)
            .bind(&record.image_medium)
            .bind(&record.image_large)
            .bind(record.price)
            .bind(&record.isbn)
            .bind(&record.author)
            .bind(record.year)
            .bind(&record.publisher)
            .execute(&mut *savepoint)
            .await?;

        savepoint.commit().await
    }

    async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}
