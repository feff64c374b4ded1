//! PostgreSQL server backend.

use log::{debug, LevelFilter};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection, Postgres, Transaction};

use crate::config::{PgParams, BOOK_DISCRIMINATOR};
use crate::record::ProductRecord;
use crate::storage::ProductStore;

// Identifiers are quoted: the table was created with mixed-case names.
const INSERT_PRODUCT: &str = r#"INSERT INTO "Products" (
        "Id", "Discriminator", "Name", "Description", "Category",
        "ImageSmall", "ImageMedium", "ImageLarge", "Price", "DateAdded",
        "ISBN", "Author", "Year", "Publisher"
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, CURRENT_TIMESTAMP, $10, $11, $12, $13)"#;

/// Opens a single connection to a PostgreSQL server.
pub async fn connect_postgres(params: &PgParams) -> Result<PgConnection, sqlx::Error> {
    debug!(
        "Connecting to PostgreSQL at {}:{} (database {}, user {})",
        params.host, params.port, params.database, params.username
    );
    PgConnectOptions::new()
        .host(&params.host)
        .port(params.port)
        .database(&params.database)
        .username(&params.username)
        .password(&params.password)
        .log_statements(LevelFilter::Trace)
        .connect()
        .await
}

/// Stages product records in one PostgreSQL transaction.
pub struct PgStore<'c> {
    tx: Transaction<'c, Postgres>,
}

impl<'c> PgStore<'c> {
    /// Begins the import transaction on `conn`.
    pub async fn begin(conn: &'c mut PgConnection) -> Result<Self, sqlx::Error> {
        Ok(Self {
            tx: conn.begin().await?,
        })
    }
}

impl ProductStore for PgStore<'_> {
    async fn insert(&mut self, record: &ProductRecord) -> Result<(), sqlx::Error> {
        // A failed statement aborts the whole transaction in PostgreSQL unless
        // it runs inside a savepoint.
        let mut savepoint = Connection::begin(&mut *self.tx).await?;

        sqlx::query(INSERT_PRODUCT)
            .bind(record.id)
            .bind(BOOK_DISCRIMINATOR)
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
