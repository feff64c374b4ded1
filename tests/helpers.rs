// Shared test helpers for database setup and input files.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use book_import::{Config, Destination};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

/// Header line of the catalog export.
pub const HEADER: &str = "ISBN,Title,Author,Year,Publisher,ImageSmall,ImageMedium,ImageLarge";

/// Products table as the embedded backend lays it out (no Discriminator).
///
/// The CHECK on Year lets tests force an insert failure with a negative year.
pub const SQLITE_SCHEMA: &str = "CREATE TABLE Products (
    Id TEXT NOT NULL PRIMARY KEY,
    Name TEXT,
    Description TEXT,
    Category TEXT,
    ImageSmall TEXT,
    ImageMedium TEXT,
    ImageLarge TEXT,
    Price REAL,
    DateAdded TEXT,
    ISBN TEXT,
    Author TEXT,
    Year INTEGER CHECK (Year >= 0),
    Publisher TEXT
)";

/// Creates a SQLite database file with an empty Products table.
#[allow(dead_code)] // Not every test file uses every helper
pub async fn create_products_db(dir: &Path) -> PathBuf {
    let db_path = dir.join("ProductDB.sqlite");
    let mut conn = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create test database");
    sqlx::query(SQLITE_SCHEMA)
        .execute(&mut conn)
        .await
        .expect("Failed to create Products table");
    conn.close().await.expect("Failed to close test database");
    db_path
}

/// Opens an existing test database for assertions.
#[allow(dead_code)] // Not every test file uses every helper
pub async fn open_db(db_path: &Path) -> SqliteConnection {
    SqliteConnectOptions::new()
        .filename(db_path)
        .connect()
        .await
        .expect("Failed to open test database")
}

/// Writes a CSV file made of the standard header and `rows`.
#[allow(dead_code)] // Not every test file uses every helper
pub fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("Books.csv");
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(&path, contents).expect("Failed to write CSV");
    path
}

/// Import config targeting a SQLite file.
#[allow(dead_code)] // Not every test file uses every helper
pub fn sqlite_config(source: PathBuf, db_path: PathBuf) -> Config {
    Config {
        source,
        destination: Destination::Sqlite { path: db_path },
        ..Default::default()
    }
}

/// Counts rows in Products.
#[allow(dead_code)] // Not every test file uses every helper
pub async fn count_products(db_path: &Path) -> i64 {
    let mut conn = open_db(db_path).await;
    sqlx::query_scalar("SELECT COUNT(*) FROM Products")
        .fetch_one(&mut conn)
        .await
        .expect("Failed to count products")
}
