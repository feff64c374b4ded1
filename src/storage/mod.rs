//! Database access for the `Products` table.
//!
//! Each backend opens exactly one connection and stages every insert in a
//! single transaction that is committed once at the end of the run. Inserts
//! run inside a savepoint so a rejected row is rolled back on its own and the
//! surrounding transaction stays usable.

mod postgres;
mod sqlite;

pub use postgres::{connect_postgres, PgStore};
pub use sqlite::{connect_sqlite, SqliteStore};

use crate::record::ProductRecord;

/// A destination that accepts product records inside one open transaction.
// Static dispatch only; the returned futures carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait ProductStore {
    /// Stages one record. On error nothing from this record is kept.
    async fn insert(&mut self, record: &ProductRecord) -> Result<(), sqlx::Error>;

    /// Commits every staged record.
    async fn commit(self) -> Result<(), sqlx::Error>
    where
        Self: Sized;
}
