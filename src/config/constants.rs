//! Configuration constants.
//!
//! Default connection parameters, the fixed target table layout, and the
//! value substitutions applied while building product records.

// Defaults for the CLI and `Config::default()`
/// Default input CSV path
pub const DEFAULT_SOURCE_PATH: &str = "./csv/Books.csv";
/// Default SQLite database file
pub const DEFAULT_SQLITE_PATH: &str = "ProductDB.sqlite";
/// Default PostgreSQL host
pub const DEFAULT_PG_HOST: &str = "localhost";
/// Default PostgreSQL port
pub const DEFAULT_PG_PORT: u16 = 5432;
/// Default PostgreSQL database name
pub const DEFAULT_PG_DATABASE: &str = "ProductDB";
/// Default PostgreSQL user name
pub const DEFAULT_PG_USERNAME: &str = "sa";

// Record construction
/// Year stored when the source row carries the "0" sentinel
pub const FALLBACK_YEAR: i32 = 1990;
/// Source value that marks an unknown publication year
pub const YEAR_SENTINEL: &str = "0";
/// Lower bound of the generated price, in cents (6.99)
pub const PRICE_MIN_CENTS: u32 = 699;
/// Upper bound of the generated price, in cents (22.00)
pub const PRICE_MAX_CENTS: u32 = 2200;
/// Value written to the `Discriminator` column (server backend only)
pub const BOOK_DISCRIMINATOR: &str = "Book";
/// Value written to the `Category` column
pub const BOOK_CATEGORY: &str = "book";

/// Number of positional fields a source row must carry
pub const SOURCE_FIELD_COUNT: usize = 8;
