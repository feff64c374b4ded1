//! Configuration types and CLI options.
//!
//! This module defines the library configuration (`Config`, `Destination`) and
//! the clap-derived command-line surface (`Opt`) that produces it.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_PG_DATABASE, DEFAULT_PG_HOST, DEFAULT_PG_PORT, DEFAULT_PG_USERNAME,
    DEFAULT_SOURCE_PATH, DEFAULT_SQLITE_PATH,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Connection parameters for the PostgreSQL backend.
#[derive(Clone)]
pub struct PgParams {
    /// Server host name or address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database name
    pub database: String,
    /// Login user
    pub username: String,
    /// Login password
    pub password: String,
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for PgParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Target store for the import.
#[derive(Debug, Clone)]
pub enum Destination {
    /// Embedded SQLite database file. The file must already exist.
    Sqlite {
        /// Path to the database file
        path: PathBuf,
    },
    /// PostgreSQL server
    Postgres(PgParams),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Sqlite { path } => write!(f, "sqlite:{}", path.display()),
            Destination::Postgres(p) => write!(
                f,
                "postgres://{}@{}:{}/{}",
                p.username, p.host, p.port, p.database
            ),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use book_import::{Config, Destination};
/// use std::path::PathBuf;
///
/// let config = Config {
///     source: PathBuf::from("books.csv"),
///     destination: Destination::Sqlite {
///         path: PathBuf::from("products.sqlite"),
///     },
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to import
    pub source: PathBuf,

    /// Where the records are written
    pub destination: Destination,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Strip punctuation and symbols from title, author and publisher
    pub sanitize_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_PATH),
            destination: Destination::Sqlite {
                path: PathBuf::from(DEFAULT_SQLITE_PATH),
            },
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            sanitize_text: false,
        }
    }
}

/// Command-line options for the `book_import` binary.
///
/// # Examples
///
/// ```bash
/// # Import into the default SQLite file
/// book_import sqlite
///
/// # Import a specific file into PostgreSQL
/// BOOK_IMPORT_DB_PASSWORD=secret book_import --source books.csv postgres --host db.local
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "book_import",
    about = "Imports a CSV book catalog into a Products table."
)]
pub struct Opt {
    /// CSV file to import (first line is treated as a header)
    #[arg(long, env = "BOOK_IMPORT_SOURCE", default_value = DEFAULT_SOURCE_PATH)]
    pub source: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Strip characters other than letters, digits, underscores and whitespace
    /// from title, author and publisher before storing them
    #[arg(long)]
    pub sanitize_text: bool,

    /// Target database
    #[command(subcommand)]
    pub destination: DestinationCommand,
}

/// Backend selection subcommands.
#[derive(Debug, Subcommand)]
pub enum DestinationCommand {
    /// Write into an existing SQLite database file
    Sqlite {
        /// SQLite database file
        #[arg(long, env = "BOOK_IMPORT_SQLITE_PATH", default_value = DEFAULT_SQLITE_PATH)]
        db: PathBuf,
    },
    /// Write into a PostgreSQL database
    Postgres {
        /// Server host
        #[arg(long, env = "BOOK_IMPORT_DB_HOST", default_value = DEFAULT_PG_HOST)]
        host: String,

        /// Server port
        #[arg(long, env = "BOOK_IMPORT_DB_PORT", default_value_t = DEFAULT_PG_PORT)]
        port: u16,

        /// Database name
        #[arg(long, env = "BOOK_IMPORT_DB_NAME", default_value = DEFAULT_PG_DATABASE)]
        database: String,

        /// Login user
        #[arg(long, env = "BOOK_IMPORT_DB_USER", default_value = DEFAULT_PG_USERNAME)]
        username: String,

        /// Login password
        #[arg(long, env = "BOOK_IMPORT_DB_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

impl From<DestinationCommand> for Destination {
    fn from(cmd: DestinationCommand) -> Self {
        match cmd {
            DestinationCommand::Sqlite { db } => Destination::Sqlite { path: db },
            DestinationCommand::Postgres {
                host,
                port,
                database,
                username,
                password,
            } => Destination::Postgres(PgParams {
                host,
                port,
                database,
                username,
                password,
            }),
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Config {
            source: opt.source,
            destination: opt.destination.into(),
            log_level: opt.log_level,
            log_format: opt.log_format,
            sanitize_text: opt.sanitize_text,
        }
    }
}
