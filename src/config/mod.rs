//! Application configuration and constants.
//!
//! This module provides:
//! - Default connection parameters and record constants
//! - The library `Config` and `Destination` types
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, Destination, DestinationCommand, LogFormat, LogLevel, Opt, PgParams};
