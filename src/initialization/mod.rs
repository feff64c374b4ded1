//! Application initialization.
//!
//! Process-wide setup performed by the binary before an import runs.

mod logger;

pub use logger::init_logger_with;
