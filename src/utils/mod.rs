//! Utility functions.
//!
//! This module provides:
//! - Text sanitization for catalog fields

pub mod sanitize;
