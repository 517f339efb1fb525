//! Error types for the parser.
//!
//! This module defines the errors recorded while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way a statement can fail
//! - Error names and suggestions used when rendering

pub mod errors;
