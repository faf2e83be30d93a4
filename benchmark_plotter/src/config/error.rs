//!
//! Configuration loading error.
//!

use std::path::PathBuf;

///
/// Configuration loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the configuration file.
    #[error("Reading configuration file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the configuration file.
        path: PathBuf,
    },
    /// Error parsing the configuration file.
    #[error("Parsing configuration file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the configuration file.
        path: PathBuf,
    },
    /// The configuration is syntactically valid but cannot be used.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
