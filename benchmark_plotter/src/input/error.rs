//!
//! Timing table loading error.
//!

use std::path::PathBuf;

///
/// Timing table loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing the input file as CSV.
    #[error("Parsing input file {path:?}: {error}")]
    Parsing {
        /// The underlying CSV error.
        error: csv::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// A required column is absent from the header.
    #[error("Input file {path:?} has no `{column}` column")]
    MissingColumn {
        /// The missing column name.
        column: String,
        /// The path to the input file.
        path: PathBuf,
    },
    /// A measurement row lacks a required value.
    #[error("Input file {path:?}, line {line}: missing `{column}` value")]
    MissingValue {
        /// The column with no value.
        column: String,
        /// The 1-based line number.
        line: u64,
        /// The path to the input file.
        path: PathBuf,
    },
    /// A time value is not a finite non-negative number.
    #[error("Input file {path:?}, line {line}: invalid time `{value}`")]
    InvalidTime {
        /// The raw value.
        value: String,
        /// The 1-based line number.
        line: u64,
        /// The path to the input file.
        path: PathBuf,
    },
    /// The same kernel is measured twice for one dataset.
    #[error("Input file {path:?}, line {line}: kernel `{kernel}` is already measured for `{dataset}`")]
    DuplicateKernel {
        /// The dataset tag.
        dataset: String,
        /// The duplicated kernel name.
        kernel: String,
        /// The 1-based line number of the duplicate.
        line: u64,
        /// The path to the input file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Whether the error is caused by the file contents rather than by the file system.
    ///
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::Reading { .. })
    }
}
