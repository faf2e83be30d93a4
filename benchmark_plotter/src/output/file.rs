//!
//! Represents a single output file in a set of many.
//!

use std::path::PathBuf;

///
/// Represents a single output file in a set of many.
///
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct File {
    /// Path to this file relative to the compiler's output directory.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(stem: &str, extension: &str, content: String) -> Self {
        let path = format!("{stem}.{extension}").into();
        Self { path, content }
    }
}
