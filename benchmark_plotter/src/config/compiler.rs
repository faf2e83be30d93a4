//!
//! Compiler input mapping.
//!

///
/// Maps an input CSV file to the compiler that produced it.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Compiler {
    /// Input file name, relative to the input directory.
    pub file: String,
    /// Compiler label shown in chart captions.
    pub label: String,
    /// Output subdirectory for this compiler's artifacts.
    pub directory: String,
}

impl Compiler {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(file: &str, label: &str, directory: &str) -> Self {
        Self {
            file: file.to_owned(),
            label: label.to_owned(),
            directory: directory.to_owned(),
        }
    }
}
