//!
//! The benchmark plotter configuration.
//!

pub mod columns;
pub mod compiler;
pub mod error;

use std::collections::HashSet;
use std::path::Path;

use self::columns::Columns;
use self::compiler::Compiler;
use self::error::Error as ConfigError;

///
/// The benchmark plotter configuration.
///
/// The defaults describe the ATAX benchmark suite built with GCC and Clang.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset tags to report on, in processing order.
    pub datasets: Vec<String>,
    /// The kernel every speedup is measured against.
    pub baseline_kernel: String,
    /// Input files and the compilers they belong to.
    pub compilers: Vec<Compiler>,
    /// Input CSV column names.
    pub columns: Columns,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            datasets: [
                "MINI_DATASET",
                "SMALL_DATASET",
                "STANDARD_DATASET",
                "LARGE_DATASET",
                "EXTRALARGE_DATASET",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            baseline_kernel: "SEQUENTIAL".to_owned(),
            compilers: vec![
                Compiler::new("atax_timings.csv", "GCC", "gcc"),
                Compiler::new("atax_timings_clang.csv", "Clang", "clang"),
            ],
            columns: Columns::default(),
        }
    }
}

impl Config {
    ///
    /// Checks the configuration for values that would make a run meaningless.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.datasets.is_empty() {
            return Err(ConfigError::Invalid("no datasets configured".to_owned()));
        }
        if self.baseline_kernel.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "the baseline kernel must not be empty".to_owned(),
            ));
        }
        if self.compilers.is_empty() {
            return Err(ConfigError::Invalid("no compilers configured".to_owned()));
        }

        let mut directories = HashSet::with_capacity(self.compilers.len());
        for compiler in self.compilers.iter() {
            if compiler.file.trim().is_empty() || compiler.directory.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "compiler `{}` must have both an input file and an output directory",
                    compiler.label
                )));
            }
            if !directories.insert(compiler.directory.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "output directory `{}` is used by more than one compiler",
                    compiler.directory
                )));
            }
        }
        Ok(())
    }

    ///
    /// Returns the compiler mapped to the input file name, if any.
    ///
    pub fn compiler_by_file(&self, file: &str) -> Option<&Compiler> {
        self.compilers
            .iter()
            .find(|compiler| compiler.file.as_str() == file)
    }
}

impl TryFrom<&Path> for Config {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let config: Self =
            serde_json::from_str(text.as_str()).map_err(|error| ConfigError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::Compiler;
    use super::Config;
    use super::ConfigError;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        config.validate().expect("Default configuration must be valid");
        assert_eq!(config.datasets.len(), 5);
        assert_eq!(config.baseline_kernel, "SEQUENTIAL");
        assert_eq!(
            config
                .compiler_by_file("atax_timings_clang.csv")
                .map(|compiler| compiler.label.as_str()),
            Some("Clang")
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "datasets": ["MINI_DATASET"], "columns": { "time": "Seconds" } }"#,
        )
        .expect("Failed to parse configuration");
        assert_eq!(config.datasets, vec!["MINI_DATASET".to_owned()]);
        assert_eq!(config.baseline_kernel, "SEQUENTIAL");
        assert_eq!(config.columns.time, "Seconds");
        assert_eq!(config.columns.dataset, "Dataset");
        assert_eq!(config.compilers.len(), 2);
    }

    #[test]
    fn duplicate_directory() {
        let config = Config {
            compilers: vec![
                Compiler::new("a.csv", "A", "out"),
                Compiler::new("b.csv", "B", "out"),
            ],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_datasets() {
        let config = Config {
            datasets: vec![],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn invalid_file_rejected() {
        let directory = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = directory.path().join("config.json");
        std::fs::write(path.as_path(), r#"{ "datasets": [] }"#)
            .expect("Failed to write configuration");
        assert!(matches!(
            Config::try_from(path.as_path()),
            Err(ConfigError::Invalid(_))
        ));
    }
}
