//!
//! Metric report error.
//!

///
/// Metric report error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The table has no measurements for the dataset.
    #[error("No data found for dataset {dataset}")]
    NoData {
        /// The requested dataset tag.
        dataset: String,
    },
    /// The dataset has no baseline measurement to compute speedups against.
    #[error("Dataset {dataset} has no measurement of the baseline kernel `{baseline}`")]
    MissingBaseline {
        /// The dataset tag.
        dataset: String,
        /// The baseline kernel name.
        baseline: String,
    },
    /// A kernel took no measurable time, so its speedup is unbounded.
    #[error("Dataset {dataset}: kernel `{kernel}` has a zero execution time")]
    ZeroTime {
        /// The dataset tag.
        dataset: String,
        /// The kernel name.
        kernel: String,
    },
}

impl Error {
    ///
    /// Whether the run may skip the affected chart and continue.
    ///
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoData { .. } | Self::ZeroTime { .. })
    }
}
