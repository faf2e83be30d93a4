//!
//! A single timing measurement.
//!

///
/// A single timing measurement.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TimingRecord {
    /// The dataset size tag, e.g. `MINI_DATASET`.
    pub dataset: String,
    /// The kernel variant name, e.g. `PARALLEL`.
    pub kernel: String,
    /// The measured execution time.
    pub time_seconds: f64,
}

impl TimingRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(dataset: &str, kernel: &str, time_seconds: f64) -> Self {
        Self {
            dataset: dataset.to_owned(),
            kernel: kernel.to_owned(),
            time_seconds,
        }
    }
}
