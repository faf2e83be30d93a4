//!
//! Execution time comparison of the kernels of one dataset.
//!

use crate::input::record::TimingRecord;
use crate::input::TimingTable;

use super::error::Error as ReportError;

///
/// Execution time comparison of the kernels of one dataset.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ExecutionTimes {
    /// The dataset tag.
    pub dataset: String,
    /// The measurements, sorted by ascending time.
    pub records: Vec<TimingRecord>,
}

impl ExecutionTimes {
    /// Decimal digits of the value labels.
    pub const LABEL_PRECISION: usize = 6;

    ///
    /// Formats a time value label.
    ///
    pub fn label(time_seconds: f64) -> String {
        format!("{:.*}", Self::LABEL_PRECISION, time_seconds)
    }

    ///
    /// Returns the slowest measured time.
    ///
    pub fn max_time(&self) -> f64 {
        self.records
            .iter()
            .map(|record| record.time_seconds)
            .fold(0.0, f64::max)
    }
}

impl TryFrom<(&TimingTable, &str)> for ExecutionTimes {
    type Error = ReportError;

    fn try_from((table, dataset): (&TimingTable, &str)) -> Result<Self, Self::Error> {
        let mut records: Vec<TimingRecord> = table.select(dataset).cloned().collect();
        if records.is_empty() {
            return Err(ReportError::NoData {
                dataset: dataset.to_owned(),
            });
        }
        records.sort_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds));

        Ok(Self {
            dataset: dataset.to_owned(),
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::ExecutionTimes;
    use super::ReportError;
    use super::TimingRecord;
    use super::TimingTable;

    fn table() -> TimingTable {
        TimingTable {
            path: PathBuf::from("test.csv"),
            has_average_column: false,
            records: vec![
                TimingRecord::new("MINI_DATASET", "SEQUENTIAL", 2.0),
                TimingRecord::new("SMALL_DATASET", "SEQUENTIAL", 8.0),
                TimingRecord::new("MINI_DATASET", "PARALLEL", 0.5),
                TimingRecord::new("MINI_DATASET", "COLLAPSE", 0.5),
                TimingRecord::new("MINI_DATASET", "REDUCTION", 1.25),
            ],
        }
    }

    #[test]
    fn sorted_by_time() {
        let times = ExecutionTimes::try_from((&table(), "MINI_DATASET"))
            .expect("Failed to compare execution times");
        let kernels: Vec<&str> = times
            .records
            .iter()
            .map(|record| record.kernel.as_str())
            .collect();
        assert_eq!(kernels, vec!["PARALLEL", "COLLAPSE", "REDUCTION", "SEQUENTIAL"]);
        assert_eq!(times.max_time(), 2.0);
    }

    #[test]
    fn no_data() {
        let error = ExecutionTimes::try_from((&table(), "LARGE_DATASET"))
            .expect_err("There are no large dataset measurements");
        assert_eq!(
            error,
            ReportError::NoData {
                dataset: "LARGE_DATASET".to_owned()
            }
        );
        assert!(error.is_recoverable());
    }

    #[test]
    fn label() {
        assert_eq!(ExecutionTimes::label(0.5), "0.500000");
        assert_eq!(ExecutionTimes::label(1.0 / 3.0), "0.333333");
    }
}
