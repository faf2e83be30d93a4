//!
//! Speedup of the kernels of one dataset over the baseline kernel.
//!

use crate::input::TimingTable;

use super::error::Error as ReportError;

///
/// Speedup of a single kernel.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SpeedupRecord {
    /// The kernel name.
    pub kernel: String,
    /// The measured execution time.
    pub time_seconds: f64,
    /// Baseline time divided by this kernel's time.
    pub speedup: f64,
}

///
/// Speedup of the kernels of one dataset over the baseline kernel.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Speedups {
    /// The dataset tag.
    pub dataset: String,
    /// The baseline kernel name.
    pub baseline: String,
    /// The baseline execution time.
    pub baseline_time_seconds: f64,
    /// The speedups, sorted ascending.
    pub records: Vec<SpeedupRecord>,
}

impl Speedups {
    /// Decimal digits of the value labels.
    pub const LABEL_PRECISION: usize = 2;

    ///
    /// Formats a speedup value label, e.g. `4.00×`.
    ///
    pub fn label(speedup: f64) -> String {
        format!("{:.*}×", Self::LABEL_PRECISION, speedup)
    }

    ///
    /// Returns the highest speedup.
    ///
    pub fn max_speedup(&self) -> f64 {
        self.records
            .iter()
            .map(|record| record.speedup)
            .fold(1.0, f64::max)
    }
}

impl TryFrom<(&TimingTable, &str, &str)> for Speedups {
    type Error = ReportError;

    fn try_from(
        (table, dataset, baseline): (&TimingTable, &str, &str),
    ) -> Result<Self, Self::Error> {
        let selection: Vec<_> = table.select(dataset).collect();
        if selection.is_empty() {
            return Err(ReportError::NoData {
                dataset: dataset.to_owned(),
            });
        }

        let baseline_time_seconds = selection
            .iter()
            .find(|record| record.kernel.as_str() == baseline)
            .map(|record| record.time_seconds)
            .ok_or_else(|| ReportError::MissingBaseline {
                dataset: dataset.to_owned(),
                baseline: baseline.to_owned(),
            })?;

        let mut records = Vec::with_capacity(selection.len());
        for record in selection.into_iter() {
            if record.time_seconds == 0.0 {
                return Err(ReportError::ZeroTime {
                    dataset: dataset.to_owned(),
                    kernel: record.kernel.clone(),
                });
            }
            records.push(SpeedupRecord {
                kernel: record.kernel.clone(),
                time_seconds: record.time_seconds,
                speedup: baseline_time_seconds / record.time_seconds,
            });
        }
        records.sort_by(|a, b| a.speedup.total_cmp(&b.speedup));

        Ok(Self {
            dataset: dataset.to_owned(),
            baseline: baseline.to_owned(),
            baseline_time_seconds,
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::input::record::TimingRecord;

    use super::ReportError;
    use super::Speedups;
    use super::TimingTable;

    fn table(records: Vec<TimingRecord>) -> TimingTable {
        TimingTable {
            path: PathBuf::from("test.csv"),
            has_average_column: true,
            records,
        }
    }

    #[test]
    fn sequential_and_parallel() {
        let table = table(vec![
            TimingRecord::new("MINI_DATASET", "SEQUENTIAL", 2.0),
            TimingRecord::new("MINI_DATASET", "PARALLEL", 0.5),
        ]);
        let speedups = Speedups::try_from((&table, "MINI_DATASET", "SEQUENTIAL"))
            .expect("Failed to compute speedups");

        let labeled: Vec<(&str, String)> = speedups
            .records
            .iter()
            .map(|record| (record.kernel.as_str(), Speedups::label(record.speedup)))
            .collect();
        assert_eq!(
            labeled,
            vec![
                ("SEQUENTIAL", "1.00×".to_owned()),
                ("PARALLEL", "4.00×".to_owned())
            ]
        );
        assert_eq!(speedups.baseline_time_seconds, 2.0);
        assert_eq!(speedups.max_speedup(), 4.0);
    }

    #[test]
    fn slower_than_baseline() {
        let table = table(vec![
            TimingRecord::new("SMALL_DATASET", "TARGET", 8.0),
            TimingRecord::new("SMALL_DATASET", "SEQUENTIAL", 4.0),
            TimingRecord::new("SMALL_DATASET", "OPTIMIZED", 1.0),
        ]);
        let speedups = Speedups::try_from((&table, "SMALL_DATASET", "SEQUENTIAL"))
            .expect("Failed to compute speedups");
        let values: Vec<f64> = speedups
            .records
            .iter()
            .map(|record| record.speedup)
            .collect();
        assert_eq!(values, vec![0.5, 1.0, 4.0]);
    }

    #[test]
    fn missing_baseline() {
        let table = table(vec![TimingRecord::new("MINI_DATASET", "PARALLEL", 0.5)]);
        let error = Speedups::try_from((&table, "MINI_DATASET", "SEQUENTIAL"))
            .expect_err("There is no baseline");
        assert!(matches!(error, ReportError::MissingBaseline { .. }));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn zero_time() {
        let table = table(vec![
            TimingRecord::new("MINI_DATASET", "SEQUENTIAL", 2.0),
            TimingRecord::new("MINI_DATASET", "TARGET", 0.0),
        ]);
        let error = Speedups::try_from((&table, "MINI_DATASET", "SEQUENTIAL"))
            .expect_err("A zero time has no finite speedup");
        assert_eq!(
            error,
            ReportError::ZeroTime {
                dataset: "MINI_DATASET".to_owned(),
                kernel: "TARGET".to_owned(),
            }
        );
        assert!(error.is_recoverable());
    }

    #[test]
    fn no_data() {
        let table = table(vec![]);
        let error = Speedups::try_from((&table, "MINI_DATASET", "SEQUENTIAL"))
            .expect_err("The table is empty");
        assert!(error.is_recoverable());
    }
}
