//!
//! Metric reports derived from timing tables.
//!

pub mod error;
pub mod execution_time;
pub mod speedup;

use crate::config::compiler::Compiler;
use crate::input::TimingTable;

use self::error::Error as ReportError;
use self::execution_time::ExecutionTimes;
use self::speedup::Speedups;

///
/// Both metric reports of one dataset.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DatasetReport {
    /// The execution time comparison.
    pub execution_times: ExecutionTimes,
    /// The speedup comparison, absent if the speedups are undefined.
    pub speedups: Option<Speedups>,
}

impl DatasetReport {
    ///
    /// Computes the reports of a dataset.
    ///
    /// A recoverable speedup failure only drops the speedup report, and is
    /// returned alongside so that the caller can report it.
    ///
    pub fn new(
        table: &TimingTable,
        dataset: &str,
        baseline: &str,
    ) -> Result<(Self, Option<ReportError>), ReportError> {
        let execution_times = ExecutionTimes::try_from((table, dataset))?;
        let (speedups, speedup_error) = match Speedups::try_from((table, dataset, baseline)) {
            Ok(speedups) => (Some(speedups), None),
            Err(error) if error.is_recoverable() => (None, Some(error)),
            Err(error) => return Err(error),
        };
        Ok((
            Self {
                execution_times,
                speedups,
            },
            speedup_error,
        ))
    }

    ///
    /// The dataset tag.
    ///
    pub fn dataset(&self) -> &str {
        self.execution_times.dataset.as_str()
    }
}

///
/// The reports produced from one compiler's timing table.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CompilerReport {
    /// The compiler the timings belong to.
    pub compiler: Compiler,
    /// The dataset reports in configuration order.
    pub datasets: Vec<DatasetReport>,
}

impl CompilerReport {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(compiler: Compiler) -> Self {
        Self {
            compiler,
            datasets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use proptest::prelude::*;

    use crate::input::record::TimingRecord;
    use crate::input::TimingTable;

    use super::DatasetReport;
    use super::ReportError;

    const BASELINE: &str = "SEQUENTIAL";

    fn datasets(table: &TimingTable) -> Vec<&str> {
        let mut datasets: Vec<&str> = Vec::new();
        for record in table.records.iter() {
            if !datasets.contains(&record.dataset.as_str()) {
                datasets.push(record.dataset.as_str());
            }
        }
        datasets
    }

    fn dataset_report(table: &TimingTable, dataset: &str) -> DatasetReport {
        let (report, speedup_error) =
            DatasetReport::new(table, dataset, BASELINE).expect("Failed to report on dataset");
        assert_eq!(speedup_error, None);
        assert!(report.speedups.is_some());
        report
    }

    #[test]
    fn zero_time_drops_speedups_only() {
        let table = TimingTable {
            path: PathBuf::from("test.csv"),
            has_average_column: true,
            records: vec![
                TimingRecord::new("MINI_DATASET", BASELINE, 0.002),
                TimingRecord::new("MINI_DATASET", "PARALLEL", 0.0),
            ],
        };
        let (report, speedup_error) = DatasetReport::new(&table, "MINI_DATASET", BASELINE)
            .expect("A zero time must not fail the dataset");
        assert_eq!(report.execution_times.records.len(), 2);
        assert_eq!(report.speedups, None);
        assert!(matches!(speedup_error, Some(ReportError::ZeroTime { .. })));
    }

    #[test]
    fn missing_baseline_fails_dataset() {
        let table = TimingTable {
            path: PathBuf::from("test.csv"),
            has_average_column: true,
            records: vec![TimingRecord::new("MINI_DATASET", "PARALLEL", 0.5)],
        };
        let error = DatasetReport::new(&table, "MINI_DATASET", BASELINE)
            .expect_err("There is no baseline");
        assert!(matches!(error, ReportError::MissingBaseline { .. }));
    }

    fn table_strategy() -> impl Strategy<Value = TimingTable> {
        let kernels = proptest::collection::btree_map(
            "[A-Z_]{1,12}",
            0.000_001f64..100.0,
            0..8,
        );
        (
            proptest::collection::vec(kernels, 1..4),
            0.000_001f64..100.0,
        )
            .prop_map(|(datasets, baseline_time)| {
                let mut records = Vec::new();
                for (index, kernels) in datasets.into_iter().enumerate() {
                    let dataset = format!("DATASET_{index}");
                    records.push(TimingRecord::new(dataset.as_str(), BASELINE, baseline_time));
                    for (kernel, time) in kernels.into_iter() {
                        if kernel != BASELINE {
                            records.push(TimingRecord::new(dataset.as_str(), kernel.as_str(), time));
                        }
                    }
                }
                TimingTable {
                    path: PathBuf::from("generated.csv"),
                    has_average_column: false,
                    records,
                }
            })
    }

    proptest! {
        #[test]
        fn baseline_speedup_is_one(table in table_strategy()) {
            for dataset in datasets(&table) {
                let report = dataset_report(&table, dataset);
                let speedups = report.speedups.as_ref().unwrap();
                let baseline = speedups
                    .records
                    .iter()
                    .find(|record| record.kernel == BASELINE)
                    .unwrap();
                prop_assert!((baseline.speedup - 1.0).abs() < f64::EPSILON);
            }
        }

        #[test]
        fn sorted_non_decreasing(table in table_strategy()) {
            for dataset in datasets(&table) {
                let report = dataset_report(&table, dataset);
                let speedups = report.speedups.as_ref().unwrap();
                prop_assert!(report
                    .execution_times
                    .records
                    .windows(2)
                    .all(|pair| pair[0].time_seconds <= pair[1].time_seconds));
                prop_assert!(speedups
                    .records
                    .windows(2)
                    .all(|pair| pair[0].speedup <= pair[1].speedup));
            }
        }

        #[test]
        fn selection_preserves_kernels(table in table_strategy()) {
            for dataset in datasets(&table) {
                let report = dataset_report(&table, dataset);
                let speedups = report.speedups.as_ref().unwrap();
                let expected: BTreeSet<&str> = table
                    .select(dataset)
                    .map(|record| record.kernel.as_str())
                    .collect();
                let charted: BTreeSet<&str> = report
                    .execution_times
                    .records
                    .iter()
                    .map(|record| record.kernel.as_str())
                    .collect();
                let speedup_kernels: BTreeSet<&str> = speedups
                    .records
                    .iter()
                    .map(|record| record.kernel.as_str())
                    .collect();
                prop_assert_eq!(report.execution_times.records.len(), table.select(dataset).count());
                prop_assert_eq!(&charted, &expected);
                prop_assert_eq!(&speedup_kernels, &expected);
            }
        }

        #[test]
        fn idempotent(table in table_strategy()) {
            for dataset in datasets(&table) {
                let first = dataset_report(&table, dataset);
                let second = dataset_report(&table, dataset);
                prop_assert_eq!(first, second);
            }
        }
    }
}
