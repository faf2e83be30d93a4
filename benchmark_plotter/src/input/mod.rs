//!
//! Benchmark timing input.
//!

pub mod error;
pub mod record;

use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::config::columns::Columns;

use self::error::Error as InputError;
use self::record::TimingRecord;

///
/// Timing measurements of one input file, that is, of one compiler.
///
#[derive(Debug, Clone, PartialEq)]
pub struct TimingTable {
    /// The file the table was loaded from.
    pub path: PathBuf,
    /// Whether the file had an average time column, and thus possibly summary rows.
    pub has_average_column: bool,
    /// The measurements in source order.
    pub records: Vec<TimingRecord>,
}

impl TimingTable {
    ///
    /// Parses CSV text into a timing table.
    ///
    /// If the average time column is present, rows with an empty dataset are
    /// summary rows and are dropped. Otherwise every row is kept.
    ///
    pub fn from_csv(text: &str, columns: &Columns, path: &Path) -> Result<Self, InputError> {
        let parsing_error = |error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(parsing_error)?.clone();
        let column_index = |name: &str| -> Result<usize, InputError> {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| InputError::MissingColumn {
                    column: name.to_owned(),
                    path: path.to_path_buf(),
                })
        };
        let dataset_index = column_index(columns.dataset.as_str())?;
        let kernel_index = column_index(columns.kernel.as_str())?;
        let time_index = column_index(columns.time.as_str())?;
        let has_average_column = headers
            .iter()
            .any(|header| header == columns.average_time.as_str());

        let mut records = Vec::new();
        let mut measured = HashSet::new();
        for row in reader.records() {
            let row = row.map_err(parsing_error)?;
            let line = row.position().map(|position| position.line()).unwrap_or_default();

            let dataset = row.get(dataset_index).unwrap_or_default();
            if dataset.is_empty() {
                if has_average_column {
                    continue;
                }
                // Never selected by any dataset, so only complete measurements are kept.
                let kernel = row.get(kernel_index).unwrap_or_default();
                let time_seconds = row.get(time_index).and_then(parse_time);
                if let (false, Some(time_seconds)) = (kernel.is_empty(), time_seconds) {
                    records.push(TimingRecord::new(dataset, kernel, time_seconds));
                }
                continue;
            }

            let kernel = required(&row, kernel_index, columns.kernel.as_str(), line, path)?;
            let time = required(&row, time_index, columns.time.as_str(), line, path)?;
            let time_seconds = parse_time(time).ok_or_else(|| InputError::InvalidTime {
                value: time.to_owned(),
                line,
                path: path.to_path_buf(),
            })?;

            if !measured.insert((dataset.to_owned(), kernel.to_owned())) {
                return Err(InputError::DuplicateKernel {
                    dataset: dataset.to_owned(),
                    kernel: kernel.to_owned(),
                    line,
                    path: path.to_path_buf(),
                });
            }
            records.push(TimingRecord::new(dataset, kernel, time_seconds));
        }

        Ok(Self {
            path: path.to_path_buf(),
            has_average_column,
            records,
        })
    }

    ///
    /// Returns the records of the dataset in source order.
    ///
    pub fn select<'a>(&'a self, dataset: &'a str) -> impl Iterator<Item = &'a TimingRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.dataset.as_str() == dataset)
    }
}

///
/// Parses a time value, which must be a finite non-negative number of seconds.
///
fn parse_time(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|time| time.is_finite() && *time >= 0.0)
}

///
/// Returns the non-empty value of a measurement row field.
///
fn required<'a>(
    row: &'a csv::StringRecord,
    index: usize,
    column: &str,
    line: u64,
    path: &Path,
) -> Result<&'a str, InputError> {
    match row.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(InputError::MissingValue {
            column: column.to_owned(),
            line,
            path: path.to_path_buf(),
        }),
    }
}

impl TryFrom<(&Path, &Columns)> for TimingTable {
    type Error = InputError;

    fn try_from((path, columns): (&Path, &Columns)) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        Self::from_csv(text.as_str(), columns, path)
    }
}
