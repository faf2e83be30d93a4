//!
//! Input CSV column names.
//!

///
/// Input CSV column names.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Columns {
    /// The dataset tag column.
    pub dataset: String,
    /// The kernel name column.
    pub kernel: String,
    /// The measured time column, in seconds.
    pub time: String,
    /// The pre-aggregated average column.
    /// Only its presence matters: it marks files with trailing summary rows.
    pub average_time: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            dataset: "Dataset".to_owned(),
            kernel: "Kernel".to_owned(),
            time: "Time(s)".to_owned(),
            average_time: "Average_Time(s)".to_owned(),
        }
    }
}
