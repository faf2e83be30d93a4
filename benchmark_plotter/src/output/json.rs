//!
//! JSON documents with chart data.
//!

use crate::chart::Chart;
use crate::output::file::File;
use crate::output::format::Format;

///
/// A chart's data as written to JSON.
///
#[derive(serde::Serialize)]
struct Document<'a, T> {
    /// The compiler label.
    compiler: &'a str,
    /// The metric kind.
    metric: &'static str,
    /// The report.
    #[serde(flatten)]
    report: &'a T,
}

///
/// Serializes a chart's data to a JSON file.
///
pub fn file(chart: &Chart) -> anyhow::Result<File> {
    let content = match chart {
        Chart::ExecutionTime { compiler, report } => serde_json::to_string_pretty(&Document {
            compiler: compiler.as_str(),
            metric: "execution_time",
            report,
        }),
        Chart::Speedup { compiler, report } => serde_json::to_string_pretty(&Document {
            compiler: compiler.as_str(),
            metric: "speedup",
            report,
        }),
    }?;
    Ok(File::new(
        chart.file_stem().as_str(),
        Format::Json.extension(),
        content,
    ))
}
