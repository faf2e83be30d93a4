//!
//! Benchmark plotter output.
//!

pub mod file;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::Path;

use crate::chart::Chart;
use crate::report::CompilerReport;

use self::file::File;
use self::format::Format;
use self::xlsx::Xlsx;

///
/// The artifacts produced from one compiler's reports.
///
pub enum Output {
    /// Charts rendered straight into image files.
    Images(Vec<Chart>),
    /// Documents written as is, relative to the compiler's output directory.
    MultipleFiles(Vec<File>),
    /// A single workbook.
    SingleFileXlsx {
        /// The workbook file name.
        name: String,
        /// The workbook.
        workbook: rust_xlsxwriter::Workbook,
    },
}

impl Output {
    ///
    /// Writes the artifacts into the directory, creating it if needed.
    ///
    /// Returns the number of files written.
    ///
    pub fn write_to_dir(self, directory: &Path) -> anyhow::Result<usize> {
        std::fs::create_dir_all(directory).map_err(|error| {
            anyhow::anyhow!("Output directory {directory:?} creating: {error}")
        })?;

        match self {
            Output::Images(charts) => {
                for chart in charts.iter() {
                    let path = directory.join(chart.file_name(Format::Png));
                    chart.render_png(path.as_path())?;
                }
                Ok(charts.len())
            }
            Output::MultipleFiles(files) => {
                let count = files.len();
                for File {
                    path: relative_path,
                    content,
                } in files
                {
                    let file_path = directory.join(relative_path);
                    std::fs::write(file_path.as_path(), content).map_err(|error| {
                        anyhow::anyhow!("Output file {file_path:?} writing: {error}")
                    })?;
                }
                Ok(count)
            }
            Output::SingleFileXlsx { name, mut workbook } => {
                let path = directory.join(name);
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
                Ok(1)
            }
        }
    }
}

///
/// Returns the charts of a compiler's reports: per dataset, execution time first.
///
/// Datasets without a speedup report only get the execution time chart.
///
pub fn charts(report: &CompilerReport) -> Vec<Chart> {
    let compiler = report.compiler.label.as_str();
    report
        .datasets
        .iter()
        .flat_map(|dataset| {
            let execution_time = Chart::ExecutionTime {
                compiler: compiler.to_owned(),
                report: dataset.execution_times.clone(),
            };
            let speedup = dataset.speedups.clone().map(|report| Chart::Speedup {
                compiler: compiler.to_owned(),
                report,
            });
            std::iter::once(execution_time).chain(speedup)
        })
        .collect()
}

impl TryFrom<(&CompilerReport, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, format): (&CompilerReport, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Png => Output::Images(charts(report)),
            Format::Svg => Output::MultipleFiles(
                charts(report)
                    .iter()
                    .map(|chart| {
                        chart.render_svg().map(|content| {
                            File::new(
                                chart.file_stem().as_str(),
                                Format::Svg.extension(),
                                content,
                            )
                        })
                    })
                    .collect::<anyhow::Result<Vec<File>>>()?,
            ),
            Format::Json => Output::MultipleFiles(
                charts(report)
                    .iter()
                    .map(json::file)
                    .collect::<anyhow::Result<Vec<File>>>()?,
            ),
            Format::Xlsx if report.datasets.is_empty() => Output::MultipleFiles(vec![]),
            Format::Xlsx => Output::SingleFileXlsx {
                name: format!(
                    "{}.{}",
                    report.compiler.directory,
                    Format::Xlsx.extension()
                ),
                workbook: Xlsx::try_from(report)?.finalize(),
            },
        })
    }
}
