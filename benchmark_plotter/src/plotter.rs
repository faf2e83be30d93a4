//!
//! Chart generation over all configured compilers and datasets.
//!

use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::config::compiler::Compiler;
use crate::config::Config;
use crate::input::TimingTable;
use crate::output::format::Format;
use crate::output::Output;
use crate::report::CompilerReport;
use crate::report::DatasetReport;

///
/// What a run produced.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Datasets reported on, over all compilers.
    pub datasets: usize,
    /// Datasets skipped for lack of data, over all compilers.
    pub skipped: usize,
    /// Speedup charts skipped for undefined speedups, over all compilers.
    pub skipped_speedups: usize,
    /// Files written.
    pub files: usize,
}

///
/// Chart generation over all configured compilers and datasets.
///
#[derive(Debug, Clone)]
pub struct Plotter {
    /// The run configuration.
    pub config: Config,
    /// The artifact format.
    pub format: Format,
    /// Suppresses the terminal output.
    pub quiet: bool,
}

impl Plotter {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, format: Format, quiet: bool) -> Self {
        Self {
            config,
            format,
            quiet,
        }
    }

    ///
    /// Reads every compiler's timings from `input_directory` and writes the
    /// charts into per-compiler subdirectories of `output_directory`.
    ///
    /// Datasets without measurements are skipped with a warning, and so are
    /// the speedup charts of datasets with a zero time. Any other
    /// failure aborts the run.
    ///
    pub fn run(&self, input_directory: &Path, output_directory: &Path) -> anyhow::Result<Summary> {
        std::fs::create_dir_all(output_directory).with_context(|| {
            format!("Output directory {output_directory:?} creating")
        })?;
        self.warn_unmapped_inputs(input_directory);

        let mut summary = Summary::default();
        for compiler in self.config.compilers.iter() {
            let compiler_directory = output_directory.join(compiler.directory.as_str());
            std::fs::create_dir_all(compiler_directory.as_path()).with_context(|| {
                format!("Output directory {compiler_directory:?} creating")
            })?;

            let report = self.report(compiler, input_directory, &mut summary)?;
            let output = Output::try_from((&report, self.format))
                .with_context(|| format!("Charts for {} building", compiler.label))?;
            summary.files += output.write_to_dir(compiler_directory.as_path())?;

            if !self.quiet {
                println!(
                    "{} {} charts written to {compiler_directory:?}",
                    "Done".bright_green().bold(),
                    compiler.label.bright_white(),
                );
            }
        }
        Ok(summary)
    }

    ///
    /// Loads a compiler's timing table and computes the reports of all datasets.
    ///
    pub fn report(
        &self,
        compiler: &Compiler,
        input_directory: &Path,
        summary: &mut Summary,
    ) -> anyhow::Result<CompilerReport> {
        let path = input_directory.join(compiler.file.as_str());
        let table = TimingTable::try_from((path.as_path(), &self.config.columns)).map_err(
            |error| {
                let kind = if error.is_format_error() {
                    "malformed"
                } else {
                    "unreadable"
                };
                anyhow::Error::new(error)
                    .context(format!("Timing table of {} is {kind}", compiler.label))
            },
        )?;

        let mut report = CompilerReport::new(compiler.clone());
        for dataset in self.config.datasets.iter() {
            if !self.quiet {
                println!(
                    "{} plots for {} ({})",
                    "Generating".bright_green().bold(),
                    dataset.bright_white(),
                    compiler.label,
                );
            }

            match DatasetReport::new(&table, dataset.as_str(), self.config.baseline_kernel.as_str())
            {
                Ok((dataset_report, speedup_error)) => {
                    if let Some(error) = speedup_error {
                        summary.skipped_speedups += 1;
                        if !self.quiet {
                            eprintln!(
                                "{} {error}; the speedup chart is skipped",
                                "Warning:".bright_yellow().bold()
                            );
                        }
                    }
                    summary.datasets += 1;
                    report.datasets.push(dataset_report);
                }
                Err(error) if error.is_recoverable() => {
                    summary.skipped += 1;
                    if !self.quiet {
                        eprintln!("{} {error}", "Warning:".bright_yellow().bold());
                    }
                }
                Err(error) => {
                    return Err(anyhow::Error::new(error)
                        .context(format!("Timing table {path:?} cannot be reported on")));
                }
            }
        }
        Ok(report)
    }

    ///
    /// Warns about CSV files in the input directory that no compiler is mapped to.
    ///
    fn warn_unmapped_inputs(&self, input_directory: &Path) {
        if self.quiet {
            return;
        }
        let pattern = format!("{}/*.csv", input_directory.to_string_lossy());
        let Ok(paths) = glob::glob(pattern.as_str()) else {
            return;
        };
        for path in paths.filter_map(Result::ok) {
            let is_mapped = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| self.config.compiler_by_file(name))
                .is_some();
            if !is_mapped {
                eprintln!(
                    "{} Input file {path:?} is not mapped to a compiler and will be skipped.",
                    "Warning:".bright_yellow().bold()
                );
            }
        }
    }
}
