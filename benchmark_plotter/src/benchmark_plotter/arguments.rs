//!
//! The benchmark plotter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark plotter arguments.
///
/// Without arguments, the built-in configuration is used with the current
/// directory as input and `plots` as output.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON configuration file. Omitted fields take their built-in values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing the timing CSV files.
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory the charts are written to, one subdirectory per compiler.
    #[arg(long, default_value = "plots")]
    pub output_dir: PathBuf,

    /// Output format: `png` (default), `svg`, `json`, or `xlsx`.
    #[arg(long = "output-format", default_value_t = benchmark_plotter::OutputFormat::Png)]
    pub output_format: benchmark_plotter::OutputFormat,
}
