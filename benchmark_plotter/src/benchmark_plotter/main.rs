//!
//! The benchmark plotter binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let config = match arguments.config {
        Some(path) => benchmark_plotter::Config::try_from(path.as_path())?,
        None => {
            let config = benchmark_plotter::Config::default();
            config.validate()?;
            config
        }
    };

    let plotter =
        benchmark_plotter::Plotter::new(config, arguments.output_format, arguments.quiet);
    let summary = plotter.run(arguments.input_dir.as_path(), arguments.output_dir.as_path())?;

    if !arguments.quiet {
        println!();
        println!(
            "{} ({} datasets, {} skipped, {} speedup charts skipped, {} files)",
            "All plots generated successfully".bright_green().bold(),
            summary.datasets,
            summary.skipped,
            summary.skipped_speedups,
            summary.files,
        );
    }

    Ok(())
}
