//!
//! The benchmark plotter library.
//!

pub mod chart;
pub mod config;
pub mod input;
pub mod output;
pub mod plotter;
pub mod report;
pub mod util;

pub use crate::chart::Chart;
pub use crate::config::columns::Columns;
pub use crate::config::compiler::Compiler;
pub use crate::config::error::Error as ConfigError;
pub use crate::config::Config;
pub use crate::input::error::Error as InputError;
pub use crate::input::record::TimingRecord;
pub use crate::input::TimingTable;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::plotter::Plotter;
pub use crate::plotter::Summary;
pub use crate::report::error::Error as ReportError;
pub use crate::report::execution_time::ExecutionTimes;
pub use crate::report::speedup::SpeedupRecord;
pub use crate::report::speedup::Speedups;
pub use crate::report::CompilerReport;
pub use crate::report::DatasetReport;
