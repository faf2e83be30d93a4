//!
//! Chart rendering.
//!

pub mod execution_time;
pub mod speedup;

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::output::format::Format;
use crate::report::execution_time::ExecutionTimes;
use crate::report::speedup::Speedups;
use crate::util;

/// Caption font size.
const CAPTION_FONT_SIZE: i32 = 30;
/// Axis description font size.
const AXIS_FONT_SIZE: i32 = 20;
/// Tick label font size.
const LABEL_FONT_SIZE: i32 = 15;
/// Value label font size.
const VALUE_FONT_SIZE: i32 = 13;
/// Margin around the plotting area.
const MARGIN: i32 = 20;

///
/// A chart of one dataset's metric report.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    /// Execution time bar chart.
    ExecutionTime {
        /// The compiler label.
        compiler: String,
        /// The report to draw.
        report: ExecutionTimes,
    },
    /// Speedup curve.
    Speedup {
        /// The compiler label.
        compiler: String,
        /// The report to draw.
        report: Speedups,
    },
}

impl Chart {
    ///
    /// The artifact file name without extension.
    ///
    pub fn file_stem(&self) -> String {
        match self {
            Self::ExecutionTime { report, .. } => util::file_stem(report.dataset.as_str()),
            Self::Speedup { report, .. } => {
                format!("{}_speedup", util::file_stem(report.dataset.as_str()))
            }
        }
    }

    ///
    /// The artifact file name in the given format.
    ///
    pub fn file_name(&self, format: Format) -> String {
        format!("{}.{}", self.file_stem(), format.extension())
    }

    ///
    /// The image size in pixels.
    ///
    pub fn size(&self) -> (u32, u32) {
        match self {
            Self::ExecutionTime { .. } => (1500, 900),
            Self::Speedup { .. } => (1800, 900),
        }
    }

    ///
    /// Draws the chart on an arbitrary backend.
    ///
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> anyhow::Result<()> {
        let result = match self {
            Self::ExecutionTime { compiler, report } => {
                execution_time::draw(root, compiler.as_str(), report)
            }
            Self::Speedup { compiler, report } => speedup::draw(root, compiler.as_str(), report),
        };
        result.map_err(|error| anyhow::anyhow!("Drawing chart `{}`: {error}", self.file_stem()))?;
        root.present()
            .map_err(|error| anyhow::anyhow!("Drawing chart `{}`: {error}", self.file_stem()))?;
        Ok(())
    }

    ///
    /// Renders the chart into a PNG file.
    ///
    pub fn render_png(&self, path: &Path) -> anyhow::Result<()> {
        let root = BitMapBackend::new(path, self.size()).into_drawing_area();
        self.draw(&root)
            .map_err(|error| anyhow::anyhow!("Chart file {path:?} rendering: {error}"))
    }

    ///
    /// Renders the chart into an SVG document.
    ///
    pub fn render_svg(&self) -> anyhow::Result<String> {
        let mut content = String::new();
        {
            let root = SVGBackend::with_string(&mut content, self.size()).into_drawing_area();
            self.draw(&root)?;
        }
        Ok(content)
    }
}

///
/// Returns the end of the kernel axis range.
///
/// Integer ranges are inclusive, and a single-point range cannot be mapped,
/// so a lone kernel gets an extra empty segment.
///
fn kernel_axis_end(kernels: usize) -> usize {
    kernels.saturating_sub(1).max(1)
}

///
/// Returns the tick label of a kernel axis position.
///
fn kernel_label(kernels: &[&str], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(index) => kernels
            .get(*index)
            .map(|kernel| (*kernel).to_owned())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

///
/// Returns the upper bound of the value axis with room for value labels.
///
fn headroom(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.15
    } else {
        1.0
    }
}
