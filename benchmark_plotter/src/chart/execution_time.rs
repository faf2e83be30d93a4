//!
//! Execution time bar chart.
//!

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;

use crate::report::execution_time::ExecutionTimes;
use crate::util;

///
/// Draws one bar per kernel, slowest last, each labeled with its exact time.
///
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    compiler: &str,
    report: &ExecutionTimes,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let kernels: Vec<&str> = report
        .records
        .iter()
        .map(|record| record.kernel.as_str())
        .collect();
    let caption = format!(
        "Execution Time Comparison - {} ({compiler})",
        util::title_case(report.dataset.as_str())
    );

    let mut chart = ChartBuilder::on(root)
        .caption(
            caption,
            ("sans-serif", super::CAPTION_FONT_SIZE)
                .into_font()
                .style(FontStyle::Bold),
        )
        .margin(super::MARGIN)
        .x_label_area_size(70)
        .y_label_area_size(100)
        .build_cartesian_2d(
            (0..super::kernel_axis_end(kernels.len())).into_segmented(),
            0.0..super::headroom(report.max_time()),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(kernels.len() + 1)
        .x_label_formatter(&|value| super::kernel_label(&kernels, value))
        .x_desc("Kernel Version")
        .y_desc("Execution Time (s)")
        .axis_desc_style(("sans-serif", super::AXIS_FONT_SIZE))
        .label_style(("sans-serif", super::LABEL_FONT_SIZE))
        .draw()?;

    chart.draw_series(report.records.iter().enumerate().map(|(index, record)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(index), 0.0),
                (SegmentValue::Exact(index + 1), record.time_seconds),
            ],
            Palette99::pick(index).mix(0.85).filled(),
        );
        bar.set_margin(0, 0, 10, 10);
        bar
    }))?;

    let value_style = TextStyle::from(("sans-serif", super::VALUE_FONT_SIZE).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(report.records.iter().enumerate().map(|(index, record)| {
        EmptyElement::at((SegmentValue::CenterOf(index), record.time_seconds))
            + Text::new(
                ExecutionTimes::label(record.time_seconds),
                (0, -4),
                value_style.clone(),
            )
    }))?;

    Ok(())
}
