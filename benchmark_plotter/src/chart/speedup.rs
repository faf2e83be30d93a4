//!
//! Speedup curve.
//!

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;

use crate::report::speedup::Speedups;
use crate::util;

/// The curve color.
const CURVE_COLOR: RGBColor = RGBColor(0x2e, 0xcc, 0x71);

///
/// Draws the sorted speedups as a marked line over a dashed `1×` reference line.
///
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    compiler: &str,
    report: &Speedups,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let kernels: Vec<&str> = report
        .records
        .iter()
        .map(|record| record.kernel.as_str())
        .collect();
    let caption = format!(
        "Speedup Curve - {} ({compiler})",
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
        .y_label_area_size(80)
        .build_cartesian_2d(
            (0..super::kernel_axis_end(kernels.len())).into_segmented(),
            0.0..super::headroom(report.max_speedup()),
        )?;

    chart
        .configure_mesh()
        .x_labels(kernels.len() + 1)
        .x_label_formatter(&|value| super::kernel_label(&kernels, value))
        .x_desc("Kernel Version")
        .y_desc(format!(
            "Speedup (vs {})",
            util::title_case(report.baseline.as_str())
        ))
        .axis_desc_style(("sans-serif", super::AXIS_FONT_SIZE))
        .label_style(("sans-serif", super::LABEL_FONT_SIZE))
        .draw()?;

    chart
        .draw_series(DashedLineSeries::new(
            vec![(SegmentValue::Exact(0), 1.0), (SegmentValue::Last, 1.0)],
            12,
            8,
            RED.mix(0.7).stroke_width(2),
        ))?
        .label("Baseline (1×)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], RED.stroke_width(2)));

    chart.draw_series(
        LineSeries::new(
            report
                .records
                .iter()
                .enumerate()
                .map(|(index, record)| (SegmentValue::CenterOf(index), record.speedup)),
            CURVE_COLOR.stroke_width(3),
        )
        .point_size(7),
    )?;

    let value_style = TextStyle::from(
        ("sans-serif", super::VALUE_FONT_SIZE)
            .into_font()
            .style(FontStyle::Bold),
    )
    .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(report.records.iter().enumerate().map(|(index, record)| {
        EmptyElement::at((SegmentValue::CenterOf(index), record.speedup))
            + Text::new(Speedups::label(record.speedup), (0, -12), value_style.clone())
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", super::LABEL_FONT_SIZE))
        .draw()?;

    Ok(())
}
