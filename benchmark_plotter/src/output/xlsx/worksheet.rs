//!
//! XLSX worksheet with the reports of one dataset.
//!

use rust_xlsxwriter::Chart;
use rust_xlsxwriter::ChartDataLabel;
use rust_xlsxwriter::ChartFormat;
use rust_xlsxwriter::ChartLine;
use rust_xlsxwriter::ChartLineDashType;
use rust_xlsxwriter::ChartMarker;
use rust_xlsxwriter::ChartMarkerType;
use rust_xlsxwriter::ChartType;
use rust_xlsxwriter::Format;

use crate::report::execution_time::ExecutionTimes;
use crate::report::speedup::Speedups;
use crate::report::DatasetReport;
use crate::util;

///
/// XLSX worksheet with the reports of one dataset.
///
/// Execution times occupy columns `A:B`, speedups `D:F`, and the charts are
/// placed to the right of the tables.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The worksheet name, used in chart ranges.
    pub name: String,
}

impl Worksheet {
    /// First column of the execution time table.
    const TIME_COLUMN: u16 = 0;
    /// First column of the speedup table.
    const SPEEDUP_COLUMN: u16 = 3;
    /// Column the charts are anchored at.
    const CHART_COLUMN: u16 = 7;
    /// Rows between the two charts.
    const CHART_ROWS: u32 = 20;

    ///
    /// Creates a worksheet named after the dataset and writes both reports.
    ///
    pub fn new(compiler: &str, report: &DatasetReport) -> anyhow::Result<Self> {
        let name = report.dataset().to_owned();
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name.as_str())?;

        let mut sheet = Self { worksheet, name };
        sheet.write_execution_times(compiler, &report.execution_times)?;
        if let Some(speedups) = report.speedups.as_ref() {
            sheet.write_speedups(compiler, speedups)?;
        }
        Ok(sheet)
    }

    ///
    /// Writes the execution time table and its column chart.
    ///
    fn write_execution_times(
        &mut self,
        compiler: &str,
        report: &ExecutionTimes,
    ) -> anyhow::Result<()> {
        self.write_headers(Self::TIME_COLUMN, &[("Kernel", 22), ("Time (s)", 14)])?;
        for (index, record) in report.records.iter().enumerate() {
            let row = (index as u32) + 1;
            self.worksheet
                .write(row, Self::TIME_COLUMN, record.kernel.as_str())?;
            self.worksheet.write_with_format(
                row,
                Self::TIME_COLUMN + 1,
                record.time_seconds,
                &Self::time_format(),
            )?;
        }

        let last_row = report.records.len() as u32;
        let mut chart = Chart::new(ChartType::Column);
        chart
            .add_series()
            .set_name("Execution Time (s)")
            .set_categories((
                self.name.as_str(),
                1,
                Self::TIME_COLUMN,
                last_row,
                Self::TIME_COLUMN,
            ))
            .set_values((
                self.name.as_str(),
                1,
                Self::TIME_COLUMN + 1,
                last_row,
                Self::TIME_COLUMN + 1,
            ))
            .set_data_label(ChartDataLabel::new().show_value().set_num_format("0.000000"));
        chart.title().set_name(
            format!(
                "Execution Time Comparison - {} ({compiler})",
                util::title_case(report.dataset.as_str())
            )
            .as_str(),
        );
        chart.x_axis().set_name("Kernel Version");
        chart.y_axis().set_name("Execution Time (s)");
        chart.legend().set_hidden();

        self.worksheet.insert_chart(1, Self::CHART_COLUMN, &chart)?;
        Ok(())
    }

    ///
    /// Writes the speedup table and its line chart.
    ///
    fn write_speedups(&mut self, compiler: &str, speedups: &Speedups) -> anyhow::Result<()> {
        self.write_headers(
            Self::SPEEDUP_COLUMN,
            &[("Kernel", 22), ("Speedup", 12), ("Baseline", 12)],
        )?;
        for (index, record) in speedups.records.iter().enumerate() {
            let row = (index as u32) + 1;
            self.worksheet
                .write(row, Self::SPEEDUP_COLUMN, record.kernel.as_str())?;
            self.worksheet.write_with_format(
                row,
                Self::SPEEDUP_COLUMN + 1,
                record.speedup,
                &Self::speedup_format(),
            )?;
            self.worksheet.write_with_format(
                row,
                Self::SPEEDUP_COLUMN + 2,
                1.0,
                &Self::speedup_format(),
            )?;
        }

        let last_row = speedups.records.len() as u32;
        let categories = (
            self.name.as_str(),
            1,
            Self::SPEEDUP_COLUMN,
            last_row,
            Self::SPEEDUP_COLUMN,
        );
        let mut chart = Chart::new(ChartType::Line);
        chart
            .add_series()
            .set_name("Speedup")
            .set_categories(categories)
            .set_values((
                self.name.as_str(),
                1,
                Self::SPEEDUP_COLUMN + 1,
                last_row,
                Self::SPEEDUP_COLUMN + 1,
            ))
            .set_format(
                ChartFormat::new().set_line(ChartLine::new().set_color("#2ECC71").set_width(2.5)),
            )
            .set_marker(
                ChartMarker::new()
                    .set_type(ChartMarkerType::Circle)
                    .set_size(7),
            )
            .set_data_label(
                ChartDataLabel::new()
                    .show_value()
                    .set_num_format("0.00\"×\""),
            );
        chart
            .add_series()
            .set_name("Baseline (1×)")
            .set_categories(categories)
            .set_values((
                self.name.as_str(),
                1,
                Self::SPEEDUP_COLUMN + 2,
                last_row,
                Self::SPEEDUP_COLUMN + 2,
            ))
            .set_format(
                ChartFormat::new().set_line(
                    ChartLine::new()
                        .set_color("#FF0000")
                        .set_width(2)
                        .set_dash_type(ChartLineDashType::Dash),
                ),
            );
        chart.title().set_name(
            format!(
                "Speedup Curve - {} ({compiler})",
                util::title_case(speedups.dataset.as_str())
            )
            .as_str(),
        );
        chart.x_axis().set_name("Kernel Version");
        chart.y_axis().set_name(
            format!(
                "Speedup (vs {})",
                util::title_case(speedups.baseline.as_str())
            )
            .as_str(),
        );

        self.worksheet
            .insert_chart(1 + Self::CHART_ROWS, Self::CHART_COLUMN, &chart)?;
        Ok(())
    }

    ///
    /// Writes a table header row starting at the given column.
    ///
    fn write_headers(
        &mut self,
        first_column: u16,
        headers: &[(&str, u16)],
    ) -> anyhow::Result<()> {
        for (offset, (header, width)) in headers.iter().enumerate() {
            let column = first_column + (offset as u16);
            self.worksheet
                .write_with_format(0, column, *header, &Self::header_format())?;
            self.worksheet.set_column_width(column, *width)?;
        }
        Ok(())
    }

    ///
    /// Returns the inner worksheet.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    fn header_format() -> Format {
        Format::new().set_bold()
    }

    fn time_format() -> Format {
        Format::new().set_num_format("0.000000")
    }

    fn speedup_format() -> Format {
        Format::new().set_num_format("0.00\"×\"")
    }
}
