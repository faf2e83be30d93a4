//!
//! XLSX workbook with the reports of one compiler.
//!

pub mod worksheet;

use crate::report::CompilerReport;

use self::worksheet::Worksheet;

///
/// XLSX workbook with the reports of one compiler.
///
#[derive(Default)]
pub struct Xlsx {
    /// One worksheet per dataset, in configuration order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&CompilerReport> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(report: &CompilerReport) -> Result<Self, Self::Error> {
        let worksheets = report
            .datasets
            .iter()
            .map(|dataset| Worksheet::new(report.compiler.label.as_str(), dataset))
            .collect::<anyhow::Result<Vec<Worksheet>>>()?;
        Ok(Self { worksheets })
    }
}
