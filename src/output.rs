//! Spreadsheet output for assembled reports.

use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

use crate::records::ReportRow;

/// Spreadsheet column order. Matches [`ReportRow`] field order.
pub const COLUMNS: [&str; 9] = [
    "Date",
    "district",
    "crop_type",
    "min_price",
    "max_price",
    "modal_price",
    "average",
    "moving_avg_7",
    "moving_avg_30",
];

/// Writes the rows to a single-worksheet xlsx file with a header row.
/// Dates carry a `yyyy-mm-dd` cell format, no time of day.
pub fn write_report(path: &Path, sheet_name: &str, rows: &[ReportRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_datetime_with_format(r, 0, &row.date, &date_format)?;
        worksheet.write_string(r, 1, &row.district)?;
        worksheet.write_string(r, 2, &row.crop_type)?;
        worksheet.write_number(r, 3, row.min_price)?;
        worksheet.write_number(r, 4, row.max_price)?;
        worksheet.write_number(r, 5, row.modal_price)?;
        worksheet.write_number(r, 6, row.average)?;
        worksheet.write_number(r, 7, row.moving_avg_7)?;
        worksheet.write_number(r, 8, row.moving_avg_30)?;
    }

    worksheet.autofit();
    workbook.save(path)?;

    info!(path = %path.display(), rows = rows.len(), "Report saved");
    Ok(())
}
