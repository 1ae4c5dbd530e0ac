//! Serializes a [`TabularReport`] into an `.xlsx` workbook.

use std::borrow::Cow;

use jiff::civil::DateTime;
use rust_xlsxwriter::{
    Color, DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
    XlsxError,
};

use super::tabular::{Sheet, SheetBody, TabularReport};
use crate::error::{AgendaError, Result};
use crate::models::ExportFormat;

const HEADER_FILL: u32 = 0x366092;

/// Longest string a worksheet cell accepts, in characters.
const MAX_CELL_CHARS: usize = 32_767;

struct Styles {
    title: Format,
    key: Format,
    header: Format,
    cell: Format,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Format::new().set_bold().set_font_size(16),
            key: Format::new().set_bold(),
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            cell: Format::new().set_border(FormatBorder::Thin),
        }
    }
}

impl TabularReport {
    /// Writes the workbook to memory.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::RenderFailure` if the workbook cannot be
    /// assembled.
    pub fn to_xlsx(&self) -> Result<Vec<u8>> {
        self.write_workbook()
            .map_err(|e| AgendaError::render_failure(ExportFormat::Tabular, e))
    }

    fn write_workbook(&self) -> std::result::Result<Vec<u8>, XlsxError> {
        let styles = Styles::new();
        let mut workbook = Workbook::new();
        let created = excel_datetime(&self.created)?;
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));
        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            write_sheet(worksheet, sheet, &styles)?;
        }
        workbook.save_to_buffer()
    }
}

fn excel_datetime(at: &DateTime) -> std::result::Result<ExcelDateTime, XlsxError> {
    ExcelDateTime::from_ymd(
        at.year().unsigned_abs(),
        at.month().unsigned_abs(),
        at.day().unsigned_abs(),
    )?
    .and_hms(
        u16::from(at.hour().unsigned_abs()),
        at.minute().unsigned_abs(),
        at.second().unsigned_abs(),
    )
}

/// Cuts text that would overflow a cell, marking the cut with an ellipsis.
fn cell_text(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        None => Cow::Borrowed(text),
        Some(_) => {
            let mut clipped: String = text.chars().take(MAX_CELL_CHARS - 1).collect();
            clipped.push('…');
            Cow::Owned(clipped)
        }
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, styles: &Styles) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(sheet.name)?;
    for (col, width) in (0u16..).zip(sheet.widths) {
        worksheet.set_column_width(col, *width)?;
    }

    match &sheet.body {
        SheetBody::KeyValue { title, pairs } => {
            worksheet.merge_range(0, 0, 0, 1, &cell_text(title), &styles.title)?;
            for (row, (key, value)) in (2u32..).zip(pairs) {
                worksheet.write_string_with_format(row, 0, cell_text(key), &styles.key)?;
                worksheet.write_string(row, 1, cell_text(value))?;
            }
        }
        SheetBody::Table { header, rows } => {
            for (col, label) in (0u16..).zip(header.iter()) {
                worksheet.write_string_with_format(0, col, *label, &styles.header)?;
            }
            for (row, cells) in (1u32..).zip(rows) {
                for (col, cell) in (0u16..).zip(cells) {
                    worksheet.write_string_with_format(row, col, cell_text(cell), &styles.cell)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    use super::*;
    use crate::fixtures::{full_content, record};
    use crate::view::PlanView;

    #[test]
    fn test_workbook_is_a_zip_container() {
        let at = date(2024, 1, 2).at(9, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        for content in [None, Some(full_content())] {
            let view = PlanView::from_record(&record(content));
            let bytes = TabularReport::build(&view, &at).to_xlsx().unwrap();
            assert!(bytes.starts_with(b"PK"));
        }
    }

    #[test]
    fn test_same_input_same_workbook_bytes() {
        let at = date(2024, 1, 2).at(9, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        let view = PlanView::from_record(&record(Some(full_content())));
        let first = TabularReport::build(&view, &at).to_xlsx().unwrap();
        let second = TabularReport::build(&view, &at).to_xlsx().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_oversized_cell_text_is_clipped() {
        let at = date(2024, 1, 2).at(9, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        let mut content = full_content();
        content["timeline"]["phases"][0]["key_activities"][0] = serde_json::json!("x".repeat(40_000));
        let view = PlanView::from_record(&record(Some(content)));
        let report = TabularReport::build(&view, &at);
        let bytes = report.to_xlsx().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_cell_text_keeps_short_text_and_clips_long_text() {
        assert!(matches!(cell_text("Venue"), Cow::Borrowed("Venue")));

        let long = "é".repeat(MAX_CELL_CHARS + 10);
        let clipped = cell_text(&long);
        assert_eq!(clipped.chars().count(), MAX_CELL_CHARS);
        assert!(clipped.ends_with('…'));

        let exact = "y".repeat(MAX_CELL_CHARS);
        assert_eq!(cell_text(&exact), exact.as_str());
    }
}
