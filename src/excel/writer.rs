//! Excel writer: [`WorkbookSummary`] → styled .xlsx summary workbook.

use crate::error::{TallyError, TallyResult};
use crate::types::{SheetSummary, WorkbookSummary};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

/// Output column headers, in write order.
const OUTPUT_HEADERS: [&str; 4] = ["SKU Reference", "Product Name", "Quantity", "Total Price"];

/// Output column widths (SKU, product name, quantity, total price).
const COLUMN_WIDTHS: [f64; 4] = [18.0, 40.0, 10.0, 16.0];

/// Reusable cell formats shared by every output sheet.
struct SummaryFormats {
    header: Format,
    text: Format,
    integer: Format,
    currency: Format,
    total_text: Format,
    total_integer: Format,
    total_currency: Format,
}

impl SummaryFormats {
    fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_background_color(0x4472C4)
            .set_font_color(0xFFFFFF)
            .set_border(FormatBorder::Thin);

        let text = Format::new().set_border(FormatBorder::Thin);

        let integer = Format::new()
            .set_num_format("#,##0")
            .set_border(FormatBorder::Thin);

        let currency = Format::new()
            .set_num_format("#,##0.00")
            .set_border(FormatBorder::Thin);

        let total_text = Format::new()
            .set_bold()
            .set_background_color(0xE2EFDA)
            .set_border(FormatBorder::Thin);

        let total_integer = Format::new()
            .set_bold()
            .set_num_format("#,##0")
            .set_background_color(0xE2EFDA)
            .set_border(FormatBorder::Thin);

        let total_currency = Format::new()
            .set_bold()
            .set_num_format("#,##0.00")
            .set_background_color(0xE2EFDA)
            .set_border(FormatBorder::Thin);

        Self {
            header,
            text,
            integer,
            currency,
            total_text,
            total_integer,
            total_currency,
        }
    }
}

/// Exporter for the aggregated order summary.
pub struct SummaryExporter {
    summary: WorkbookSummary,
}

impl SummaryExporter {
    pub fn new(summary: WorkbookSummary) -> Self {
        Self { summary }
    }

    /// Build the styled workbook and return the finished .xlsx bytes.
    pub fn export_to_buffer(&self) -> TallyResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let formats = SummaryFormats::new();

        for sheet in &self.summary.sheets {
            self.export_sheet(&mut workbook, sheet, &formats)?;
        }

        workbook
            .save_to_buffer()
            .map_err(|e| TallyError::Export(format!("failed to finalize workbook: {}", e)))
    }

    /// Build the styled workbook and write it to a file.
    pub fn export<P: AsRef<Path>>(&self, output_path: P) -> TallyResult<()> {
        let buffer = self.export_to_buffer()?;
        std::fs::write(output_path, buffer)?;
        Ok(())
    }

    /// Write one summary sheet: styled header, aggregate rows, bold TOTAL row.
    fn export_sheet(
        &self,
        workbook: &mut Workbook,
        sheet: &SheetSummary,
        formats: &SummaryFormats,
    ) -> TallyResult<()> {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name).map_err(|e| {
            TallyError::Export(format!("failed to name sheet '{}': {}", sheet.name, e))
        })?;

        for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
            worksheet
                .write_with_format(0, col as u16, *header, &formats.header)
                .map_err(|e| TallyError::Export(format!("failed to write header: {}", e)))?;
        }

        for (idx, row) in sheet.rows.iter().enumerate() {
            let excel_row = (idx + 1) as u32;
            let (text_fmt, int_fmt, cur_fmt) = if row.is_total() {
                (
                    &formats.total_text,
                    &formats.total_integer,
                    &formats.total_currency,
                )
            } else {
                (&formats.text, &formats.integer, &formats.currency)
            };

            worksheet
                .write_with_format(excel_row, 0, row.sku.as_str(), text_fmt)
                .map_err(|e| TallyError::Export(format!("failed to write SKU: {}", e)))?;
            worksheet
                .write_with_format(excel_row, 1, row.product_name.as_str(), text_fmt)
                .map_err(|e| TallyError::Export(format!("failed to write product name: {}", e)))?;
            worksheet
                .write_with_format(excel_row, 2, row.quantity as f64, int_fmt)
                .map_err(|e| TallyError::Export(format!("failed to write quantity: {}", e)))?;
            worksheet
                .write_with_format(excel_row, 3, row.total_price, cur_fmt)
                .map_err(|e| TallyError::Export(format!("failed to write total price: {}", e)))?;
        }

        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width).map_err(|e| {
                TallyError::Export(format!("failed to set column width: {}", e))
            })?;
        }

        Ok(())
    }
}
