//! Excel reader: .xlsx order report → per-sheet [`OrderRecord`]s.

use crate::error::{TallyError, TallyResult};
use crate::types::{
    OrderRecord, COL_ORDER_NUMBER, COL_PRICE_AFTER_DISCOUNT, COL_PRICE_BEFORE_DISCOUNT,
    COL_PRODUCT_NAME, COL_QUANTITY, COL_SKU, COL_STATUS, COL_TOTAL_PRICE, REQUIRED_COLUMNS,
};
use calamine::{open_workbook, open_workbook_from_rs, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// One input sheet: its name plus the raw order rows read from it.
#[derive(Debug, Clone)]
pub struct OrderSheet {
    pub name: String,
    pub records: Vec<OrderRecord>,
}

/// Reader over a multi-sheet .xlsx order report.
pub struct OrderReader<RS> {
    workbook: Xlsx<RS>,
}

impl OrderReader<BufReader<File>> {
    /// Open an order report from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> TallyResult<Self> {
        let workbook: Xlsx<_> = open_workbook(path.as_ref()).map_err(|e| {
            TallyError::FileFormat(format!(
                "failed to open '{}' as an xlsx workbook: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self { workbook })
    }
}

impl<RS: Read + Seek> OrderReader<RS> {
    /// Open an order report from any seekable byte stream.
    pub fn from_reader(reader: RS) -> TallyResult<Self> {
        let workbook: Xlsx<_> = open_workbook_from_rs(reader).map_err(|e| {
            TallyError::FileFormat(format!("failed to read stream as an xlsx workbook: {}", e))
        })?;
        Ok(Self { workbook })
    }

    /// Read every sheet of the workbook, in source order.
    pub fn sheets(&mut self) -> TallyResult<Vec<OrderSheet>> {
        let sheet_names = self.workbook.sheet_names().to_vec();

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            let records = self.read_sheet(&name)?;
            sheets.push(OrderSheet { name, records });
        }
        Ok(sheets)
    }

    /// Read one sheet's rows as [`OrderRecord`]s, validating the header row.
    fn read_sheet(&mut self, sheet_name: &str) -> TallyResult<Vec<OrderRecord>> {
        let range = self.workbook.worksheet_range(sheet_name).map_err(|e| {
            TallyError::FileFormat(format!("failed to read sheet '{}': {}", sheet_name, e))
        })?;

        let columns = resolve_columns(sheet_name, &range)?;
        let (height, _) = range.get_size();

        let mut records = Vec::new();
        for row in 1..height {
            let cell = |column: &str| -> String {
                // Column indices were validated against the header row above.
                let col = columns[column];
                range.get((row, col)).map(cell_text).unwrap_or_default()
            };

            records.push(OrderRecord {
                order_number: cell(COL_ORDER_NUMBER),
                status: cell(COL_STATUS),
                sku: cell(COL_SKU),
                price_before_discount: cell(COL_PRICE_BEFORE_DISCOUNT),
                price_after_discount: cell(COL_PRICE_AFTER_DISCOUNT),
                total_price: cell(COL_TOTAL_PRICE),
                quantity: cell(COL_QUANTITY),
                product_name: cell(COL_PRODUCT_NAME),
            });
        }

        Ok(records)
    }
}

/// Map each required column name to its index in the header row.
///
/// An empty sheet has no header row, so it fails the same way as a sheet with
/// the column removed.
fn resolve_columns(
    sheet_name: &str,
    range: &Range<Data>,
) -> TallyResult<HashMap<&'static str, usize>> {
    let (_, width) = range.get_size();

    let mut header: HashMap<String, usize> = HashMap::new();
    for col in 0..width {
        if let Some(cell) = range.get((0, col)) {
            // Header names are trimmed; data cells are not
            let name = cell_text(cell).trim().to_string();
            if !name.is_empty() {
                // First occurrence wins for duplicated headers
                header.entry(name).or_insert(col);
            }
        }
    }

    let mut columns = HashMap::new();
    for column in REQUIRED_COLUMNS {
        match header.get(column) {
            Some(&idx) => {
                columns.insert(column, idx);
            }
            None => {
                return Err(TallyError::MissingColumn {
                    sheet: sheet_name.to_string(),
                    column: column.to_string(),
                })
            }
        }
    }

    Ok(columns)
}

/// Render a cell as text, the way a string-typed read would see it.
///
/// Values pass through untrimmed: the status filter is an exact match, so
/// `"completed "` must stay distinct from `"completed"`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole floats read back as integers ("3", not "3.0")
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
