//! Sheet transform: filter completed orders, clean numeric fields, group by
//! (SKU, product name), and append a TOTAL row.
//!
//! This is the only part of the pipeline with decision logic. Everything is a
//! single linear pass over the rows of one sheet; grouping preserves the order
//! in which each (SKU, product name) pair is first seen.

use crate::error::{TallyError, TallyResult};
use crate::types::{
    AggregateRow, CleanedRecord, OrderRecord, COL_PRICE_AFTER_DISCOUNT,
    COL_PRICE_BEFORE_DISCOUNT, COL_QUANTITY, COL_TOTAL_PRICE, COMPLETED_STATUS, UNKNOWN_SKU,
};
use std::collections::HashMap;

/// Parse a currency-formatted string ("15,000" or "15000.50") to a float.
///
/// Thousands separators (commas) are stripped; anything left that is not an
/// ASCII digit or a decimal point is an error. Negative values and exponents
/// are rejected rather than silently coerced.
pub fn parse_currency(raw: &str, column: &str, sheet: &str) -> TallyResult<f64> {
    let cleaned = raw.trim().replace(',', "");

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(TallyError::Parse(format!(
            "sheet '{}': invalid currency value '{}' in column '{}'",
            sheet, raw, column
        )));
    }

    cleaned.parse::<f64>().map_err(|_| {
        TallyError::Parse(format!(
            "sheet '{}': invalid currency value '{}' in column '{}'",
            sheet, raw, column
        ))
    })
}

/// Parse a quantity string to an integer.
pub fn parse_quantity(raw: &str, sheet: &str) -> TallyResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        TallyError::Parse(format!(
            "sheet '{}': invalid quantity '{}' in column '{}'",
            sheet, raw, COL_QUANTITY
        ))
    })
}

/// Clean a single completed order: default the SKU, parse the three currency
/// fields and the quantity. The caller is responsible for the status filter.
pub fn clean_record(record: &OrderRecord, sheet: &str) -> TallyResult<CleanedRecord> {
    let sku = if record.sku.trim().is_empty() {
        UNKNOWN_SKU.to_string()
    } else {
        record.sku.clone()
    };

    Ok(CleanedRecord {
        order_number: record.order_number.clone(),
        sku,
        price_before_discount: parse_currency(
            &record.price_before_discount,
            COL_PRICE_BEFORE_DISCOUNT,
            sheet,
        )?,
        price_after_discount: parse_currency(
            &record.price_after_discount,
            COL_PRICE_AFTER_DISCOUNT,
            sheet,
        )?,
        total_price: parse_currency(&record.total_price, COL_TOTAL_PRICE, sheet)?,
        quantity: parse_quantity(&record.quantity, sheet)?,
        product_name: record.product_name.clone(),
    })
}

/// Transform one sheet's order records into its aggregate rows.
///
/// Rows whose status is not exactly `"completed"` are dropped silently. The
/// remaining rows are cleaned, grouped by (SKU, product name) in first-seen
/// order, and a synthetic TOTAL row is appended summing all groups.
pub fn transform_sheet(sheet_name: &str, records: &[OrderRecord]) -> TallyResult<Vec<AggregateRow>> {
    let mut rows: Vec<AggregateRow> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for record in records {
        if record.status != COMPLETED_STATUS {
            continue;
        }

        let cleaned = clean_record(record, sheet_name)?;

        let key = (cleaned.sku.clone(), cleaned.product_name.clone());
        let slot = *index.entry(key).or_insert_with(|| {
            rows.push(AggregateRow::new(cleaned.sku.clone(), cleaned.product_name.clone()));
            rows.len() - 1
        });

        rows[slot].quantity += cleaned.quantity;
        rows[slot].total_price += cleaned.total_price;
    }

    let total_quantity: i64 = rows.iter().map(|r| r.quantity).sum();
    let total_price: f64 = rows.iter().map(|r| r.total_price).sum();

    rows.push(AggregateRow {
        sku: "TOTAL".to_string(),
        product_name: String::new(),
        quantity: total_quantity,
        total_price,
    });

    Ok(rows)
}
