//! Data model for the order summary pipeline.

/// Status value marking an order as completed. Rows with any other status are dropped.
pub const COMPLETED_STATUS: &str = "completed";

/// Sentinel written in place of a missing SKU reference.
pub const UNKNOWN_SKU: &str = "UNKNOWN";

//==============================================================================
// Input column names
//==============================================================================

pub const COL_ORDER_NUMBER: &str = "Order Number";
pub const COL_STATUS: &str = "Order Status";
pub const COL_SKU: &str = "SKU Reference";
pub const COL_PRICE_BEFORE_DISCOUNT: &str = "Price Before Discount";
pub const COL_PRICE_AFTER_DISCOUNT: &str = "Price After Discount";
pub const COL_TOTAL_PRICE: &str = "Total Product Price";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_PRODUCT_NAME: &str = "Product Name";

/// Columns that must be present in every input sheet. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COL_ORDER_NUMBER,
    COL_STATUS,
    COL_SKU,
    COL_PRICE_BEFORE_DISCOUNT,
    COL_PRICE_AFTER_DISCOUNT,
    COL_TOTAL_PRICE,
    COL_QUANTITY,
    COL_PRODUCT_NAME,
];

//==============================================================================
// Pipeline entities
//==============================================================================

/// One order line item as read from a sheet, all fields still raw strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRecord {
    pub order_number: String,
    pub status: String,
    /// May be empty; replaced with [`UNKNOWN_SKU`] during cleaning.
    pub sku: String,
    pub price_before_discount: String,
    pub price_after_discount: String,
    pub total_price: String,
    pub quantity: String,
    pub product_name: String,
}

/// A completed order with numeric fields parsed and the SKU defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecord {
    pub order_number: String,
    pub sku: String,
    pub price_before_discount: f64,
    pub price_after_discount: f64,
    pub total_price: f64,
    pub quantity: i64,
    pub product_name: String,
}

/// One grouped output record: summed quantity and total price for a
/// (SKU, product name) pair. The trailing TOTAL row uses SKU `"TOTAL"` and an
/// empty product name.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub sku: String,
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
}

impl AggregateRow {
    pub fn new(sku: String, product_name: String) -> Self {
        Self {
            sku,
            product_name,
            quantity: 0,
            total_price: 0.0,
        }
    }

    /// Whether this is the synthetic trailing TOTAL row.
    pub fn is_total(&self) -> bool {
        self.sku == "TOTAL" && self.product_name.is_empty()
    }
}

/// Aggregated result for a single sheet. `rows` preserves first-seen group
/// order and ends with the synthetic TOTAL row.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
    pub name: String,
    pub rows: Vec<AggregateRow>,
}

impl SheetSummary {
    pub fn new(name: String, rows: Vec<AggregateRow>) -> Self {
        Self { name, rows }
    }
}

/// Per-sheet summaries for a whole workbook, in source sheet order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookSummary {
    pub sheets: Vec<SheetSummary>,
}

impl WorkbookSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, sheet: SheetSummary) {
        self.sheets.push(sheet);
    }

    /// Look up a sheet summary by name.
    pub fn sheet(&self, name: &str) -> Option<&SheetSummary> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
