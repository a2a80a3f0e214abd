//! Order Tally - marketplace order report summarizer
//!
//! Reads a multi-sheet .xlsx export of order line items, keeps completed
//! orders, cleans currency-formatted fields, aggregates quantity and total
//! price per (SKU, product name), and writes a styled summary workbook with
//! one sheet per input sheet plus a trailing TOTAL row each.
//!
//! # Example
//!
//! ```no_run
//! use order_tally::pipeline::summarize_workbook;
//!
//! let output = summarize_workbook("orders.xlsx")?;
//! std::fs::write("summary.xlsx", output.into_inner())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod pipeline;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use error::{TallyError, TallyResult};
pub use types::{AggregateRow, CleanedRecord, OrderRecord, SheetSummary, WorkbookSummary};
