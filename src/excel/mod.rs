//! Excel I/O for the order summary pipeline:
//! - Reader: .xlsx order report → per-sheet order records (calamine)
//! - Writer: aggregated summary → styled .xlsx workbook (rust_xlsxwriter)

mod reader;
mod writer;

pub use reader::{OrderReader, OrderSheet};
pub use writer::SummaryExporter;
