//! Workbook pipeline: load → transform per sheet → collect → write → style.
//!
//! Every sheet of the input workbook is transformed independently and in source
//! order; there is no state shared across sheets. Any error aborts the whole
//! invocation with no partial output.

use crate::error::TallyResult;
use crate::excel::{OrderReader, SummaryExporter};
use crate::transform::transform_sheet;
use crate::types::{SheetSummary, WorkbookSummary};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Summarize an order report read from a file path.
///
/// Returns the finished summary workbook as an in-memory byte stream positioned
/// at its start.
pub fn summarize_workbook<P: AsRef<Path>>(path: P) -> TallyResult<Cursor<Vec<u8>>> {
    let reader = OrderReader::open(path)?;
    run(reader)
}

/// Summarize an order report read from any seekable byte stream.
pub fn summarize_workbook_from_reader<RS: Read + Seek>(
    reader: RS,
) -> TallyResult<Cursor<Vec<u8>>> {
    let reader = OrderReader::from_reader(reader)?;
    run(reader)
}

/// Run the transform over every sheet and collect the per-sheet results.
///
/// Exposed separately so library callers can inspect the aggregates without
/// rendering the output workbook.
pub fn summarize_sheets<P: AsRef<Path>>(path: P) -> TallyResult<WorkbookSummary> {
    let mut reader = OrderReader::open(path)?;
    collect(&mut reader)
}

fn run<RS: Read + Seek>(mut reader: OrderReader<RS>) -> TallyResult<Cursor<Vec<u8>>> {
    let summary = collect(&mut reader)?;
    let exporter = SummaryExporter::new(summary);
    let buffer = exporter.export_to_buffer()?;
    Ok(Cursor::new(buffer))
}

fn collect<RS: Read + Seek>(reader: &mut OrderReader<RS>) -> TallyResult<WorkbookSummary> {
    let mut summary = WorkbookSummary::new();
    for sheet in reader.sheets()? {
        let rows = transform_sheet(&sheet.name, &sheet.records)?;
        summary.add_sheet(SheetSummary::new(sheet.name, rows));
    }
    Ok(summary)
}
