//! CLI command implementations

use crate::error::TallyResult;
use crate::excel::SummaryExporter;
use crate::pipeline::summarize_sheets;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Summarize an order report into a styled Excel workbook
pub fn summarize(input: PathBuf, output: PathBuf, verbose: bool) -> TallyResult<()> {
    println!("{}", "📊 Order Tally - Summarize".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading order report...".cyan());
    }

    let summary = summarize_sheets(&input)?;

    if verbose {
        for sheet in &summary.sheets {
            // Rows minus the trailing TOTAL row
            let groups = sheet.rows.len().saturating_sub(1);
            println!(
                "   📄 {}: {} product groups",
                sheet.name.bright_blue(),
                groups
            );
        }
        println!();
    }

    if verbose {
        println!("{}", "💾 Writing summary workbook...".cyan());
    }

    let exporter = SummaryExporter::new(summary);
    let buffer = exporter.export_to_buffer()?;
    fs::write(&output, buffer)?;

    println!("{}", "✅ Summary Complete!".bold().green());
    println!("   Excel file: {}\n", output.display());

    Ok(())
}
