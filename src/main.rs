use clap::{Parser, Subcommand};
use order_tally::cli;
use order_tally::error::TallyResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "order-tally")]
#[command(about = "Summarize marketplace order reports into styled Excel workbooks")]
#[command(long_about = "Order Tally - order report summarizer

Reads a multi-sheet .xlsx export of order line items, keeps completed orders,
and writes one summary sheet per input sheet: quantity and total price per
(SKU, product name), with a styled header and a trailing TOTAL row.

REQUIRED INPUT COLUMNS:
  Order Number, Order Status, SKU Reference, Price Before Discount,
  Price After Discount, Total Product Price, Quantity, Product Name

EXAMPLE:
  order-tally summarize orders.xlsx summary.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an order report into a styled Excel workbook
    Summarize {
        /// Path to the order report (.xlsx)
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// Show per-sheet group counts
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> TallyResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            input,
            output,
            verbose,
        } => cli::summarize(input, output, verbose),
    }
}
