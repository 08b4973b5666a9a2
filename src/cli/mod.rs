pub mod categories;
pub mod chart;
pub mod export;
pub mod records;
pub mod report;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vcp-ledger",
    about = "Monthly influence gains from a saved Principatum Papiae euro sheet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-month totals: total, influence, passive and other gains.
    Report {
        /// Path to a saved copy of the euro-sheet page
        page: String,
        /// Category config file (default: ~/.config/vcp-ledger/categories.json)
        #[arg(long)]
        categories: Option<String>,
    },
    /// Reconciled movement records, month by month.
    Records {
        /// Path to a saved copy of the euro-sheet page
        page: String,
        /// Only the month with this id (ids are shown in the output)
        #[arg(long)]
        month: Option<String>,
    },
    /// Interactive chart of the monthly series.
    Chart {
        /// Path to a saved copy of the euro-sheet page
        page: String,
        /// Category config file (default: ~/.config/vcp-ledger/categories.json)
        #[arg(long)]
        categories: Option<String>,
    },
    /// Write the monthly series to a CSV file.
    Export {
        /// Path to a saved copy of the euro-sheet page
        page: String,
        /// Output file path (default: movimenti-YYYY-MM-DD.csv)
        #[arg(long)]
        output: Option<String>,
        /// Category config file (default: ~/.config/vcp-ledger/categories.json)
        #[arg(long)]
        categories: Option<String>,
    },
    /// Show the descriptor substrings used to classify movements.
    Categories {
        /// Category config file (default: ~/.config/vcp-ledger/categories.json)
        #[arg(long)]
        categories: Option<String>,
        /// Write the built-in defaults to the config file and exit
        #[arg(long)]
        write: bool,
    },
}
