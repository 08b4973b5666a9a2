mod aggregator;
mod categories;
mod cli;
mod error;
mod fmt;
mod models;
mod page;
mod reconciler;
mod reports;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report { page, categories } => cli::report::run(&page, categories.as_deref()),
        Commands::Records { page, month } => cli::records::run(&page, month.as_deref()),
        Commands::Chart { page, categories } => cli::chart::run(&page, categories.as_deref()),
        Commands::Export {
            page,
            output,
            categories,
        } => cli::export::run(&page, output.as_deref(), categories.as_deref()),
        Commands::Categories { categories, write } => {
            cli::categories::run(categories.as_deref(), write)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
