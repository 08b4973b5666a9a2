use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::categories::load_categories;
use crate::error::Result;
use crate::fmt::money;
use crate::page::LedgerPage;
use crate::reports::{
    ReportBuilder, SeriesReport, INFLUENCE_LABEL, OTHER_LABEL, PASSIVE_LABEL, TOTAL_LABEL,
};

pub fn run(page_path: &str, categories: Option<&str>) -> Result<()> {
    let categories = load_categories(categories)?;
    let page = LedgerPage::load(Path::new(page_path))?;
    let report = ReportBuilder::new(&page, &categories).build(page.months())?;
    if report.is_empty() {
        println!("No months found on the page.");
        return Ok(());
    }
    println!("{}", format_series(&report));
    Ok(())
}

fn money_cell(val: f64) -> Cell {
    if val.is_nan() {
        Cell::new("NaN".red().bold())
    } else {
        Cell::new(money(val))
    }
}

/// One row per month, oldest first, with the four series as columns.
pub fn format_series(report: &SeriesReport) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Mese".bold()),
        Cell::new(TOTAL_LABEL.bold()),
        Cell::new(INFLUENCE_LABEL.green().bold()),
        Cell::new(PASSIVE_LABEL.blue().bold()),
        Cell::new(OTHER_LABEL.yellow().bold()),
    ]);
    for (i, label) in report.labels.iter().enumerate() {
        table.add_row(vec![
            Cell::new(label),
            money_cell(report.total[i]),
            money_cell(report.influence[i]),
            money_cell(report.passive[i]),
            money_cell(report.other[i]),
        ]);
    }
    format!("Monthly gains by category\n{table}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SeriesReport {
        SeriesReport {
            labels: vec!["Gennaio 2026".to_string(), "Febbraio 2026".to_string()],
            total: vec![30.0, 150.0],
            influence: vec![30.0, 150.0],
            passive: vec![0.0, 0.0],
            other: vec![0.0, 0.0],
        }
    }

    #[test]
    fn test_format_series_lists_months_chronologically() {
        let out = format_series(&sample_report());
        assert!(out.contains("Gennaio 2026"));
        assert!(out.contains("Febbraio 2026"));
        assert!(out.contains("€150.00"));
        let gennaio = out.find("Gennaio").unwrap();
        let febbraio = out.find("Febbraio").unwrap();
        assert!(gennaio < febbraio);
    }

    #[test]
    fn test_format_series_renders_nan_literally() {
        let mut report = sample_report();
        report.total[0] = f64::NAN;
        let out = format_series(&report);
        assert!(out.contains("NaN"));
    }
}
