use std::path::{Path, PathBuf};

use crate::categories::load_categories;
use crate::error::Result;
use crate::fmt::amount;
use crate::page::LedgerPage;
use crate::reports::{ReportBuilder, SeriesReport};

pub fn run(page_path: &str, output: Option<&str>, categories: Option<&str>) -> Result<()> {
    let categories = load_categories(categories)?;
    let page = LedgerPage::load(Path::new(page_path))?;
    let report = ReportBuilder::new(&page, &categories).build(page.months())?;
    let path = match output {
        Some(p) => PathBuf::from(p),
        None => default_path(),
    };
    write_series_csv(&report, &path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Dated default filename in the current directory: movimenti-2026-08-24.csv
pub fn default_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    PathBuf::from(format!("movimenti-{date}.csv"))
}

/// One row per month, oldest first, two-decimal amounts. NaN is written
/// literally so a contaminated month is visible in the file. An empty
/// report still produces the header row.
pub fn write_series_csv(report: &SeriesReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["mese", "totale", "influenze", "passive", "altro"])?;
    for (i, label) in report.labels.iter().enumerate() {
        wtr.write_record([
            label.as_str(),
            &amount(report.total[i]),
            &amount(report.influence[i]),
            &amount(report.passive[i]),
            &amount(report.other[i]),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
