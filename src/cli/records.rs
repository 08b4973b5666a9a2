use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{LedgerError, Result};
use crate::models::{MonthEntry, MonthReport};
use crate::page::LedgerPage;
use crate::reconciler::reconcile;
use crate::reports::RowExtractor;

pub fn run(page_path: &str, month: Option<&str>) -> Result<()> {
    let page = LedgerPage::load(Path::new(page_path))?;
    let months = select_months(page.months(), month)?;
    if months.is_empty() {
        println!("No months found on the page.");
        return Ok(());
    }
    for entry in months {
        let records = reconcile(page.raw_rows(&entry.id)?);
        let report = MonthReport {
            id: entry.id,
            label: entry.label,
            records,
        };
        println!("{}", format_month(&report));
    }
    Ok(())
}

fn select_months(months: Vec<MonthEntry>, wanted: Option<&str>) -> Result<Vec<MonthEntry>> {
    let Some(id) = wanted else {
        return Ok(months);
    };
    let selected: Vec<MonthEntry> = months.into_iter().filter(|m| m.id == id).collect();
    if selected.is_empty() {
        return Err(LedgerError::UnknownMonth(id.to_string()));
    }
    Ok(selected)
}

pub fn format_month(report: &MonthReport) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Data".bold()),
        Cell::new("Descrizione".bold()),
        Cell::new("Entrate".green().bold()),
        Cell::new("Uscite".red().bold()),
        Cell::new("Erogante".bold()),
        Cell::new("Beneficiario".bold()),
    ]);
    for record in &report.records {
        let (entrate, uscite) = if record.movement.is_income() {
            (
                Cell::new(record.entrate.as_str().green()),
                Cell::new(record.uscite.as_str()),
            )
        } else {
            (
                Cell::new(record.entrate.as_str()),
                Cell::new(record.uscite.as_str().red()),
            )
        };
        table.add_row(vec![
            Cell::new(&record.data_operazione),
            Cell::new(record.descrizione.as_deref().unwrap_or("")),
            entrate,
            uscite,
            Cell::new(&record.erogante),
            Cell::new(&record.beneficiario),
        ]);
    }
    let count = report.records.len();
    let noun = if count == 1 { "movimento" } else { "movimenti" };
    format!(
        "{} (id {}, {} {})\n{}",
        report.label, report.id, count, noun, table
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movement, TransactionRecord};

    fn record(descrizione: Option<&str>) -> TransactionRecord {
        TransactionRecord {
            data_operazione: "01.02.2026".to_string(),
            entrate: "150.00".to_string(),
            uscite: String::new(),
            erogante: "Camarilla".to_string(),
            beneficiario: "Principatum".to_string(),
            descrizione: descrizione.map(str::to_string),
            movement: Movement::Income(150.0),
        }
    }

    fn month(id: &str) -> MonthEntry {
        MonthEntry {
            id: id.to_string(),
            label: format!("Mese {id}"),
        }
    }

    #[test]
    fn test_format_month_lists_fields() {
        let report = MonthReport {
            id: "1".to_string(),
            label: "Febbraio 2026".to_string(),
            records: vec![record(Some("Giustizia-Trasferimento")), record(None)],
        };
        let out = format_month(&report);
        assert!(out.contains("Febbraio 2026 (id 1, 2 movimenti)"));
        assert!(out.contains("Giustizia-Trasferimento"));
        assert!(out.contains("Camarilla"));
        assert!(out.contains("150.00"));
    }

    #[test]
    fn test_format_month_singular_count() {
        let report = MonthReport {
            id: "3".to_string(),
            label: "Marzo 2026".to_string(),
            records: vec![record(None)],
        };
        assert!(format_month(&report).contains("(id 3, 1 movimento)"));
    }

    #[test]
    fn test_select_months_keeps_requested_id() {
        let months = vec![month("2"), month("1")];
        let selected = select_months(months, Some("1")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "1");
    }

    #[test]
    fn test_select_months_unknown_id_fails() {
        let months = vec![month("2"), month("1")];
        let err = select_months(months, Some("9")).unwrap_err();
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn test_select_months_without_filter_keeps_all() {
        let months = vec![month("2"), month("1")];
        assert_eq!(select_months(months, None).unwrap().len(), 2);
    }
}
