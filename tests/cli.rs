use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const PAGE: &str = r#"<html><body>
<div id="mese_1"><b>Febbraio 2026</b></div>
<table id="movimenti_1">
  <tr><th></th><th>Data dell'operazione</th><th>Entrate</th><th>Uscite</th><th>Erogante</th><th>Beneficiario</th></tr>
  <tr><td></td><td>01.02.2026</td><td>150.00</td><td></td><td>Camarilla</td><td>Principatum</td></tr>
  <tr><td></td><td>Giustizia-Trasferimento</td><td></td><td></td><td></td><td></td></tr>
</table>
</body></html>"#;

const TWO_MONTH_PAGE: &str = r#"<html><body>
<div id="mese_1">Febbraio 2026</div>
<table id="movimenti_1">
  <tr><th></th><th>Data dell'operazione</th><th>Entrate</th><th>Uscite</th><th>Erogante</th><th>Beneficiario</th></tr>
  <tr><td></td><td>01.02.2026</td><td>150.00</td><td></td><td>Camarilla</td><td>Principatum</td></tr>
  <tr><td></td><td>Giustizia-Trasferimento</td><td></td><td></td><td></td><td></td></tr>
</table>
<div id="mese_2">Gennaio 2026</div>
<table id="movimenti_2">
  <tr><th></th><th>Data dell'operazione</th><th>Entrate</th><th>Uscite</th><th>Erogante</th><th>Beneficiario</th></tr>
  <tr><td></td><td>15.01.2026</td><td></td><td>30.00</td><td>Principatum</td><td>Tessitore</td></tr>
  <tr><td></td><td>Spesa privata</td><td></td><td></td><td></td><td></td></tr>
</table>
</body></html>"#;

fn bin() -> Command {
    Command::cargo_bin("vcp-ledger").unwrap()
}

fn write_page(dir: &Path, html: &str) -> PathBuf {
    let path = dir.join("scheda_euro.html");
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn test_report_prints_monthly_table() {
    let dir = tempdir().unwrap();
    let page = write_page(dir.path(), PAGE);

    bin()
        .env("HOME", dir.path())
        .arg("report")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("Febbraio 2026"))
        .stdout(predicate::str::contains("150.00"));
}

#[test]
fn test_report_without_months_says_so() {
    let dir = tempdir().unwrap();
    let page = write_page(dir.path(), "<html><body><p>nothing here</p></body></html>");

    bin()
        .env("HOME", dir.path())
        .arg("report")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("No months found on the page."));
}

#[test]
fn test_report_renders_nan_for_garbage_amounts() {
    let dir = tempdir().unwrap();
    let html = PAGE.replace("150.00", "abc");
    let page = write_page(dir.path(), &html);

    bin()
        .env("HOME", dir.path())
        .arg("report")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("NaN"));
}

#[test]
fn test_report_missing_table_fails() {
    let dir = tempdir().unwrap();
    let html = "<html><body><div id=\"mese_2\">Gennaio 2026</div></body></html>";
    let page = write_page(dir.path(), html);

    bin()
        .env("HOME", dir.path())
        .arg("report")
        .arg(&page)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("2"));
}

#[test]
fn test_report_missing_page_fails() {
    let dir = tempdir().unwrap();

    bin()
        .env("HOME", dir.path())
        .arg("report")
        .arg(dir.path().join("no_such_page.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_records_lists_reconciled_movements() {
    let dir = tempdir().unwrap();
    let page = write_page(dir.path(), PAGE);

    bin()
        .arg("records")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("Febbraio 2026 (id 1, 1 movimento)"))
        .stdout(predicate::str::contains("Giustizia-Trasferimento"))
        .stdout(predicate::str::contains("Camarilla"));
}

#[test]
fn test_records_month_filter() {
    let dir = tempdir().unwrap();
    let page = write_page(dir.path(), TWO_MONTH_PAGE);

    bin()
        .arg("records")
        .arg(&page)
        .arg("--month")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gennaio 2026"))
        .stdout(predicate::str::contains("Febbraio 2026").not());
}

#[test]
fn test_records_unknown_month_fails() {
    let dir = tempdir().unwrap();
    let page = write_page(dir.path(), PAGE);

    bin()
        .arg("records")
        .arg(&page)
        .arg("--month")
        .arg("9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("9"));
}

#[test]
fn test_export_writes_chronological_csv() {
    let dir = tempdir().unwrap();
    let page = write_page(dir.path(), TWO_MONTH_PAGE);
    let out = dir.path().join("out.csv");

    bin()
        .env("HOME", dir.path())
        .arg("export")
        .arg(&page)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let contents = fs::read_to_string(&out).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "mese,totale,influenze,passive,altro");
    assert_eq!(lines.next().unwrap(), "Gennaio 2026,30.00,0.00,0.00,30.00");
    assert_eq!(lines.next().unwrap(), "Febbraio 2026,150.00,150.00,0.00,0.00");
}

#[test]
fn test_categories_lists_builtin_terms() {
    let dir = tempdir().unwrap();

    bin()
        .env("HOME", dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Giustizia"))
        .stdout(predicate::str::contains("passive"));
}

#[test]
fn test_categories_write_creates_config() {
    let dir = tempdir().unwrap();

    bin()
        .env("HOME", dir.path())
        .arg("categories")
        .arg("--write")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let config = dir
        .path()
        .join(".config")
        .join("vcp-ledger")
        .join("categories.json");
    let contents = fs::read_to_string(config).unwrap();
    assert!(contents.contains("Giustizia"));
}

#[test]
fn test_custom_categories_reshape_report() {
    let dir = tempdir().unwrap();
    let page = write_page(dir.path(), PAGE);
    let config = dir.path().join("categories.json");
    fs::write(
        &config,
        r#"{ "influence": ["Dogana"], "passive": ["rendita"] }"#,
    )
    .unwrap();

    let out = dir.path().join("out.csv");
    bin()
        .arg("export")
        .arg(&page)
        .arg("--output")
        .arg(&out)
        .arg("--categories")
        .arg(&config)
        .assert()
        .success();

    // "Giustizia-Trasferimento" no longer matches, so influence drops to zero.
    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.contains("Febbraio 2026,150.00,0.00,0.00,150.00"));
}
