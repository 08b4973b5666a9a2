use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{LedgerError, Result};
use crate::models::{MonthEntry, RawRow};
use crate::reports::RowExtractor;

/// Month headers on the euro sheet are elements with ids like `mese_1`,
/// `mese_2`, … in display order (most recent month first); each month's
/// movement table carries the matching id `movimenti_<n>`.
pub const MONTH_HEADER_PREFIX: &str = "mese_";
pub const TABLE_ID_PREFIX: &str = "movimenti_";

static MONTH_HEADER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("[id^='{MONTH_HEADER_PREFIX}']"))
        .expect("valid month header selector")
});

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("table[id^='{TABLE_ID_PREFIX}']"))
        .expect("valid movement table selector")
});

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid row selector"));

static MONTH_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+$").expect("valid month id regex"));

/// Concatenated text of an element, trimmed at the ends the way the page's
/// own scripts read cell text.
fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// A parsed snapshot of the euro-sheet page. Parsed once per run; every
/// read after that is in-memory.
pub struct LedgerPage {
    doc: Html,
}

impl LedgerPage {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let html = std::fs::read_to_string(path)?;
        Ok(Self::parse(&html))
    }

    /// Discover the displayed months in DOM order. The month id is the
    /// numeric suffix of the header element id; an element with the prefix
    /// but no numeric suffix is not a month header and is skipped. Zero
    /// headers is a valid (empty) result, not an error.
    pub fn months(&self) -> Vec<MonthEntry> {
        self.doc
            .select(&MONTH_HEADER_SELECTOR)
            .filter_map(|element| {
                let id_attr = element.value().id()?;
                let id = MONTH_ID_RE.find(id_attr)?.as_str().to_string();
                Some(MonthEntry {
                    id,
                    label: text_of(element),
                })
            })
            .collect()
    }

    fn table_for(&self, month_id: &str) -> Option<ElementRef<'_>> {
        let wanted = format!("{TABLE_ID_PREFIX}{month_id}");
        self.doc
            .select(&TABLE_SELECTOR)
            .find(|table| table.value().id() == Some(wanted.as_str()))
    }
}

impl RowExtractor for LedgerPage {
    /// Every `tr` of the month's table becomes a RawRow, cells (`td` or
    /// `th`) mapped positionally onto the six column names. The table's own
    /// header row comes through as row 0 and hidden rows are not filtered;
    /// the reconciler depends on that row parity.
    fn raw_rows(&self, month_id: &str) -> Result<Vec<RawRow>> {
        let table = self
            .table_for(month_id)
            .ok_or_else(|| LedgerError::MissingTable(month_id.to_string()))?;

        Ok(table
            .select(&ROW_SELECTOR)
            .map(|row| {
                let cells = row
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|cell| {
                        let name = cell.value().name();
                        name == "td" || name == "th"
                    })
                    .map(text_of)
                    .collect();
                RawRow::from_cells(cells)
            })
            .collect())
    }
}
