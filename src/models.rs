/// One month header discovered on the page. `id` is the numeric suffix of
/// the header element id; `label` its trimmed display text.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthEntry {
    pub id: String,
    pub label: String,
}

/// One table row as rendered by the page, cells mapped positionally onto
/// the six fixed column names. Row 0 of every movement table repeats the
/// header cells as data; even-indexed rows carry a free-text descriptor in
/// `data_operazione` instead of a date.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub empty: String,
    pub data_operazione: String,
    pub entrate: String,
    pub uscite: String,
    pub erogante: String,
    pub beneficiario: String,
}

impl RawRow {
    /// Map positional cell text onto the column names. Short rows pad with
    /// empty strings; extra cells are dropped.
    pub fn from_cells(cells: Vec<String>) -> Self {
        let mut cells = cells.into_iter();
        Self {
            empty: cells.next().unwrap_or_default(),
            data_operazione: cells.next().unwrap_or_default(),
            entrate: cells.next().unwrap_or_default(),
            uscite: cells.next().unwrap_or_default(),
            erogante: cells.next().unwrap_or_default(),
            beneficiario: cells.next().unwrap_or_default(),
        }
    }
}

/// Direction of a movement, decided once during reconciliation: a non-empty
/// `entrate` cell makes an Income, anything else an Expense. The amount is
/// the parsed cell value and may be NaN for an unparsable cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    Income(f64),
    Expense(f64),
}

impl Movement {
    pub fn amount(&self) -> f64 {
        match self {
            Self::Income(v) | Self::Expense(v) => *v,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income(_))
    }
}

/// A genuine transaction row after reconciliation. `descrizione` comes from
/// the discarded descriptor row below it on the page; the last record of a
/// truncated table has none.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub data_operazione: String,
    pub entrate: String,
    pub uscite: String,
    pub erogante: String,
    pub beneficiario: String,
    pub descrizione: Option<String>,
    pub movement: Movement,
}

/// Reconciled records for one displayed month.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub id: String,
    pub label: String,
    pub records: Vec<TransactionRecord>,
}

/// One named series of per-month amounts, aligned with the month list it
/// was built against.
#[derive(Debug, Clone)]
pub struct CategorySeries {
    pub label: String,
    pub values: Vec<f64>,
}
