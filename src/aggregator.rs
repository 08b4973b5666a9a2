use crate::fmt::round2;
use crate::models::TransactionRecord;

/// Which records take part in a sum: all of them, or only those whose
/// reconstructed description contains one of the given substrings.
pub enum CategoryFilter<'a> {
    All,
    AnyOf(&'a [String]),
}

impl CategoryFilter<'_> {
    /// Case-insensitive substring match, the way the page's free-text
    /// descriptors are written ("Giustizia-Trasferimento" matches
    /// "Giustizia"). A record that never got a description matches no
    /// substring filter.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            Self::All => true,
            Self::AnyOf(terms) => {
                let Some(descrizione) = &record.descrizione else {
                    return false;
                };
                let desc_upper = descrizione.to_uppercase();
                terms
                    .iter()
                    .any(|term| desc_upper.contains(&term.to_uppercase()))
            }
        }
    }
}

/// Net sum of the matching records, rounded to cents.
///
/// Income and expense amounts are both added, never subtracted; that is the
/// accumulation rule the page's totals have always used, so a month's total
/// grows with activity rather than tracking profit. A NaN amount (malformed
/// cell) makes the whole sum NaN.
pub fn net_sum(records: &[TransactionRecord], filter: &CategoryFilter) -> f64 {
    let mut sum = 0.0;
    for record in records {
        if filter.matches(record) {
            sum += record.movement.amount();
        }
    }
    round2(sum)
}
