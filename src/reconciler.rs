use crate::models::{Movement, RawRow, TransactionRecord};

// ---------------------------------------------------------------------------
// Amount parsing
// ---------------------------------------------------------------------------

/// Parse the leading numeric prefix of an amount cell: optional sign,
/// digits, one decimal point, optional exponent. Trailing garbage is
/// ignored; a cell with no numeric prefix parses to NaN, which then
/// contaminates every sum the record takes part in. This mirrors how the
/// page's own scripts read the cells, so a malformed month is loudly NaN
/// instead of silently wrong.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let mut end = 0;
    let mut digits = false;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        digits = true;
        end = i;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        if digits {
            end = i;
        }
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            digits = true;
            end = i;
        }
    }
    if digits && i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let mut exp_digits = false;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
            exp_digits = true;
        }
        if exp_digits {
            end = j;
        }
    }
    if !digits {
        return f64::NAN;
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// Row reconciliation
// ---------------------------------------------------------------------------

/// Rebuild the genuine transaction list from a raw movement table.
///
/// The page interleaves each transaction row with a descriptor row below it
/// and prepends its own header as row 0, so the even-indexed rows (0, 2,
/// 4, …) are all noise. Every even row past the header donates its
/// `data_operazione` text to the record above it as `descrizione`, then all
/// even rows are dropped. Order is preserved. A trailing record with no
/// descriptor row under it keeps `descrizione` unset; nothing here errors
/// on malformed cells.
pub fn reconcile(rows: Vec<RawRow>) -> Vec<TransactionRecord> {
    let mut descriptions: Vec<Option<String>> = vec![None; rows.len()];
    for i in (2..rows.len()).step_by(2) {
        descriptions[i - 1] = Some(rows[i].data_operazione.clone());
    }

    rows.into_iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .map(|(i, row)| {
            let movement = if !row.entrate.is_empty() {
                Movement::Income(parse_float(&row.entrate))
            } else {
                Movement::Expense(parse_float(&row.uscite))
            };
            TransactionRecord {
                data_operazione: row.data_operazione,
                entrate: row.entrate,
                uscite: row.uscite,
                erogante: row.erogante,
                beneficiario: row.beneficiario,
                descrizione: descriptions[i].take(),
                movement,
            }
        })
        .collect()
}
