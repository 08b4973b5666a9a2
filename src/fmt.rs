/// Round to cents. The only rounding in the pipeline; NaN stays NaN.
pub fn round2(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

/// Plain fixed-point rendering with 2 decimals, as the page scripts printed
/// sums. NaN renders literally so a contaminated month is visible.
pub fn amount(val: f64) -> String {
    if val.is_nan() {
        return "NaN".to_string();
    }
    format!("{val:.2}")
}

/// Format a float as a euro amount with thousands separators: €1,234.56
pub fn money(val: f64) -> String {
    if val.is_nan() {
        return "NaN".to_string();
    }
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-€{with_commas}.{dec_part}")
    } else {
        format!("€{with_commas}.{dec_part}")
    }
}
