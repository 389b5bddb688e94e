//! Fixed-point formatting of tally values for display.

/// `count` as a percentage of `total`, fixed to one decimal place.
///
/// Rounds half up on the tenths digit. A zero total yields `"0.0"`.
/// Percentages are rounded independently per option and need not sum to
/// exactly 100.0.
pub fn percentage_of(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    // Tenths of a percent, round half up: round(count / total * 1000).
    let tenths = (2000 * u128::from(count) + u128::from(total)) / (2 * u128::from(total));
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Integer with grouping commas every three digits, e.g. 1234 -> "1,234".
pub fn format_count(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
