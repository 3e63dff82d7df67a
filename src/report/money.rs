//! Currency and percentage formatting.

/// Format as dollars with thousands separators and two decimals (`$1,234.50`).
///
/// Negative amounts put the sign before the dollar sign (`-$12.00`). Rounding to
/// cents happens before grouping, so `999.999` becomes `$1,000.00`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value.is_sign_negative() && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Format a rate fraction as a percentage with two decimals (`0.0519` -> `5.19%`).
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn group_thousands(digits: &str) -> String {
    // Non-numeric output like `inf` / `NaN` passes through untouched.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
