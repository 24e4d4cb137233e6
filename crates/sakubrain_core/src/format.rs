//! Display formatting for money and change values.
//!
//! # Invariants
//! - Amounts always render with exactly two decimals.
//! - The integer part is grouped by thousands with `,`.
//! - Negative amounts place the sign before the currency symbol: `-$1,234.50`,
//!   never `$-1,234.50`. Signed change strings (`-$5.67`) read the same way.

/// Formats an amount as `$1,234.56` (or `-$1,234.56`).
pub fn format_currency(value: f64) -> String {
    let sign = if is_negative_cents(value) { "-" } else { "" };
    format!("{sign}${}", group_two_decimals(value.abs()))
}

/// Formats an amount with an explicit sign: `+$1,234.56` / `-$1,234.56`.
pub fn format_signed_currency(value: f64) -> String {
    if is_negative_cents(value) {
        format_currency(value)
    } else {
        format!("+{}", format_currency(value))
    }
}

/// Formats a price change as `+1.25` / `-2.32`, with `%` when `is_percent`.
pub fn format_change(value: f64, is_percent: bool) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    let suffix = if is_percent { "%" } else { "" };
    format!("{sign}{value:.2}{suffix}")
}

fn is_negative_cents(value: f64) -> bool {
    value < 0.0 && format!("{:.2}", value.abs()) != "0.00"
}

fn group_two_decimals(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped}.{fraction}")
}
