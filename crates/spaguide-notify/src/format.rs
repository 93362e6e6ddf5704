//! Display formatting for notices: Rupiah amounts and long-form dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Format an amount as Indonesian Rupiah with dot thousands separators,
/// e.g. `Rp 1.250.000`. Amounts are rounded to whole Rupiah.
#[must_use]
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("Rp {sign}{grouped}")
}

/// Long-form English date, e.g. `Saturday, March 14, 2026`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
