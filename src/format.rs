//! German locale formatting for amounts, dates, and plain decimals.
//!
//! Every document renders with the de-DE conventions: decimal comma,
//! thousands dot, trailing currency symbol, long-form dates
//! ("15. Juni 2024"). The output is plain `String`s with no locale
//! lookup at runtime.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::core::round_half_up;

/// Full German month names, indexed by `month0()`.
static GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Display symbols for the currency codes the formatter knows.
/// Sorted by code for binary search; unknown codes print the code itself.
static CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("CHF", "CHF"),
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("NOK", "kr"),
    ("SEK", "kr"),
    ("USD", "$"),
];

/// Look up the display symbol for an ISO 4217 code.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    CURRENCY_SYMBOLS
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| CURRENCY_SYMBOLS[i].1)
}

/// Format an amount the German way: half-up rounded to two decimal
/// places, decimal comma, thousands dot. `1234.5` → `"1.234,50"`.
pub fn format_number_de(amount: Decimal) -> String {
    let mut rounded = round_half_up(amount, 2);
    rounded.rescale(2);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + 4);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(frac_part);
    out
}

/// Format an amount with its currency symbol: `39.98` EUR → `"39,98 €"`.
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let symbol = currency_symbol(code).unwrap_or(code);
    format!("{} {}", format_number_de(amount), symbol)
}

/// Long-form German date: `"15. Juni 2024"`.
pub fn format_date_long(date: NaiveDate) -> String {
    let month = GERMAN_MONTHS[date.month0() as usize];
    format!("{}. {} {}", date.day(), month, date.year())
}

/// Plain decimal display with trailing zeros stripped: quantities and tax
/// rates print as entered (`2`, `2.5`, `19`), not locale-formatted.
pub fn format_plain(value: Decimal) -> String {
    value.normalize().to_string()
}
