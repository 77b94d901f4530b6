//! Locale-fixed display formatting.
//!
//! All formatters follow en-US conventions and are total: malformed input
//! degrades to a documented fallback string rather than an error. The
//! pipeline never surfaces a formatting failure to its caller.

use chrono::NaiveDate;

use super::foundation::Percentage;

/// Formats an amount as currency with symbol, thousands grouping, and two
/// decimals, e.g. `"$1,234.56"`.
///
/// The currency code must be three uppercase ASCII letters; anything else
/// falls back to USD. Non-finite amounts format as zero.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let safe_amount = if amount.is_finite() { amount } else { 0.0 };
    let code = if is_valid_currency_code(currency) {
        currency
    } else {
        "USD"
    };

    let negative = safe_amount < 0.0;
    let cents = (safe_amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let grouped = group_thousands(whole);

    let sign = if negative { "-" } else { "" };
    match currency_symbol(code) {
        Some(symbol) => format!("{sign}{symbol}{grouped}.{fraction:02}"),
        None => format!("{sign}{code} {grouped}.{fraction:02}"),
    }
}

/// Formats a value as a percentage clamped to [0, 100] with a fixed number
/// of decimals, e.g. `format_percentage(71.43, 1) == "71.4%"`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    Percentage::new(value).format(decimals)
}

/// Formats an ISO `YYYY-MM-DD` date as short month-day-year
/// ("Jan 15, 2024").
///
/// Empty input yields `"N/A"`, unparseable input yields `"Invalid Date"`.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "N/A".to_string();
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

/// Returns the value if finite, otherwise the fallback.
pub fn safe_number(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Divides two numbers, returning the fallback when the denominator is
/// zero or either operand is non-finite.
pub fn safe_divide(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 || !numerator.is_finite() || !denominator.is_finite() {
        return fallback;
    }
    numerator / denominator
}

/// Truncates text to `max_len` characters, appending an ellipsis when
/// anything was cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}...", cut.trim_end())
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn is_valid_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        "JPY" => Some("\u{a5}"),
        _ => None,
    }
}

fn group_thousands(mut value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    let mut out = value.to_string();
    for group in groups.iter().rev() {
        out.push(',');
        out.push_str(group);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_formats_with_symbol_and_grouping() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
        assert_eq!(format_currency(1_000_000.0, "USD"), "$1,000,000.00");
    }

    #[test]
    fn currency_invalid_code_falls_back_to_usd() {
        assert_eq!(format_currency(15.0, "usd"), "$15.00");
        assert_eq!(format_currency(15.0, "DOLLARS"), "$15.00");
        assert_eq!(format_currency(15.0, ""), "$15.00");
    }

    #[test]
    fn currency_non_finite_amount_formats_as_zero() {
        assert_eq!(format_currency(f64::NAN, "usd"), "$0.00");
        assert_eq!(format_currency(f64::INFINITY, "USD"), "$0.00");
    }

    #[test]
    fn currency_unknown_valid_code_uses_code_prefix() {
        assert_eq!(format_currency(9.99, "CHF"), "CHF 9.99");
    }

    #[test]
    fn currency_handles_negative_amounts() {
        assert_eq!(format_currency(-1234.56, "USD"), "-$1,234.56");
    }

    #[test]
    fn percentage_clamps_before_formatting() {
        assert_eq!(format_percentage(150.0, 1), "100.0%");
        assert_eq!(format_percentage(-5.0, 1), "0.0%");
        assert_eq!(format_percentage(71.43, 1), "71.4%");
    }

    #[test]
    fn percentage_non_finite_formats_as_zero() {
        assert_eq!(format_percentage(f64::NAN, 2), "0.00%");
    }

    #[test]
    fn date_formats_short_month_day_year() {
        assert_eq!(format_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_date("2024-12-31"), "Dec 31, 2024");
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
    }

    #[test]
    fn date_empty_yields_not_available() {
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("   "), "N/A");
    }

    #[test]
    fn date_unparseable_yields_invalid_date() {
        assert_eq!(format_date("soon"), "Invalid Date");
        assert_eq!(format_date("2024-13-45"), "Invalid Date");
    }

    #[test]
    fn safe_divide_guards_zero_denominator() {
        assert_eq!(safe_divide(10.0, 0.0, 0.0), 0.0);
        assert_eq!(safe_divide(10.0, 4.0, 0.0), 2.5);
        assert_eq!(safe_divide(f64::NAN, 4.0, -1.0), -1.0);
    }

    #[test]
    fn truncate_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
    }

    #[test]
    fn capitalize_normalizes_case() {
        assert_eq!(capitalize("high"), "High");
        assert_eq!(capitalize("IN-PROGRESS"), "In-progress");
        assert_eq!(capitalize(""), "");
    }
}
