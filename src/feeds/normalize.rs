//! Helpers that coerce loosely-typed feed values into display strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Formats a whole amount with thousands separators, e.g. `€140,000`
pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{}{}", currency, group_thousands(amount.abs().round() as u64))
}

/// Formats a surface in square meters, e.g. `120 m²`
pub fn format_size(square_meters: f64) -> String {
    format!("{} m²", square_meters.abs().round() as u64)
}

/// Feed prices arrive either preformatted or as bare numbers
pub fn price_display(raw: &str, currency: &str) -> String {
    let raw = raw.trim();
    match parse_number(raw) {
        Some(amount) => format_price(amount, currency),
        None => raw.to_string(),
    }
}

pub fn size_display(raw: &str) -> String {
    let raw = raw.trim();
    match parse_number(raw) {
        Some(square_meters) => format_size(square_meters),
        None => raw.to_string(),
    }
}

/// Parses a plain decimal number, rejecting empty and non-finite input
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Leading run of digits, so "3 beds" reads as 3
pub fn parse_count(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Normalizes a listing date to `YYYY-MM-DD`
///
/// Unparseable dates are kept verbatim; the field is informational only.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return datetime.date().format("%Y-%m-%d").to_string();
    }

    if !raw.is_empty() {
        debug!("Keeping unrecognized listing date as-is: {}", raw);
    }
    raw.to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prices_with_separators() {
        assert_eq!(format_price(140000.0, "€"), "€140,000");
        assert_eq!(format_price(1_250_000.4, "€"), "€1,250,000");
        assert_eq!(format_price(950.0, "$"), "$950");
        assert_eq!(format_price(0.0, "€"), "€0");
    }

    #[test]
    fn keeps_preformatted_prices() {
        assert_eq!(price_display("€164,900", "€"), "€164,900");
        assert_eq!(price_display(" 215000 ", "€"), "€215,000");
        assert_eq!(price_display("Consultar", "€"), "Consultar");
    }

    #[test]
    fn sizes_and_counts() {
        assert_eq!(size_display("95"), "95 m²");
        assert_eq!(size_display("120 m²"), "120 m²");
        assert_eq!(parse_count("3 beds"), Some(3));
        assert_eq!(parse_count("beds"), None);
    }

    #[test]
    fn normalizes_dates() {
        assert_eq!(normalize_date("2024-01-01"), "2024-01-01");
        assert_eq!(normalize_date("2024-02-15T10:30:00+01:00"), "2024-02-15");
        assert_eq!(normalize_date("2024-03-01 08:00:00"), "2024-03-01");
        assert_eq!(normalize_date("last week"), "last week");
    }
}
