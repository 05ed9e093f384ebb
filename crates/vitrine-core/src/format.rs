//! Display formatting helpers: grouped amounts, unit rates, long-form dates.
//!
//! Pure functions over already-derived values. Parse failures never escape;
//! callers fall back to the raw input string.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats a converted amount with exactly 2 decimal digits and comma
/// thousands separators: 1234567.891 → "1,234,567.89".
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), "00"),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Formats the unit exchange rate to 4 decimal places.
pub fn format_unit_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}

/// Parses an ISO-ish date string: RFC 3339, then a handful of common
/// date/datetime layouts. Returns None when nothing matches.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    for layout in ["%Y-%m-%d", "%Y/%m/%d", "%d %b %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, layout) {
            return Some(d);
        }
    }
    None
}

/// Renders a date as "Month Day, Year" (e.g. "May 14, 2024").
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_two_decimals() {
        assert_eq!(format_grouped(1234567.891), "1,234,567.89");
        assert_eq!(format_grouped(7.0), "7.00");
        assert_eq!(format_grouped(0.5), "0.50");
        assert_eq!(format_grouped(999.999), "1,000.00");
    }

    #[test]
    fn groups_negative_values() {
        assert_eq!(format_grouped(-1234.5), "-1,234.50");
        assert_eq!(format_grouped(-12.0), "-12.00");
    }

    #[test]
    fn unit_rate_is_four_decimals() {
        assert_eq!(format_unit_rate(3.5), "3.5000");
        assert_eq!(format_unit_rate(0.92), "0.9200");
    }

    #[test]
    fn parses_common_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(parse_flexible_date("2024-05-14"), Some(expected));
        assert_eq!(parse_flexible_date("2024-05-14T09:30:00Z"), Some(expected));
        assert_eq!(parse_flexible_date("2024-05-14T09:30:00"), Some(expected));
        assert_eq!(parse_flexible_date("2024/05/14"), Some(expected));
        assert_eq!(parse_flexible_date("14 May 2024"), Some(expected));
    }

    #[test]
    fn rejects_non_dates() {
        assert_eq!(parse_flexible_date("not a date"), None);
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("2024-13-40"), None);
    }

    #[test]
    fn long_date_has_month_name_and_unpadded_day() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(format_long_date(d), "May 14, 2024");
        let d2 = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        assert_eq!(format_long_date(d2), "January 3, 2023");
    }
}
