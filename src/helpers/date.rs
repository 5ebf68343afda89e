//! Date helper functions

use chrono::NaiveDate;

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format date in full format (like "January 15, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each family
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // A literal `%` must not reach chrono as a specifier
    let mut result = format.replace('%', "%%");

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&date(), "YYYY/MM/DD"), "2024/01/05");
        assert_eq!(format_date(&date(), "MMM DD, YYYY"), "Jan 05, 2024");
        assert_eq!(format_date(&date(), "dddd"), "Friday");
    }

    #[test]
    fn test_full_date() {
        assert_eq!(full_date(&date()), "January 5, 2024");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("MMMM YYYY"), "%B %Y");
        assert_eq!(moment_to_chrono_format("YYYY %Q"), "%Y %%Q");
    }

    #[test]
    fn test_stray_percent_is_literal() {
        assert_eq!(format_date(&date(), "YYYY %Q"), "2024 %Q");
        assert_eq!(format_date(&date(), "100% DD"), "100% 05");
    }
}
