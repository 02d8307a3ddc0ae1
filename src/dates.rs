//! Project Dates
//!
//! Turns the free-form `date` strings of the portfolio document into sort keys.
//!
//! Accepted (month names are case-insensitive, full or abbreviated):
//! - `2025-04-17`
//! - `2025-04` (first of the month)
//! - `2025` (first of January)
//! - `Dec 2024`, `December 2024` (first of the month)
//! - `January 31st 2026`, `January 31, 2026`
//!
//! Anything else is invalid. Invalid keys order before every valid date.

use std::str::FromStr;

use chrono::{Month, NaiveDate};

/// Sort key for a project date; `None` is the invalid key
pub type DateKey = Option<NaiveDate>;

/// Parse a date string into its sort key
pub fn parse_date(raw: &str) -> DateKey {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with(|c: char| c.is_ascii_digit()) {
        parse_numeric(raw)
    } else {
        parse_named_month(raw)
    }
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
fn parse_numeric(raw: &str) -> DateKey {
    // chrono accepts unpadded fields, so pin the layout first
    let well_formed = raw.char_indices().all(|(i, c)| match i {
        4 | 7 => c == '-',
        _ => c.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }

    let full = match raw.len() {
        4 => format!("{raw}-01-01"),
        7 => format!("{raw}-01"),
        10 => raw.to_string(),
        _ => return None,
    };
    NaiveDate::parse_from_str(&full, "%Y-%m-%d").ok()
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// `Mon YYYY`, `Month YYYY` or `Month D[st|nd|rd|th][,] YYYY`
fn parse_named_month(raw: &str) -> DateKey {
    let words: Vec<&str> = raw.split_whitespace().collect();
    match words.as_slice() {
        [month, year] => NaiveDate::from_ymd_opt(parse_year(year)?, month_number(month)?, 1),
        [month, day, year] => {
            let day = strip_ordinal_suffix(day.trim_end_matches(','));
            if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            NaiveDate::from_ymd_opt(parse_year(year)?, month_number(month)?, day.parse().ok()?)
        }
        _ => None,
    }
}

fn strip_ordinal_suffix(day: &str) -> &str {
    ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| day.strip_suffix(suffix))
        .unwrap_or(day)
}

/// Full or three-letter month name, any case
fn month_number(word: &str) -> Option<u32> {
    Month::from_str(word.trim_end_matches('.'))
        .ok()
        .map(|m| m.number_from_month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> DateKey {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_iso_formats() {
        assert_eq!(parse_date("2025-04-17"), ymd(2025, 4, 17));
        assert_eq!(parse_date("2025-04"), ymd(2025, 4, 1));
        assert_eq!(parse_date("2025"), ymd(2025, 1, 1));
        assert_eq!(parse_date("  2026-01 "), ymd(2026, 1, 1));
    }

    #[test]
    fn test_month_name_formats() {
        assert_eq!(parse_date("Dec 2024"), ymd(2024, 12, 1));
        assert_eq!(parse_date("jun 2025"), ymd(2025, 6, 1));
        assert_eq!(parse_date("September 2025"), ymd(2025, 9, 1));
        assert_eq!(parse_date("January 31st 2026"), ymd(2026, 1, 31));
        assert_eq!(parse_date("March 2, 2025"), ymd(2025, 3, 2));
        assert_eq!(parse_date("Feb 22nd 2025"), ymd(2025, 2, 22));
    }

    #[test]
    fn test_month_names_any_case() {
        assert_eq!(parse_date("DEC 2024"), ymd(2024, 12, 1));
        assert_eq!(parse_date("december 2024"), ymd(2024, 12, 1));
        assert_eq!(parse_date("May 2025"), ymd(2025, 5, 1));
        assert_eq!(parse_date("Sept. 2025"), None);
    }

    #[test]
    fn test_numeric_layout_is_strict() {
        assert_eq!(parse_date("2025-04-7"), None);
        assert_eq!(parse_date("2025/04/07"), None);
        assert_eq!(parse_date("20250407"), None);
        assert_eq!(parse_date("2025-04-07x"), None);
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2025-13"), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("25-04"), None);
        assert_eq!(parse_date("2025-4"), None);
        assert_eq!(parse_date("Ju 2025"), None);
        assert_eq!(parse_date("Janu 2025"), None);
        assert_eq!(parse_date("February 30th 2025"), None);
    }

    #[test]
    fn test_invalid_orders_before_valid() {
        assert!(parse_date("garbage") < parse_date("0001-01-01"));
        assert!(parse_date("Dec 2024") < parse_date("2025-04"));
        assert!(parse_date("2025-04") < parse_date("2025-04-02"));
    }
}
