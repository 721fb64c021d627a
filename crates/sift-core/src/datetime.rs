//! Order date parsing.
//!
//! Source files come from producers this system does not control, so dates
//! arrive in several spellings. Rather than guessing a locale, the parser
//! tries a fixed list of formats in priority order and takes the first
//! complete match. The order matters: `"01-02-2025"` is only accepted by the
//! day-first pattern, while `"2025-01-02"` is taken by the ISO pattern before
//! anything else gets a chance.
//!
//! # Accepted formats, in priority order
//!
//! | # | pattern             | example               |
//! |---|---------------------|-----------------------|
//! | 1 | `%Y-%m-%d`          | `2025-03-09`          |
//! | 2 | `%m/%d/%Y`          | `03/09/2025`          |
//! | 3 | `%Y/%m/%d`          | `2025/03/09`          |
//! | 4 | `%d-%m-%Y`          | `09-03-2025`          |
//! | 5 | `%Y-%m-%d %H:%M:%S` | `2025-03-09 14:05:00` |
//!
//! Date-only values resolve to midnight. The year is always exactly four
//! digits: `chrono` alone would read `25-06-01` as the year 25, so a value
//! whose year field is shorter, longer or signed is rejected.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// One accepted date spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    /// `chrono` format string.
    pub pattern: &'static str,
    /// Whether the pattern carries a time of day.
    pub has_time: bool,
    /// Position of `%Y` among the separator-delimited date fields.
    pub year_field: usize,
}

impl DateFormat {
    const fn date(pattern: &'static str, year_field: usize) -> Self {
        Self {
            pattern,
            has_time: false,
            year_field,
        }
    }

    const fn datetime(pattern: &'static str, year_field: usize) -> Self {
        Self {
            pattern,
            has_time: true,
            year_field,
        }
    }

    /// Parse `value` with this format only; the whole input must match.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        if !self.has_four_digit_year(value) {
            return None;
        }
        if self.has_time {
            NaiveDateTime::parse_from_str(value, self.pattern).ok()
        } else {
            NaiveDate::parse_from_str(value, self.pattern)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        }
    }

    fn has_four_digit_year(&self, value: &str) -> bool {
        let date_part = value.split_whitespace().next().unwrap_or_default();
        date_part
            .split(['-', '/'])
            .nth(self.year_field)
            .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
    }
}

/// Accepted formats in the order they are attempted.
pub const DATE_FORMATS: [DateFormat; 5] = [
    DateFormat::date("%Y-%m-%d", 0),
    DateFormat::date("%m/%d/%Y", 2),
    DateFormat::date("%Y/%m/%d", 0),
    DateFormat::date("%d-%m-%Y", 2),
    DateFormat::datetime("%Y-%m-%d %H:%M:%S", 0),
];

/// No accepted format matched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date format: {value:?}")]
pub struct DateParseError {
    pub value: String,
}

/// Parse an order date, trying [`DATE_FORMATS`] in order.
///
/// Surrounding whitespace is ignored. Empty input is an error like any
/// other unrecognized value.
pub fn parse_order_date(value: &str) -> Result<NaiveDateTime, DateParseError> {
    parse_with_format(value)
        .map(|(parsed, _)| parsed)
        .ok_or_else(|| DateParseError {
            value: value.trim().to_string(),
        })
}

/// Like [`parse_order_date`], also reporting which format matched.
pub fn parse_with_format(value: &str) -> Option<(NaiveDateTime, &'static DateFormat)> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| format.parse(trimmed).map(|parsed| (parsed, format)))
}
