//! Date parsing and short-form formatting for table cells.
//!
//! The backend sends dates either as `D-Mon-YYYY` (`4-Jul-2025`) or in one of
//! a handful of ISO, RFC 2822 and US `MM/DD/YYYY` layouts. Parsing is
//! lenient: anything that does not parse is simply "not a date" and callers
//! fall back to string handling.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Value, json};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
];

/// Parses a textual date, trying `D-Mon-YYYY` first.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    parse_day_month_year(text).or_else(|| parse_generic(text))
}

/// Interprets a JSON value as a date. Numbers are epoch milliseconds.
pub fn date_of(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date(s),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
        }
        _ => None,
    }
}

/// Formats a date as `D-Mon-YYYY`. Unparseable input comes back unchanged.
pub fn format_date_short(raw: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format("%-d-%b-%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Builds a `{ raw, formatted }` value from a backend date string.
pub fn shaped_date(raw: &str) -> Value {
    json!({ "raw": raw, "formatted": format_date_short(raw) })
}

fn parse_day_month_year(text: &str) -> Option<NaiveDateTime> {
    let mut parts = text.split('-');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let month = month.to_ascii_lowercase();
    let month0 = MONTHS.iter().position(|m| *m == month)?;
    let day: u32 = day.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, day)?.and_hms_opt(0, 0, 0)
}

fn parse_generic(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) =
        DateTime::parse_from_rfc3339(text).or_else(|_| DateTime::parse_from_rfc2822(text))
    {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
