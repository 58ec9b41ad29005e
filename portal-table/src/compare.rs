//! Typed value comparison for table sorting.
//!
//! Comparison is fail-soft: values that cannot be read as the declared type
//! sort after those that can, and when neither side can be read the pair is
//! compared as text. Nothing here panics on messy backend data.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dates::date_of;
use crate::record::{display_string, sort_value};

/// How a column's values are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    Date,
    Number,
    /// Also the landing spot for unknown sort type names.
    #[default]
    #[serde(other)]
    String,
}

impl SortType {
    /// Guesses a sort type from a column key.
    ///
    /// Keys mentioning a date or time sort as dates; keys naming an amount,
    /// total, price, quantity or count sort as numbers; everything else sorts
    /// as text.
    pub fn infer(key: &str) -> Self {
        let key = key.to_lowercase();
        if key.contains("date") || key.contains("time") {
            Self::Date
        } else if ["amount", "total", "price", "quantity", "count"]
            .iter()
            .any(|hint| key.contains(hint))
        {
            Self::Number
        } else {
            Self::String
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Applies this direction to an ascending ordering.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Compares two field values under `sort_type`, then applies `order`.
///
/// A missing or `null` value always ranks after a present one before the
/// direction is applied, so it lands last in ascending order and first in
/// descending order. Shaped `{ raw, formatted }` values compare on `raw`.
pub fn compare(
    a: Option<&Value>,
    b: Option<&Value>,
    sort_type: SortType,
    order: SortOrder,
) -> Ordering {
    let a = a.and_then(sort_value).filter(|v| !v.is_null());
    let b = b.and_then(sort_value).filter(|v| !v.is_null());

    let ordering = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match sort_type {
            SortType::Date => compare_dates(a, b),
            SortType::Number => compare_numbers(a, b),
            SortType::String => locale_compare(&display_string(a), &display_string(b)),
        },
    };
    order.apply(ordering)
}

fn compare_dates(a: &Value, b: &Value) -> Ordering {
    match (date_of(a), date_of(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => locale_compare(&display_string(a), &display_string(b)),
    }
}

fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    match (number_of(a), number_of(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => locale_compare(&display_string(a), &display_string(b)),
    }
}

/// Reads a value as a finite float. Strings use their leading numeric prefix
/// (`"12.5 TEU"` reads as `12.5`).
pub(crate) fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_float(s),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Case-insensitive, digit-aware text comparison (`"2"` before `"10"`).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().flat_map(char::to_lowercase).peekable();
    let mut right = b.chars().flat_map(char::to_lowercase).peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digits(&mut left);
                let run_b = take_digits(&mut right);
                match compare_digit_runs(&run_a, &run_b) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                match x.cmp(&y) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<impl Iterator<Item = char>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
