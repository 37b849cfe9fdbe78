//! Coercion of spreadsheet cells into dates and amounts.

use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::types::normalize_label;

/// Full date formats tried in order
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d", // ISO: 2025-01-01
    "%d/%m/%Y", // 01/01/2025
    "%d-%m-%Y", // 01-01-2025
    "%d.%m.%Y", // 01.01.2025
    "%Y/%m/%d", // 2025/01/01
];

/// Date-time formats tried after the plain dates
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Month name prefixes in Spanish and English
const MONTH_PREFIXES: [(&str, u32); 16] = [
    ("ene", 1),
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("abr", 4),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("ago", 8),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dic", 12),
    ("dec", 12),
];

/// Latest serial accepted (9999-12-31)
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Coerce a cell into a date, `None` when the cell is not a date
#[must_use]
pub fn coerce_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|dt| dt.date()),
        Data::DateTimeIso(s) | Data::String(s) => parse_date_string(s),
        Data::Float(serial) => from_excel_serial(*serial),
        Data::Int(serial) => from_excel_serial(*serial as f64),
        _ => None,
    }
}

/// Coerce a cell into a non-negative amount, `None` when missing or invalid
#[must_use]
pub fn coerce_amount(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(value) => *value,
        Data::Int(value) => *value as f64,
        Data::String(s) => parse_amount(s)?,
        _ => return None,
    };

    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Convert a 1900-system spreadsheet serial to a date
#[must_use]
pub fn from_excel_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    // Day zero is 1899-12-30 once the phantom 1900-02-29 is accounted for
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Parse a date written as text
#[must_use]
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    parse_month_year(s)
}

/// Parse month-and-year text such as `03/2025`, `2025-03`, `ene-25` or `Marzo 2025`
fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let normalized = normalize_label(&s.replace('/', " "));
    let parts: Vec<&str> = normalized.split(' ').collect();
    let [first, second] = parts.as_slice() else {
        return None;
    };

    let (month_part, year_part) = if first.len() == 4 && first.chars().all(|c| c.is_ascii_digit()) {
        (*second, *first)
    } else {
        (*first, *second)
    };

    let month = match month_part.parse::<u32>() {
        Ok(month) => month,
        Err(_) => MONTH_PREFIXES
            .iter()
            .find(|(prefix, _)| month_part.starts_with(prefix))
            .map(|(_, month)| *month)?,
    };

    let year: i32 = year_part.parse().ok()?;
    let year = match year_part.len() {
        2 => 2000 + year,
        4 => year,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Parse an amount written as text, accepting `1.234,56` and `1234.56`
pub(crate) fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ' ' | '\u{a0}'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    normalized.parse().ok()
}
