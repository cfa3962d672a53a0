// src/core/date.rs
//! Loose date parsing for timeline ordering
//!
//! Dates in the form are free text (`03/2020`, `2020`, `heute`). They are
//! only ever compared with each other, so they are reduced to an ordinal
//! (milliseconds since the Unix epoch, UTC). Anything that cannot be read
//! becomes `0` and sorts as the oldest entry.

use chrono::{NaiveDate, Utc};

/// Opaque value for relative chronological comparison only.
pub type DateOrdinal = i64;

/// Substrings marking an entry as still ongoing.
pub const ONGOING_MARKERS: [&str; 3] = ["heute", "aktuell", "present"];

/// Current wall-clock instant as an ordinal.
pub fn now_ordinal() -> DateOrdinal {
    Utc::now().timestamp_millis()
}

pub fn is_ongoing(text: &str) -> bool {
    let lower = text.to_lowercase();
    ONGOING_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Parse against the current wall clock.
pub fn parse_date(text: &str) -> DateOrdinal {
    parse_date_at(text, now_ordinal())
}

/// Parse with an explicit value for "now", which ongoing entries resolve to.
pub fn parse_date_at(text: &str, now: DateOrdinal) -> DateOrdinal {
    if text.is_empty() {
        return 0;
    }
    if is_ongoing(text) {
        return now;
    }

    let parts: Vec<&str> = text.split(['/', '-', '.']).map(str::trim).collect();
    let ordinal = match parts.as_slice() {
        [month, year] if !month.is_empty() && !year.is_empty() => {
            leading_int(month)
                .zip(leading_int(year))
                .and_then(|(month, year)| month_start(year, month))
        }
        [year] if !year.is_empty() => leading_int(year).and_then(|year| month_start(year, 1)),
        _ => None,
    };

    ordinal.unwrap_or(0)
}

/// Integer prefix of a segment: `"2020abc"` reads as 2020, `"abc"` as nothing.
fn leading_int(segment: &str) -> Option<i64> {
    let trimmed = segment.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

/// First day of a 1-indexed month. Two-digit years belong to the 1900s and
/// months outside 1..=12 roll over into neighbouring years.
fn month_start(year: i64, month: i64) -> Option<DateOrdinal> {
    let year = if (0..=99).contains(&year) { 1900 + year } else { year };
    let total_months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;

    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;

    let midnight = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp_millis())
}
