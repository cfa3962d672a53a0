// src/core/locale.rs
//! Locale-dependent text. Only German is supported.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::types::PersonalData;

pub trait DateFormatter {
    /// Display form of a calendar date entered in the form.
    fn format_date(&self, raw: &str) -> String;
}

/// `de-DE` style dates: `1.1.1990`, no zero padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanDateFormatter;

impl DateFormatter for GermanDateFormatter {
    fn format_date(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match parse_calendar_date(trimmed) {
            Some(date) => format!("{}.{}.{}", date.day(), date.month(), date.year()),
            None => trimmed.to_string(),
        }
    }
}

fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
}

/// Birth date and place joined by `", "`; either part may be missing.
pub fn birth_info(personal: &PersonalData, formatter: &impl DateFormatter) -> String {
    let date = if personal.birth_date.is_empty() {
        String::new()
    } else {
        formatter.format_date(&personal.birth_date)
    };

    match (date.is_empty(), personal.birth_place.is_empty()) {
        (true, true) => String::new(),
        (false, true) => date,
        (true, false) => personal.birth_place.clone(),
        (false, false) => format!("{}, {}", date, personal.birth_place),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal(date: &str, place: &str) -> PersonalData {
        PersonalData {
            birth_date: date.to_string(),
            birth_place: place.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_german_format_has_no_padding() {
        let formatter = GermanDateFormatter;
        assert_eq!(formatter.format_date("1990-01-01"), "1.1.1990");
        assert_eq!(formatter.format_date("1985-11-23"), "23.11.1985");
        assert_eq!(formatter.format_date("07.03.2001"), "7.3.2001");
        assert_eq!(formatter.format_date("2001-03-07T10:00:00Z"), "7.3.2001");
    }

    #[test]
    fn test_unparseable_date_is_shown_verbatim() {
        assert_eq!(GermanDateFormatter.format_date(" Sommer 1990 "), "Sommer 1990");
    }

    #[test]
    fn test_birth_info_combinations() {
        let formatter = GermanDateFormatter;
        assert_eq!(birth_info(&personal("1990-01-01", ""), &formatter), "1.1.1990");
        assert_eq!(birth_info(&personal("", "Berlin"), &formatter), "Berlin");
        assert_eq!(
            birth_info(&personal("1990-01-01", "Berlin"), &formatter),
            "1.1.1990, Berlin"
        );
        assert_eq!(birth_info(&personal("", ""), &formatter), "");
    }
}
