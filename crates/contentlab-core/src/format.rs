//! Display formatting of dates and reading times

use chrono::NaiveDate;

/// Display form of dates, e.g. `05 Mar 2024`
const DISPLAY_DATE: &str = "%d %b %Y";

/// How a date field was filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// `YYYY-MM-DD` (optionally followed by a time) naming a real day
    Iso(NaiveDate),
    /// Looks like `YYYY-MM-DD` but names no real day (`2024-02-30`)
    InvalidIso,
    /// Anything else; taken as already formatted for display
    Display,
}

pub fn classify_date(raw: &str) -> DateInput {
    let raw = raw.trim();
    let Some(date_part) = iso_date_part(raw) else {
        return DateInput::Display;
    };
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => DateInput::Iso(date),
        Err(_) => DateInput::InvalidIso,
    }
}

fn iso_date_part(raw: &str) -> Option<&str> {
    let date = raw.get(..10)?;
    let shape_ok = date.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    let rest_ok = match raw.as_bytes().get(10) {
        None => true,
        Some(b'T') | Some(b' ') => true,
        Some(_) => false,
    };
    (shape_ok && rest_ok).then_some(date)
}

/// `2024-03-05` → `05 Mar 2024`; other input is returned trimmed
pub fn display_date(raw: &str) -> String {
    match classify_date(raw) {
        DateInput::Iso(date) => date.format(DISPLAY_DATE).to_string(),
        DateInput::InvalidIso | DateInput::Display => raw.trim().to_string(),
    }
}

/// `5` → `5 min read`; other input is returned trimmed
pub fn reading_time(raw: &str) -> String {
    let raw = raw.trim();
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        format!("{} min read", raw)
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-05"), "05 Mar 2024");
        assert_eq!(display_date(" 2023-12-31 "), "31 Dec 2023");
        assert_eq!(display_date("2024-03-05T10:30:00"), "05 Mar 2024");
        assert_eq!(display_date("12 Jan 2024"), "12 Jan 2024");
    }

    #[test]
    fn test_classify_date() {
        assert_eq!(
            classify_date("2024-02-29"),
            DateInput::Iso(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(classify_date("2023-02-29"), DateInput::InvalidIso);
        assert_eq!(classify_date("2024-13-01"), DateInput::InvalidIso);
        assert_eq!(classify_date("2024-03-05x"), DateInput::Display);
        assert_eq!(classify_date("March 5"), DateInput::Display);
        assert_eq!(classify_date(""), DateInput::Display);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time("5"), "5 min read");
        assert_eq!(reading_time(" 12 "), "12 min read");
        assert_eq!(reading_time("7 min read"), "7 min read");
        assert_eq!(reading_time(""), "");
    }
}
