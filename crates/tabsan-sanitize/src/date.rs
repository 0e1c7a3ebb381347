//! Date-of-birth parsing.
//!
//! Values are first matched against the exact patterns in
//! [`DATE_FORMATS`](crate::tables::DATE_FORMATS), in order, then against a
//! locale-free generic parse (RFC 3339, RFC 2822, ISO date-times and
//! English month names). A parsed date must fall between 1900-01-01 and the
//! reference moment held by [`DateBounds`].

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::sanitized::Sanitized;
use crate::tables::{DATE_FORMATS, FALLBACK_DATE_FORMATS, FALLBACK_DATETIME_FORMATS};

/// Accepted range for a date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub earliest: NaiveDateTime,
    pub latest: NaiveDateTime,
}

impl DateBounds {
    /// Bounds from 1900-01-01 up to `reference`.
    pub fn until(reference: NaiveDateTime) -> Self {
        Self {
            earliest: NaiveDate::from_ymd_opt(1900, 1, 1)
                .unwrap_or(NaiveDate::MIN)
                .and_time(NaiveTime::MIN),
            latest: reference,
        }
    }

    /// Bounds ending at the current local time.
    pub fn now() -> Self {
        Self::until(Local::now().naive_local())
    }

    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        moment >= self.earliest && moment <= self.latest
    }
}

/// Parses an optional date of birth.
///
/// Blank input is not an error. Unparseable or out-of-range input yields
/// `None` with one diagnostic.
pub fn parse_date_of_birth(raw: &str, bounds: &DateBounds) -> Sanitized<Option<NaiveDate>> {
    let value = raw.trim();
    if value.is_empty() {
        return Sanitized::clean(None);
    }

    let Some(moment) = parse_exact(value).or_else(|| parse_generic(value)) else {
        return Sanitized::flagged(None, format!("Invalid date format: '{value}'"));
    };

    if !bounds.contains(moment) {
        return Sanitized::flagged(
            None,
            format!("Date of birth is outside valid range: {value}"),
        );
    }

    Sanitized::clean(Some(moment.date()))
}

/// First pattern from the exact table whose shape and calendar both match.
fn parse_exact(value: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .filter(|format| matches_shape(value, format.pattern))
        .find_map(|format| NaiveDate::parse_from_str(value, format.chrono).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Digit-for-digit check: `y`, `M` and `d` stand for one ASCII digit,
/// every other pattern char must appear literally.
fn matches_shape(value: &str, pattern: &str) -> bool {
    value.len() == pattern.len()
        && value.bytes().zip(pattern.bytes()).all(|(v, p)| match p {
            b'y' | b'M' | b'd' => v.is_ascii_digit(),
            _ => v == p,
        })
}

fn parse_generic(value: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.naive_local());
    }
    if let Some(parsed) = FALLBACK_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(parsed);
    }
    FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DateBounds {
        DateBounds::until(
            NaiveDate::from_ymd_opt(2025, 6, 30)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn iso_date() {
        let result = parse_date_of_birth("2020-01-01", &bounds());
        assert_eq!(result.value, ymd(2020, 1, 1));
        assert!(result.is_clean());
    }

    #[test]
    fn ambiguous_slash_date_reads_month_first() {
        let result = parse_date_of_birth("01/02/2020", &bounds());
        assert_eq!(result.value, ymd(2020, 1, 2));
    }

    #[test]
    fn day_first_when_month_impossible() {
        let result = parse_date_of_birth("25/12/1990", &bounds());
        assert_eq!(result.value, ymd(1990, 12, 25));
        assert!(result.is_clean());
    }

    #[test]
    fn dotted_and_dashed_patterns() {
        assert_eq!(parse_date_of_birth("24.12.1985", &bounds()).value, ymd(1985, 12, 24));
        assert_eq!(parse_date_of_birth("1985.12.24", &bounds()).value, ymd(1985, 12, 24));
        assert_eq!(parse_date_of_birth("24-12-1985", &bounds()).value, ymd(1985, 12, 24));
        assert_eq!(parse_date_of_birth("12-24-1985", &bounds()).value, ymd(1985, 12, 24));
        assert_eq!(parse_date_of_birth("1985/12/24", &bounds()).value, ymd(1985, 12, 24));
    }

    #[test]
    fn generic_fallback_formats() {
        assert_eq!(
            parse_date_of_birth("1990-3-7", &bounds()).value,
            ymd(1990, 3, 7)
        );
        assert_eq!(
            parse_date_of_birth("March 7, 1990", &bounds()).value,
            ymd(1990, 3, 7)
        );
        assert_eq!(
            parse_date_of_birth("7 Mar 1990", &bounds()).value,
            ymd(1990, 3, 7)
        );
        assert_eq!(
            parse_date_of_birth("1990-03-07T08:30:00", &bounds()).value,
            ymd(1990, 3, 7)
        );
        assert_eq!(
            parse_date_of_birth("1990-03-07T08:30:00+02:00", &bounds()).value,
            ymd(1990, 3, 7)
        );
    }

    #[test]
    fn before_1900_is_out_of_range() {
        let result = parse_date_of_birth("1850-01-01", &bounds());
        assert_eq!(result.value, None);
        assert_eq!(
            result.diagnostics,
            vec!["Date of birth is outside valid range: 1850-01-01"]
        );
    }

    #[test]
    fn future_is_out_of_range() {
        let result = parse_date_of_birth("2025-07-01", &bounds());
        assert_eq!(result.value, None);
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn reference_day_is_in_range() {
        let result = parse_date_of_birth("2025-06-30", &bounds());
        assert_eq!(result.value, ymd(2025, 6, 30));
    }

    #[test]
    fn first_day_of_1900_is_in_range() {
        let result = parse_date_of_birth("1900-01-01", &bounds());
        assert_eq!(result.value, ymd(1900, 1, 1));
    }

    #[test]
    fn empty_is_none_without_error() {
        let result = parse_date_of_birth("  ", &bounds());
        assert_eq!(result.value, None);
        assert!(result.is_clean());
    }

    #[test]
    fn garbage_is_invalid_format() {
        let result = parse_date_of_birth(" not a date ", &bounds());
        assert_eq!(result.value, None);
        assert_eq!(result.diagnostics, vec!["Invalid date format: 'not a date'"]);
    }

    #[test]
    fn impossible_calendar_date_is_invalid() {
        let result = parse_date_of_birth("2020-02-30", &bounds());
        assert_eq!(result.value, None);
        assert_eq!(result.diagnostics, vec!["Invalid date format: '2020-02-30'"]);
    }

    #[test]
    fn shape_requires_exact_digit_positions() {
        assert!(matches_shape("2020-01-01", "yyyy-MM-dd"));
        assert!(!matches_shape("2020-1-01", "yyyy-MM-dd"));
        assert!(!matches_shape("2020/01/01", "yyyy-MM-dd"));
    }
}
