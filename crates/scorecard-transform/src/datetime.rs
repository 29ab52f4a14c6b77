//! Date handling for the loan dataset.
//!
//! Birth and disbursal dates arrive as `dd-mm-yy`. Two-digit years follow
//! the usual pivot: `00`-`68` map to 2000-2068 and `69`-`99` to 1969-1999.
//! Birth dates that land after the reference year are century rollovers and
//! are moved back 100 years.

use chrono::{Datelike, Months, NaiveDate};

/// `dd-mm-yy`, e.g. `01-01-84`.
pub const SHORT_DATE_FORMAT: &str = "%d-%m-%y";

/// Average Gregorian year length used for age in whole years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Parses a `dd-mm-yy` date, returning None for empty or malformed values.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use scorecard_transform::datetime::parse_short_date;
///
/// assert_eq!(parse_short_date("01-01-95"), NaiveDate::from_ymd_opt(1995, 1, 1));
/// assert_eq!(parse_short_date("31-07-05"), NaiveDate::from_ymd_opt(2005, 7, 31));
/// assert_eq!(parse_short_date("1995-01-01"), None);
/// ```
pub fn parse_short_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, SHORT_DATE_FORMAT).ok()
}

/// Returns true when `date` falls in a year after the reference year.
pub fn is_century_rollover(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() > reference.year()
}

/// Moves dates after the reference year back by 100 years.
///
/// February 29 of a leap year clamps to February 28 when the earlier
/// century's year is not a leap year.
pub fn correct_century(date: NaiveDate, reference: NaiveDate) -> NaiveDate {
    if !is_century_rollover(date, reference) {
        return date;
    }
    date.checked_sub_months(Months::new(1200)).unwrap_or(date)
}

/// Whole years between `birth` and `reference`, using 365.25-day years.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use scorecard_transform::datetime::age_in_years;
///
/// let birth = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
/// assert_eq!(age_in_years(birth, reference), 24);
/// ```
pub fn age_in_years(birth: NaiveDate, reference: NaiveDate) -> i64 {
    let days = days_between(birth, reference) as f64;
    (days / DAYS_PER_YEAR).floor() as i64
}

/// Whole days from `from` to `reference` (negative when `from` is later).
pub fn days_between(from: NaiveDate, reference: NaiveDate) -> i64 {
    (reference - from).num_days()
}

/// Parses a birth date, applies the century correction and derives the age.
///
/// Returns the age and whether a correction was applied.
pub fn birth_date_to_age(value: &str, reference: NaiveDate) -> Option<(i64, bool)> {
    let parsed = parse_short_date(value)?;
    let corrected = correct_century(parsed, reference);
    Some((age_in_years(corrected, reference), corrected != parsed))
}
