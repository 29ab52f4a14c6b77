//! Duration strings such as `"2yrs 3mon"`.
//!
//! The loan dataset stores account age and credit history length as
//! `<years>yrs <months>mon`. Parsing is deliberately strict: one space, both
//! tokens, the exact unit suffixes, unsigned integers.

use thiserror::Error;

const YEARS_SUFFIX: &str = "yrs";
const MONTHS_SUFFIX: &str = "mon";

/// Reasons a duration string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("expected '<years>yrs <months>mon', found {0} space-separated tokens")]
    TokenCount(usize),
    #[error("year token '{0}' is not '<int>yrs'")]
    Years(String),
    #[error("month token '{0}' is not '<int>mon'")]
    Months(String),
    #[error("'{0}' does not fit in a month count")]
    OutOfRange(String),
    #[error("duration is missing")]
    Missing,
}

/// Converts `"<years>yrs <months>mon"` into a total number of months.
///
/// # Examples
///
/// ```
/// use scorecard_transform::duration::parse_duration_months;
///
/// assert_eq!(parse_duration_months("2yrs 3mon"), Ok(27));
/// assert_eq!(parse_duration_months("0yrs 11mon"), Ok(11));
/// assert!(parse_duration_months("2 yrs 3 mon").is_err());
/// ```
pub fn parse_duration_months(value: &str) -> Result<i64, DurationError> {
    let tokens: Vec<&str> = value.split(' ').collect();
    let [years, months] = tokens.as_slice() else {
        return Err(DurationError::TokenCount(tokens.len()));
    };
    let years_count = leading_count(years, YEARS_SUFFIX)
        .ok_or_else(|| DurationError::Years((*years).to_string()))?;
    let months_count = leading_count(months, MONTHS_SUFFIX)
        .ok_or_else(|| DurationError::Months((*months).to_string()))?;
    years_count
        .checked_mul(12)
        .and_then(|total| total.checked_add(months_count))
        .ok_or_else(|| DurationError::OutOfRange(value.to_string()))
}

fn leading_count(token: &str, suffix: &str) -> Option<i64> {
    let digits = token.strip_suffix(suffix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documented_examples() {
        assert_eq!(parse_duration_months("2yrs 3mon"), Ok(27));
        assert_eq!(parse_duration_months("0yrs 11mon"), Ok(11));
        assert_eq!(parse_duration_months("10yrs 0mon"), Ok(120));
        assert_eq!(parse_duration_months("0yrs 0mon"), Ok(0));
    }

    #[test]
    fn rejects_missing_token() {
        assert_eq!(
            parse_duration_months("2yrs"),
            Err(DurationError::TokenCount(1))
        );
        assert_eq!(parse_duration_months(""), Err(DurationError::TokenCount(1)));
    }

    #[test]
    fn rejects_alternate_separators() {
        assert_eq!(
            parse_duration_months("2yrs  3mon"),
            Err(DurationError::TokenCount(3))
        );
        assert_eq!(
            parse_duration_months("2yrs,3mon"),
            Err(DurationError::TokenCount(1))
        );
    }

    #[test]
    fn rejects_alternate_units() {
        assert_eq!(
            parse_duration_months("1yr 3mon"),
            Err(DurationError::Years("1yr".to_string()))
        );
        assert_eq!(
            parse_duration_months("1yrs 3months"),
            Err(DurationError::Months("3months".to_string()))
        );
    }

    #[test]
    fn rejects_overflowing_counts() {
        assert_eq!(
            parse_duration_months("999999999999999999yrs 0mon"),
            Err(DurationError::OutOfRange(
                "999999999999999999yrs 0mon".to_string()
            ))
        );
        assert_eq!(
            parse_duration_months("768614336404564650yrs 9223372036854775807mon"),
            Err(DurationError::OutOfRange(
                "768614336404564650yrs 9223372036854775807mon".to_string()
            ))
        );
    }

    #[test]
    fn rejects_signed_numbers() {
        assert!(parse_duration_months("-1yrs 3mon").is_err());
        assert!(parse_duration_months("+1yrs 3mon").is_err());
    }
}
