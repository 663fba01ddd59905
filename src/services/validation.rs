//! Date range validation for windowed queries.

use chrono::{DateTime, NaiveDate};

use crate::services::error::{QueryError, QueryResult};

/// Inclusive calendar date interval.
///
/// Both endpoints are part of the interval; a purchase dated exactly `from`
/// or `to` is inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Validate optional `from`/`to` query parameters.
///
/// Returns `Ok(None)` when neither is supplied (no date filter). Supplying
/// only one of the two, a value that is not an ISO 8601 date or RFC 3339
/// date-time, or a `from` later than `to` is a validation error.
pub fn parse_date_range(from: Option<&str>, to: Option<&str>) -> QueryResult<Option<DateRange>> {
    match (from, to) {
        (None, None) => Ok(None),
        (Some(_), None) | (None, Some(_)) => Err(QueryError::validation(
            "Both from and to must be provided",
        )),
        (Some(from), Some(to)) => {
            let from = parse_iso_date(from)?;
            let to = parse_iso_date(to)?;

            if from > to {
                return Err(QueryError::validation("From date must be before to date"));
            }

            Ok(Some(DateRange { from, to }))
        }
    }
}

/// Parse a plain ISO 8601 date, falling back to an RFC 3339 date-time.
fn parse_iso_date(value: &str) -> QueryResult<NaiveDate> {
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Ok(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }

    Err(QueryError::validation(
        "Invalid date format. Dates must be in ISO 8601 format",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_filter_when_both_absent() {
        assert_eq!(parse_date_range(None, None).unwrap(), None);
    }

    #[test]
    fn test_one_sided_range_fails() {
        assert!(parse_date_range(Some("2024-07-01"), None).is_err());
        assert!(parse_date_range(None, Some("2024-07-31")).is_err());
    }

    #[test]
    fn test_parses_plain_dates() {
        let range = parse_date_range(Some("2024-07-01"), Some("2024-07-31"))
            .unwrap()
            .unwrap();
        assert_eq!(range.from, date(2024, 7, 1));
        assert_eq!(range.to, date(2024, 7, 31));
    }

    #[test]
    fn test_parses_rfc3339_datetimes() {
        let range = parse_date_range(
            Some("2024-07-01T00:00:00Z"),
            Some("2024-07-31T23:59:59+09:00"),
        )
        .unwrap()
        .unwrap();
        assert_eq!(range.from, date(2024, 7, 1));
        assert_eq!(range.to, date(2024, 7, 31));
    }

    #[test]
    fn test_invalid_format_fails() {
        let err = parse_date_range(Some("07/01/2024"), Some("2024-07-31")).unwrap_err();
        assert!(err.to_string().contains("ISO 8601"));

        assert!(parse_date_range(Some("2024-07-01"), Some("not-a-date")).is_err());
    }

    #[test]
    fn test_from_after_to_fails() {
        let err = parse_date_range(Some("2024-08-01"), Some("2024-07-01")).unwrap_err();
        assert!(matches!(err, QueryError::Validation(_)));
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let range = parse_date_range(Some("2024-07-15"), Some("2024-07-15"))
            .unwrap()
            .unwrap();
        assert!(range.contains(date(2024, 7, 15)));
        assert!(!range.contains(date(2024, 7, 16)));
    }

    #[test]
    fn test_range_endpoints_are_inclusive() {
        let range = parse_date_range(Some("2024-07-01"), Some("2024-07-31"))
            .unwrap()
            .unwrap();
        assert!(range.contains(date(2024, 7, 1)));
        assert!(range.contains(date(2024, 7, 31)));
        assert!(!range.contains(date(2024, 6, 30)));
        assert!(!range.contains(date(2024, 8, 1)));
    }
}
