use chrono::{DateTime, NaiveDate, Utc};

use crate::text;

/// First day of the default view
pub const DEFAULT_RANGE_START: &str = "2024-01-01";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar-date window used to filter the displayed records, in UTC.
///
/// Built from user-typed `YYYY-MM-DD` strings without validation: a side that
/// fails to parse is kept as `None` and the range then matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn from_input(from: &str, to: &str) -> Self {
        Self {
            from: NaiveDate::parse_from_str(from.trim(), DATE_FORMAT).ok(),
            to: NaiveDate::parse_from_str(to.trim(), DATE_FORMAT).ok(),
        }
    }

    /// Inclusive instant bounds: `from` at 00:00:00Z through `to` at 23:59:59Z
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.from?.and_hms_opt(0, 0, 0)?.and_utc();
        let end = self.to?.and_hms_opt(23, 59, 59)?.and_utc();
        Some((start, end))
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        match self.bounds() {
            Some((start, end)) => *instant >= start && *instant <= end,
            None => false,
        }
    }
}

impl Default for DateRange {
    /// Fixed historical start through today
    fn default() -> Self {
        Self {
            from: NaiveDate::parse_from_str(DEFAULT_RANGE_START, DATE_FORMAT).ok(),
            to: Some(text::today()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn range() -> DateRange {
        DateRange::from_input("2024-03-01", "2024-03-31")
    }

    #[test]
    fn test_start_boundary_included() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert!(range().contains(&start));
        assert!(!range().contains(&(start - Duration::microseconds(1))));
    }

    #[test]
    fn test_end_boundary_included() {
        let end = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap();
        assert!(range().contains(&end));
        assert!(!range().contains(&(end + Duration::microseconds(1))));
    }

    #[test]
    fn test_invalid_input_matches_nothing() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();

        assert!(!DateRange::from_input("not-a-date", "2024-03-31").contains(&instant));
        assert!(!DateRange::from_input("2024-03-01", "31/03/2024").contains(&instant));
        assert!(DateRange::from_input("", "").bounds().is_none());
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert!(!DateRange::from_input("2024-03-31", "2024-03-01").contains(&instant));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::from_input("2024-03-10", "2024-03-10");
        let noon = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert!(range.contains(&noon));
    }

    #[test]
    fn test_default_range_ends_today() {
        let range = DateRange::default();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(range.to, Some(text::today()));
    }
}
