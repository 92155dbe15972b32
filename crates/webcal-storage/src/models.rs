// Database models (internal, may differ from public DTOs)

use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub event: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub event: String,
    pub date: NaiveDate,
}

/// Row predicate for listing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// Every event
    #[default]
    All,
    /// Events on exactly this date
    On(NaiveDate),
    /// Half-open interval: `start <= date < end`. Either bound may be absent.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl DateFilter {
    /// Build a filter from optional range bounds; no bounds means no filter.
    pub fn range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (None, None) => DateFilter::All,
            (start, end) => DateFilter::Range { start, end },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_range_without_bounds_is_all() {
        assert_eq!(DateFilter::range(None, None), DateFilter::All);
    }

    #[test]
    fn test_range_keeps_single_bound() {
        assert_eq!(
            DateFilter::range(Some(day(5)), None),
            DateFilter::Range {
                start: Some(day(5)),
                end: None
            }
        );
        assert_eq!(
            DateFilter::range(None, Some(day(5))),
            DateFilter::Range {
                start: None,
                end: Some(day(5))
            }
        );
    }
}
