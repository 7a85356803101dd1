//! Structured filter derived from a free-text question.
//!
//! The predicate is store-agnostic: it only records which constraints are
//! present. Translation into a concrete query language happens in the
//! repository adapter.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::domain::department::Department;
use crate::domain::record::EnergyRecord;

/// Store field holding the reading timestamp.
pub const DATE_FIELD: &str = "Date";
/// Store field holding the reading total.
pub const TOTAL_FIELD: &str = "Total";

/// Inclusive timestamp range.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Range covering a whole calendar day, from midnight to the last
    /// microsecond before the next midnight.
    pub fn whole_day(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        Self {
            start,
            end: date
                .and_hms_micro_opt(23, 59, 59, 999_999)
                .unwrap_or(start),
        }
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.start <= *timestamp && *timestamp <= self.end
    }
}

/// Partial filter over a record collection. Absent constraints match
/// everything.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Predicate {
    pub date_range: Option<DateRange>,
    pub department_exists: Option<Department>,
    pub total_equals: Option<i64>,
}

impl Predicate {
    /// True when no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.key_count() == 0
    }

    /// Number of constrained fields.
    pub fn key_count(&self) -> usize {
        self.field_names().len()
    }

    /// Store field names this predicate constrains.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(3);
        if self.date_range.is_some() {
            fields.push(DATE_FIELD);
        }
        if let Some(department) = self.department_exists {
            fields.push(department.as_str());
        }
        if self.total_equals.is_some() {
            fields.push(TOTAL_FIELD);
        }
        fields
    }

    /// Evaluate the predicate against a record held in memory.
    pub fn matches(&self, record: &EnergyRecord) -> bool {
        self.date_range
            .is_none_or(|range| range.contains(&record.date))
            && self
                .department_exists
                .is_none_or(|department| record.department(department).is_some())
            && self.total_equals.is_none_or(|total| record.total == total)
    }
}

/// Merge extracted values into a predicate. Every subset of present values,
/// including none, is valid.
pub fn build_predicate(
    date: Option<NaiveDate>,
    department: Option<Department>,
    total: Option<i64>,
) -> Predicate {
    Predicate {
        date_range: date.map(DateRange::whole_day),
        department_exists: department,
        total_equals: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RecordId;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_record() -> EnergyRecord {
        EnergyRecord {
            id: RecordId::new(1).unwrap(),
            date: day(2024, 1, 1).and_hms_opt(10, 30, 0).unwrap(),
            east_campus: None,
            mba_mca: None,
            civil: Some(12.5),
            mech: Some(40.0),
            auto: None,
            total: 100,
        }
    }

    #[test]
    fn no_extractions_build_the_empty_predicate() {
        let predicate = build_predicate(None, None, None);

        assert!(predicate.is_empty());
        assert_eq!(predicate, Predicate::default());
        assert!(predicate.field_names().is_empty());
    }

    #[test]
    fn all_extractions_build_three_keys() {
        let predicate =
            build_predicate(Some(day(2024, 12, 25)), Some(Department::MbaMca), Some(5));

        assert_eq!(predicate.key_count(), 3);
        assert_eq!(predicate.field_names(), vec!["Date", "MBA_&_MCA", "Total"]);
    }

    #[test]
    fn date_range_spans_the_whole_day() {
        let range = DateRange::whole_day(day(2024, 12, 25));

        assert_eq!(range.start, day(2024, 12, 25).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            range.end,
            day(2024, 12, 25).and_hms_micro_opt(23, 59, 59, 999_999).unwrap()
        );
        assert!(range.contains(&range.start));
        assert!(range.contains(&range.end));
        assert!(!range.contains(&day(2024, 12, 26).and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn date_range_handles_the_last_representable_day() {
        let range = DateRange::whole_day(NaiveDate::MAX);

        assert_eq!(range.start, NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            range.end,
            NaiveDate::MAX.and_hms_micro_opt(23, 59, 59, 999_999).unwrap()
        );
    }

    #[test]
    fn far_future_date_from_text_builds_a_predicate() {
        let query = crate::domain::types::RawQuery::new("solar on 31.12.+262142");
        let date = crate::domain::extract::extract_date(&query);
        assert!(date.is_some());

        let predicate = build_predicate(date, None, None);
        let range = predicate.date_range.unwrap();

        assert_eq!(range.start.date(), range.end.date());
        assert!(range.start < range.end);
    }

    #[test]
    fn empty_predicate_matches_any_record() {
        assert!(Predicate::default().matches(&sample_record()));
    }

    #[test]
    fn matches_checks_every_present_constraint() {
        let record = sample_record();

        assert!(
            build_predicate(Some(day(2024, 1, 1)), Some(Department::Mech), Some(100))
                .matches(&record)
        );
        assert!(!build_predicate(Some(day(2024, 1, 2)), None, None).matches(&record));
        assert!(!build_predicate(None, Some(Department::Auto), None).matches(&record));
        assert!(!build_predicate(None, None, Some(99)).matches(&record));
    }
}
