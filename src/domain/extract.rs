//! Rule-based extraction of filter values from a lowercased question.
//!
//! Every extractor is independent and total: a missing trigger phrase or an
//! unparsable fragment yields `None`, never an error. Malformed fragments are
//! logged so that a silently widened query can be traced.

use chrono::NaiveDate;

use crate::domain::category::{CATEGORY_RULES, Category};
use crate::domain::department::{DEPARTMENT_ALIASES, Department};
use crate::domain::types::RawQuery;

/// Trigger for the date extractor. Matches anywhere, including inside words
/// such as "consumption".
pub const DATE_TRIGGER: &str = "on";
/// Trigger for the total extractor.
pub const TOTAL_TRIGGER: &str = "total of";
/// Expected date layout, e.g. `25.12.2024`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Category of the first rule whose trigger occurs in the text, or `None`
/// when the question is about neither.
pub fn select_category(query: &RawQuery) -> Option<Category> {
    CATEGORY_RULES
        .iter()
        .find(|(trigger, _)| query.as_str().contains(trigger))
        .map(|(_, category)| *category)
}

/// Leading whitespace-delimited token of the text following the first
/// occurrence of `trigger`.
fn fragment_after<'a>(text: &'a str, trigger: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(trigger)?;
    Some(rest.split_whitespace().next().unwrap_or(""))
}

/// Date following the first `on`, in `dd.mm.yyyy` form. Only the first word
/// after the trigger is parsed rather than the whole remainder, so trailing
/// text such as `total of 100` does not spoil the date. A malformed word is
/// logged and yields `None`.
pub fn extract_date(query: &RawQuery) -> Option<NaiveDate> {
    let fragment = fragment_after(query.as_str(), DATE_TRIGGER)?;
    match NaiveDate::parse_from_str(fragment, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("Invalid date format: '{fragment}': {e}");
            None
        }
    }
}

/// Department of the first alias contained in the text.
pub fn extract_department(query: &RawQuery) -> Option<Department> {
    DEPARTMENT_ALIASES
        .iter()
        .find(|(alias, _)| query.as_str().contains(alias))
        .map(|(_, department)| *department)
}

/// Integer following the first `total of`; a bare `total` does not trigger.
/// A malformed value is logged and yields `None`.
pub fn extract_total(query: &RawQuery) -> Option<i64> {
    let fragment = fragment_after(query.as_str(), TOTAL_TRIGGER)?;
    match fragment.parse::<i64>() {
        Ok(total) => Some(total),
        Err(e) => {
            log::warn!("Invalid total value: '{fragment}': {e}");
            None
        }
    }
}
