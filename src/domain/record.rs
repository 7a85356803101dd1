use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::department::Department;
use crate::domain::types::RecordId;

/// A single metering document, serialized with the store's field names.
///
/// Department fields are present only for departments the reading covers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(rename = "Date")]
    pub date: NaiveDateTime,
    #[serde(rename = "East_Campus", default, skip_serializing_if = "Option::is_none")]
    pub east_campus: Option<f64>,
    #[serde(rename = "MBA_&_MCA", default, skip_serializing_if = "Option::is_none")]
    pub mba_mca: Option<f64>,
    #[serde(rename = "Civil", default, skip_serializing_if = "Option::is_none")]
    pub civil: Option<f64>,
    #[serde(rename = "Mech", default, skip_serializing_if = "Option::is_none")]
    pub mech: Option<f64>,
    #[serde(rename = "Auto", default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<f64>,
    #[serde(rename = "Total")]
    pub total: i64,
}

impl EnergyRecord {
    /// Reading recorded for `department`, if the document carries that field.
    pub fn department(&self, department: Department) -> Option<f64> {
        match department {
            Department::EastCampus => self.east_campus,
            Department::MbaMca => self.mba_mca,
            Department::Civil => self.civil,
            Department::Mech => self.mech,
            Department::Auto => self.auto,
        }
    }
}

/// Information required to store a new [`EnergyRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NewEnergyRecord {
    pub date: NaiveDateTime,
    pub east_campus: Option<f64>,
    pub mba_mca: Option<f64>,
    pub civil: Option<f64>,
    pub mech: Option<f64>,
    pub auto: Option<f64>,
    pub total: i64,
}

impl NewEnergyRecord {
    pub fn new(date: NaiveDateTime, total: i64) -> Self {
        Self {
            date,
            total,
            ..Default::default()
        }
    }

    /// Attach a reading for `department`.
    pub fn with_department(mut self, department: Department, value: f64) -> Self {
        let slot = match department {
            Department::EastCampus => &mut self.east_campus,
            Department::MbaMca => &mut self.mba_mca,
            Department::Civil => &mut self.civil,
            Department::Mech => &mut self.mech,
            Department::Auto => &mut self.auto,
        };
        *slot = Some(value);
        self
    }
}
