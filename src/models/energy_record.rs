use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::record::{
    EnergyRecord as DomainEnergyRecord, NewEnergyRecord as DomainNewEnergyRecord,
};
use crate::domain::types::TypeConstraintError;

/// Row of either energy collection. Both tables share the same column
/// layout, so a single positional `Queryable` serves them.
#[derive(Debug, Clone, Queryable)]
pub struct EnergyRecord {
    pub id: i32,
    pub date: NaiveDateTime,
    pub east_campus: Option<f64>,
    pub mba_mca: Option<f64>,
    pub civil: Option<f64>,
    pub mech: Option<f64>,
    pub auto: Option<f64>,
    pub total: i64,
}

impl TryFrom<EnergyRecord> for DomainEnergyRecord {
    type Error = TypeConstraintError;

    fn try_from(record: EnergyRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id.try_into()?,
            date: record.date,
            east_campus: record.east_campus,
            mba_mca: record.mba_mca,
            civil: record.civil,
            mech: record.mech,
            auto: record.auto,
            total: record.total,
        })
    }
}

/// Generates an `Insertable` model for one energy collection.
macro_rules! new_record_model {
    ($name:ident, $table:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Insertable)]
        #[diesel(table_name = crate::schema::$table)]
        pub struct $name {
            pub date: NaiveDateTime,
            pub east_campus: Option<f64>,
            pub mba_mca: Option<f64>,
            pub civil: Option<f64>,
            pub mech: Option<f64>,
            pub auto: Option<f64>,
            pub total: i64,
        }

        impl From<&DomainNewEnergyRecord> for $name {
            fn from(record: &DomainNewEnergyRecord) -> Self {
                Self {
                    date: record.date,
                    east_campus: record.east_campus,
                    mba_mca: record.mba_mca,
                    civil: record.civil,
                    mech: record.mech,
                    auto: record.auto,
                    total: record.total,
                }
            }
        }
    };
}

new_record_model!(
    NewSolarPowerRecord,
    solar_power,
    "Insertable form of a `solar_power` row."
);
new_record_model!(
    NewElectricityRecord,
    electricity_data,
    "Insertable form of an `electricity_data` row."
);
