use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::category::Category;
use crate::domain::department::Department;
use crate::domain::query::Predicate;
use crate::domain::record::{EnergyRecord, NewEnergyRecord};
use crate::models::energy_record::{
    EnergyRecord as DbEnergyRecord, NewElectricityRecord, NewSolarPowerRecord,
};
use crate::repository::{
    DieselRepository, EnergyRecordReader, EnergyRecordWriter, RepositoryResult,
};

/// Translate a [`Predicate`] into a boxed Diesel query against one energy
/// table and load the first row by id.
macro_rules! find_first_in {
    ($table:ident, $predicate:expr, $conn:expr) => {{
        use crate::schema::$table;

        let predicate: &Predicate = $predicate;
        let mut items = $table::table.into_boxed::<Sqlite>();

        if let Some(range) = &predicate.date_range {
            items = items.filter($table::date.between(range.start, range.end));
        }

        if let Some(department) = predicate.department_exists {
            items = match department {
                Department::EastCampus => items.filter($table::east_campus.is_not_null()),
                Department::MbaMca => items.filter($table::mba_mca.is_not_null()),
                Department::Civil => items.filter($table::civil.is_not_null()),
                Department::Mech => items.filter($table::mech.is_not_null()),
                Department::Auto => items.filter($table::auto.is_not_null()),
            };
        }

        if let Some(total) = predicate.total_equals {
            items = items.filter($table::total.eq(total));
        }

        items
            .order($table::id.asc())
            .first::<DbEnergyRecord>($conn)
            .optional()
    }};
}

impl EnergyRecordReader for DieselRepository {
    fn find_first_record(
        &self,
        category: Category,
        predicate: &Predicate,
    ) -> RepositoryResult<Option<EnergyRecord>> {
        let mut conn = self.conn()?;

        let result = match category {
            Category::SolarPower => find_first_in!(solar_power, predicate, &mut conn)?,
            Category::ElectricityData => find_first_in!(electricity_data, predicate, &mut conn)?,
        };

        let result = result.map(TryInto::try_into).transpose()?;
        Ok(result)
    }
}

impl EnergyRecordWriter for DieselRepository {
    fn create_record(
        &self,
        category: Category,
        record: &NewEnergyRecord,
    ) -> RepositoryResult<usize> {
        use crate::schema::{electricity_data, solar_power};

        let mut conn = self.conn()?;

        let affected = match category {
            Category::SolarPower => diesel::insert_into(solar_power::table)
                .values(&NewSolarPowerRecord::from(record))
                .execute(&mut conn)?,
            Category::ElectricityData => diesel::insert_into(electricity_data::table)
                .values(&NewElectricityRecord::from(record))
                .execute(&mut conn)?,
        };

        Ok(affected)
    }
}
