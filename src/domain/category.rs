use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Data category a question targets. Each category is backed by its own
/// record collection in the store.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Solar generation readings.
    SolarPower,
    /// Electricity consumption readings.
    ElectricityData,
}

/// Trigger substrings checked in order; the first hit wins, so a question
/// mentioning both resolves to solar.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("solar", Category::SolarPower),
    ("electricity", Category::ElectricityData),
];

impl Category {
    /// Name of the store collection holding records of this category.
    pub const fn collection_name(self) -> &'static str {
        match self {
            Category::SolarPower => "solar_power",
            Category::ElectricityData => "electricity_data",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection_name())
    }
}
