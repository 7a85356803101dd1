use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Campus department with its own metering column in the store.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Department {
    #[serde(rename = "East_Campus")]
    EastCampus,
    #[serde(rename = "MBA_&_MCA")]
    MbaMca,
    Civil,
    Mech,
    Auto,
}

/// Lowercase aliases users type, in lookup order. The first alias found in a
/// question decides the department.
pub const DEPARTMENT_ALIASES: &[(&str, Department)] = &[
    ("east campus", Department::EastCampus),
    ("mba", Department::MbaMca),
    ("mca", Department::MbaMca),
    ("civil", Department::Civil),
    ("mech", Department::Mech),
    ("auto", Department::Auto),
];

impl Department {
    /// Every department, in store column order.
    pub const ALL: [Department; 5] = [
        Department::EastCampus,
        Department::MbaMca,
        Department::Civil,
        Department::Mech,
        Department::Auto,
    ];

    /// Canonical identifier, also the name of the store field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Department::EastCampus => "East_Campus",
            Department::MbaMca => "MBA_&_MCA",
            Department::Civil => "Civil",
            Department::Mech => "Mech",
            Department::Auto => "Auto",
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
