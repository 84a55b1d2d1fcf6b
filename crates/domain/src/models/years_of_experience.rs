//! Years-of-experience enumeration.

use serde::{Deserialize, Serialize};

/// One bucket of the fixed years-of-experience enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearsOfExperience {
    pub id: i64,
    pub description: String,
}

/// Seeded descriptions; ids are assigned 1..=7 in this order.
pub const YEARS_OF_EXPERIENCE_DESCRIPTIONS: [&str; 7] = [
    "0 Years/Student/Intern",
    "0 - 1 Years",
    "1 - 3 Years",
    "3 - 5 Years",
    "5 - 7 Years",
    "7 - 10 Years",
    "10+ Years",
];

/// Builds the enumeration with the ids the seeding routine assigns.
pub fn years_of_experience_catalog() -> Vec<YearsOfExperience> {
    YEARS_OF_EXPERIENCE_DESCRIPTIONS
        .iter()
        .zip(1..)
        .map(|(description, id)| YearsOfExperience {
            id,
            description: (*description).to_string(),
        })
        .collect()
}
