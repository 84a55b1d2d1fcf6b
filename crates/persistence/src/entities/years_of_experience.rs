//! Years-of-experience entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the years_of_experience table.
#[derive(Debug, Clone, FromRow)]
pub struct YearsOfExperienceEntity {
    pub id: i64,
    pub description: String,
}

impl From<YearsOfExperienceEntity> for domain::models::YearsOfExperience {
    fn from(entity: YearsOfExperienceEntity) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
        }
    }
}
