//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{FinalizedUser, RegisteredUser};
use sqlx::FromRow;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub current_location: String,
    pub current_company_id: i64,
    pub current_company_name: String,
    pub current_position: String,
    pub school: String,
    pub years_of_experience_id: i64,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// The password hash stays in the row; the domain record carries no credential.
impl From<UserEntity> for RegisteredUser {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            user: FinalizedUser {
                first_name: entity.first_name,
                last_name: entity.last_name,
                email: entity.email,
                password: String::new(),
                current_location: entity.current_location,
                current_company_id: entity.current_company_id,
                current_company_name: entity.current_company_name,
                current_position: entity.current_position,
                school: entity.school,
                years_of_experience_id: entity.years_of_experience_id,
            },
            verified: entity.verified,
            created_at: entity.created_at,
        }
    }
}
