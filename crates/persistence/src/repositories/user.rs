//! User repository for database operations.

use domain::models::FinalizedUser;
use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

const USER_COLUMNS: &str = "id, first_name, last_name, email, password_hash, current_location, \
     current_company_id, current_company_name, current_position, school, \
     years_of_experience_id, verified, created_at";

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a user with this exact e-mail exists.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("user_exists_by_email");
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a user. `user.password` is ignored in favour of `password_hash`.
    ///
    /// Fails with a unique violation (`23505`) when the e-mail is taken.
    pub async fn create_user(
        &self,
        user: &FinalizedUser,
        password_hash: &str,
        verified: bool,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash, current_location,
                               current_company_id, current_company_name, current_position,
                               school, years_of_experience_id, verified)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.current_location)
        .bind(user.current_company_id)
        .bind(&user.current_company_name)
        .bind(&user.current_position)
        .bind(&user.school)
        .bind(user.years_of_experience_id)
        .bind(verified)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
