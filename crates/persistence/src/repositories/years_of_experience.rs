//! Years-of-experience repository for database operations.

use sqlx::PgPool;

use crate::entities::YearsOfExperienceEntity;
use crate::metrics::QueryTimer;

/// Repository for the years-of-experience enumeration.
#[derive(Clone)]
pub struct YearsOfExperienceRepository {
    pool: PgPool,
}

impl YearsOfExperienceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<YearsOfExperienceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_years_of_experience");
        let result = sqlx::query_as::<_, YearsOfExperienceEntity>(
            r#"
            SELECT id, description
            FROM years_of_experience
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert an enumeration entry with a fixed id unless it already exists.
    pub async fn insert_if_absent(&self, id: i64, description: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("insert_years_of_experience");
        let result = sqlx::query(
            r#"
            INSERT INTO years_of_experience (id, description)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(id)
        .bind(description)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
