//! Company repository for database operations.

use sqlx::PgPool;

use crate::entities::CompanyEntity;
use crate::metrics::QueryTimer;

/// Repository for the company directory.
#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the company owning an e-mail domain (exact match).
    pub async fn find_by_domain(&self, domain: &str) -> Result<Option<CompanyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_company_by_domain");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            SELECT id, name, domain
            FROM companies
            WHERE domain = $1
            "#,
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all companies ordered by id.
    pub async fn list(&self) -> Result<Vec<CompanyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_companies");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            SELECT id, name, domain
            FROM companies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a company unless its domain is already present.
    ///
    /// Returns `true` when a row was inserted.
    pub async fn insert_if_absent(&self, name: &str, domain: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("insert_company");
        let result = sqlx::query(
            r#"
            INSERT INTO companies (name, domain)
            VALUES ($1, $2)
            ON CONFLICT (domain) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(domain)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
