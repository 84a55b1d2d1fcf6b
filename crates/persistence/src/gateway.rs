//! PostgreSQL implementation of the registration gateway.

use async_trait::async_trait;
use domain::models::{Company, FinalizedUser, RegisteredUser, YearsOfExperience};
use domain::services::{GatewayError, ReferenceDirectory, RegistrationGateway};
use shared::password::hash_password;
use sqlx::PgPool;

use crate::repositories::{CompanyRepository, UserRepository, YearsOfExperienceRepository};

/// PostgreSQL error code for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Maps a sqlx error onto the gateway taxonomy.
///
/// Unique violations become [`GatewayError::EmailTaken`]; the only unique
/// constraint an insert into `users` can hit is the e-mail index.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> GatewayError {
    if is_unique_violation(&err) {
        return GatewayError::EmailTaken;
    }
    GatewayError::Storage(err.to_string())
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}

/// Hashes on the blocking pool; Argon2id is deliberately CPU-heavy.
pub(crate) async fn hash_off_thread(password: String) -> Result<String, GatewayError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| GatewayError::Storage(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| GatewayError::Storage(e.to_string()))
}

/// Registration gateway backed by PostgreSQL.
#[derive(Clone)]
pub struct PgRegistrationGateway {
    users: UserRepository,
    companies: CompanyRepository,
    years_of_experience: YearsOfExperienceRepository,
}

impl PgRegistrationGateway {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool.clone()),
            years_of_experience: YearsOfExperienceRepository::new(pool),
        }
    }
}

#[async_trait]
impl RegistrationGateway for PgRegistrationGateway {
    async fn find_company_by_domain(
        &self,
        domain: &str,
    ) -> Result<Option<Company>, GatewayError> {
        let entity = self
            .companies
            .find_by_domain(domain)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, GatewayError> {
        self.users
            .exists_by_email(email)
            .await
            .map_err(map_sqlx_error)
    }

    async fn create_user(&self, user: FinalizedUser) -> Result<RegisteredUser, GatewayError> {
        let password_hash = hash_off_thread(user.password.clone()).await?;

        let entity = self
            .users
            .create_user(&user, &password_hash, false)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.into())
    }
}

#[async_trait]
impl ReferenceDirectory for PgRegistrationGateway {
    async fn list_companies(&self) -> Result<Vec<Company>, GatewayError> {
        let entities = self.companies.list().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn list_years_of_experience(&self) -> Result<Vec<YearsOfExperience>, GatewayError> {
        let entities = self
            .years_of_experience
            .list()
            .await
            .map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_storage() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, GatewayError::Storage(_)));
    }

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }

    #[test]
    fn test_pool_timeout_maps_to_storage() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        match err {
            GatewayError::Storage(msg) => assert!(msg.contains("timed out")),
            other => panic!("Expected Storage error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_hash_off_thread() {
        let hash = hash_off_thread("root".to_string()).await.unwrap();
        assert!(shared::password::verify_password("root", &hash).unwrap());
    }
}
