//! Persistence gateway contract consumed by the registration services.
//!
//! Storage lives behind these traits so reconciliation never touches a
//! connection pool directly. `persistence::gateway::PgRegistrationGateway`
//! is the production implementation; [`InMemoryGateway`] backs development
//! and tests.
//!
//! [`InMemoryGateway`]: crate::services::in_memory::InMemoryGateway

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Company, FinalizedUser, RegisteredUser, YearsOfExperience};

/// Errors surfaced by a persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The store rejected a user because the e-mail is already taken
    /// (unique constraint on `users.email`).
    #[error("Email already registered")]
    EmailTaken,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Operations the registration pipeline needs from storage.
///
/// Each call is a single bounded request/response; no retries happen here.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    /// Exact, case-sensitive match on `Company.domain`.
    async fn find_company_by_domain(&self, domain: &str)
        -> Result<Option<Company>, GatewayError>;

    /// Exact match on `User.email`.
    async fn user_exists_by_email(&self, email: &str) -> Result<bool, GatewayError>;

    /// Stores a reconciled user and returns it with its storage-assigned id.
    async fn create_user(&self, user: FinalizedUser) -> Result<RegisteredUser, GatewayError>;
}

/// Read-only access to reference data shown by registration forms.
#[async_trait]
pub trait ReferenceDirectory: Send + Sync {
    /// All companies ordered by id.
    async fn list_companies(&self) -> Result<Vec<Company>, GatewayError>;

    /// The years-of-experience enumeration ordered by id.
    async fn list_years_of_experience(&self) -> Result<Vec<YearsOfExperience>, GatewayError>;
}
