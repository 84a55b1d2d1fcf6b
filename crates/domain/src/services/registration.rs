//! Registration reconciliation.
//!
//! Turns an untrusted [`CandidateUser`] into a persisted [`RegisteredUser`],
//! resolving the user's company against the authoritative directory.

use shared::validation::email_domain;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

use crate::models::{CandidateUser, Company, FinalizedUser, RegisteredUser, NO_COMPANY_ID};
use crate::services::company_directory::CompanyDirectory;
use crate::services::gateway::{GatewayError, RegistrationGateway};
use crate::services::uniqueness::UniquenessChecker;

/// Terminal failure states of a registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
}

impl RegistrationError {
    /// Short label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            RegistrationError::InvalidEmail => "invalid_email",
            RegistrationError::DuplicateEmail => "duplicate_email",
            RegistrationError::PersistenceFailure(_) => "persistence_failure",
        }
    }
}

impl From<GatewayError> for RegistrationError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::EmailTaken => RegistrationError::DuplicateEmail,
            GatewayError::Storage(msg) => RegistrationError::PersistenceFailure(msg),
        }
    }
}

/// Applies the directory to a candidate.
///
/// A matched company overrides whatever company name the caller supplied; with
/// no match the company id is [`NO_COMPANY_ID`] and the caller's name is kept
/// verbatim. All other fields are copied unchanged.
pub fn reconcile(candidate: CandidateUser, company: Option<&Company>) -> FinalizedUser {
    let (current_company_id, current_company_name) = match company {
        Some(company) => (company.id, company.name.clone()),
        None => (NO_COMPANY_ID, candidate.current_company_name),
    };

    FinalizedUser {
        first_name: candidate.first_name,
        last_name: candidate.last_name,
        email: candidate.email,
        password: candidate.password,
        current_location: candidate.current_location,
        current_company_id,
        current_company_name,
        current_position: candidate.current_position,
        school: candidate.school,
        years_of_experience_id: candidate.years_of_experience_id,
    }
}

/// One-shot registration pipeline: validate, check uniqueness, resolve the
/// company, persist.
///
/// Holds no state between calls, so one instance serves concurrent requests.
#[derive(Clone)]
pub struct RegistrationService {
    directory: CompanyDirectory,
    uniqueness: UniquenessChecker,
    gateway: Arc<dyn RegistrationGateway>,
}

impl RegistrationService {
    pub fn new(gateway: Arc<dyn RegistrationGateway>) -> Self {
        Self {
            directory: CompanyDirectory::new(gateway.clone()),
            uniqueness: UniquenessChecker::new(gateway.clone()),
            gateway,
        }
    }

    /// Registers a candidate.
    ///
    /// Nothing is persisted on any failure path. A unique-constraint conflict
    /// raised by the store on create is reported as
    /// [`RegistrationError::DuplicateEmail`].
    pub async fn register(
        &self,
        candidate: CandidateUser,
    ) -> Result<RegisteredUser, RegistrationError> {
        if candidate.validate().is_err() {
            tracing::warn!("Registration rejected: invalid email");
            return Err(RegistrationError::InvalidEmail);
        }

        // Validation guarantees exactly one '@'.
        let domain = email_domain(&candidate.email).unwrap_or_default().to_string();

        let result = self.register_valid(candidate, &domain).await;

        match &result {
            Ok(user) => tracing::info!(
                user_id = user.id,
                domain = %domain,
                company_id = user.user.current_company_id,
                "User registered"
            ),
            Err(RegistrationError::PersistenceFailure(msg)) => tracing::error!(
                domain = %domain,
                error = %msg,
                "Registration failed in storage"
            ),
            Err(err) => tracing::warn!(
                domain = %domain,
                outcome = err.outcome(),
                "Registration rejected"
            ),
        }

        result
    }

    async fn register_valid(
        &self,
        candidate: CandidateUser,
        domain: &str,
    ) -> Result<RegisteredUser, RegistrationError> {
        if self.uniqueness.exists_by_email(&candidate.email).await? {
            return Err(RegistrationError::DuplicateEmail);
        }

        let company = self.directory.find_by_domain(domain).await?;
        let user = reconcile(candidate, company.as_ref());

        Ok(self.gateway.create_user(user).await?)
    }
}
