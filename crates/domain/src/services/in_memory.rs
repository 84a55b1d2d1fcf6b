//! In-memory persistence gateway for development and testing.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{
    years_of_experience_catalog, Company, FinalizedUser, RegisteredUser, YearsOfExperience,
    DEFAULT_COMPANIES,
};
use crate::services::gateway::{GatewayError, ReferenceDirectory, RegistrationGateway};

#[derive(Debug, Default)]
struct Store {
    companies: Vec<Company>,
    years_of_experience: Vec<YearsOfExperience>,
    users: Vec<RegisteredUser>,
}

/// Gateway keeping every record in process memory.
///
/// Enforces e-mail uniqueness on insert the same way a unique index would, so
/// the race between the uniqueness check and the create still surfaces as
/// [`GatewayError::EmailTaken`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    store: Arc<RwLock<Store>>,
    create_attempts: Arc<AtomicUsize>,
    fail_writes: bool,
}

impl InMemoryGateway {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway holding the default companies and the
    /// years-of-experience enumeration.
    pub fn seeded() -> Self {
        let companies = DEFAULT_COMPANIES
            .iter()
            .zip(1..)
            .map(|(company, id)| Company::new(id, company.name, company.domain))
            .collect();

        let store = Store {
            companies,
            years_of_experience: years_of_experience_catalog(),
            users: Vec::new(),
        };

        Self {
            store: Arc::new(RwLock::new(store)),
            ..Self::default()
        }
    }

    /// Makes every subsequent `create_user` fail with a storage error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Inserts a user directly, bypassing reconciliation. Used for fixtures.
    ///
    /// The password is dropped, matching stored records that never carry it.
    pub async fn insert_user(
        &self,
        mut user: FinalizedUser,
        verified: bool,
    ) -> Result<RegisteredUser, GatewayError> {
        user.password.clear();

        let mut store = self.store.write().await;
        if store.users.iter().any(|u| u.user.email == user.email) {
            return Err(GatewayError::EmailTaken);
        }

        let id = store.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let registered = RegisteredUser {
            id,
            user,
            verified,
            created_at: Utc::now(),
        };
        store.users.push(registered.clone());
        Ok(registered)
    }

    /// Snapshot of all stored users in insertion order.
    pub async fn users(&self) -> Vec<RegisteredUser> {
        self.store.read().await.users.clone()
    }

    /// Number of times `create_user` has been called.
    pub fn create_attempts(&self) -> usize {
        self.create_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrationGateway for InMemoryGateway {
    async fn find_company_by_domain(
        &self,
        domain: &str,
    ) -> Result<Option<Company>, GatewayError> {
        let store = self.store.read().await;
        Ok(store.companies.iter().find(|c| c.domain == domain).cloned())
    }

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, GatewayError> {
        let store = self.store.read().await;
        Ok(store.users.iter().any(|u| u.user.email == email))
    }

    async fn create_user(&self, user: FinalizedUser) -> Result<RegisteredUser, GatewayError> {
        self.create_attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail_writes {
            tracing::warn!("In-memory gateway simulating write failure");
            return Err(GatewayError::Storage("simulated write failure".to_string()));
        }

        self.insert_user(user, false).await
    }
}

#[async_trait]
impl ReferenceDirectory for InMemoryGateway {
    async fn list_companies(&self) -> Result<Vec<Company>, GatewayError> {
        let mut companies = self.store.read().await.companies.clone();
        companies.sort_by_key(|c| c.id);
        Ok(companies)
    }

    async fn list_years_of_experience(&self) -> Result<Vec<YearsOfExperience>, GatewayError> {
        let mut years = self.store.read().await.years_of_experience.clone();
        years.sort_by_key(|y| y.id);
        Ok(years)
    }
}
