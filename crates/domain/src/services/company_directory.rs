//! Domain-to-company lookup.

use std::sync::Arc;

use crate::models::Company;
use crate::services::gateway::{GatewayError, RegistrationGateway};

/// Read-only lookup surface over the persisted company set.
#[derive(Clone)]
pub struct CompanyDirectory {
    gateway: Arc<dyn RegistrationGateway>,
}

impl CompanyDirectory {
    pub fn new(gateway: Arc<dyn RegistrationGateway>) -> Self {
        Self { gateway }
    }

    /// Finds the company owning `domain`.
    ///
    /// `Ok(None)` is the common, expected outcome for personal or unknown
    /// domains. No case folding or punycode normalization is applied.
    /// `CompanyA.com` therefore does not resolve to `companya.com`.
    pub async fn find_by_domain(&self, domain: &str) -> Result<Option<Company>, GatewayError> {
        let company = self.gateway.find_company_by_domain(domain).await?;

        tracing::debug!(
            domain = %domain,
            company_id = company.as_ref().map(|c| c.id),
            "Company directory lookup"
        );

        Ok(company)
    }
}
