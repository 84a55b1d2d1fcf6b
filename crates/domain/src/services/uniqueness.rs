//! E-mail uniqueness precondition.

use std::sync::Arc;

use crate::services::gateway::{GatewayError, RegistrationGateway};

/// Answers whether an e-mail already belongs to a registered user.
///
/// The answer is only a precondition: it is not atomic with the later create.
/// Gateways backed by a unique index report the lost race as
/// [`GatewayError::EmailTaken`] on create.
#[derive(Clone)]
pub struct UniquenessChecker {
    gateway: Arc<dyn RegistrationGateway>,
}

impl UniquenessChecker {
    pub fn new(gateway: Arc<dyn RegistrationGateway>) -> Self {
        Self { gateway }
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, GatewayError> {
        self.gateway.user_exists_by_email(email).await
    }
}
