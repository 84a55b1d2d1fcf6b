//! Domain services for ReferralBoard.
//!
//! Services contain the registration logic that operates on domain models.

pub mod company_directory;
pub mod gateway;
pub mod in_memory;
pub mod registration;
pub mod uniqueness;

pub use company_directory::CompanyDirectory;
pub use gateway::{GatewayError, ReferenceDirectory, RegistrationGateway};
pub use in_memory::InMemoryGateway;
pub use registration::{reconcile, RegistrationError, RegistrationService};
pub use uniqueness::UniquenessChecker;
