//! Repository implementations for database operations.

pub mod company;
pub mod user;
pub mod years_of_experience;

pub use company::CompanyRepository;
pub use user::UserRepository;
pub use years_of_experience::YearsOfExperienceRepository;
