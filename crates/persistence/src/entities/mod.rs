//! Database entity definitions.

pub mod company;
pub mod user;
pub mod years_of_experience;

pub use company::CompanyEntity;
pub use user::UserEntity;
pub use years_of_experience::YearsOfExperienceEntity;
