//! Domain models for ReferralBoard.

pub mod company;
pub mod user;
pub mod years_of_experience;

pub use company::{Company, NewCompany, DEFAULT_COMPANIES};
pub use user::{CandidateUser, FinalizedUser, RegisteredUser, NO_COMPANY_ID};
pub use years_of_experience::{
    years_of_experience_catalog, YearsOfExperience, YEARS_OF_EXPERIENCE_DESCRIPTIONS,
};
