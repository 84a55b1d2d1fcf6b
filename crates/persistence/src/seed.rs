//! Startup initialization of reference and demo data.
//!
//! Runs once before the server accepts requests. Every insert is idempotent,
//! so restarting against an existing database leaves it unchanged.

use domain::models::{
    CandidateUser, Company, DEFAULT_COMPANIES, YEARS_OF_EXPERIENCE_DESCRIPTIONS,
};
use domain::services::reconcile;
use shared::validation::email_domain;
use sqlx::PgPool;
use thiserror::Error;

use crate::gateway::{hash_off_thread, is_unique_violation};
use crate::repositories::{CompanyRepository, UserRepository, YearsOfExperienceRepository};

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password error: {0}")]
    Password(String),
}

/// Which data sets to seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// Years-of-experience enumeration and default companies.
    pub reference_data: bool,
    /// Verified demo accounts (password `root`).
    pub demo_users: bool,
}

/// Counts of rows actually inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub years_of_experience: usize,
    pub companies: usize,
    pub users: usize,
}

const DEMO_PASSWORD: &str = "root";

/// Demo accounts as they would be submitted at registration.
///
/// Company fields are resolved against the directory at seed time, so ids
/// follow whatever the `companies` table assigned.
pub fn demo_users() -> Vec<CandidateUser> {
    let demo = |first: &str,
                last: &str,
                email: &str,
                location: &str,
                company_name: &str,
                position: &str,
                years_id: i64| CandidateUser {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
        current_location: location.to_string(),
        current_company_name: company_name.to_string(),
        current_position: position.to_string(),
        school: "UF".to_string(),
        years_of_experience_id: years_id,
    };

    vec![
        demo("Shashank", "Kumar", "mailaddress2@companya.com", "Florida", "Company A", "Intern", 1),
        demo("John", "Doe", "mailaddress1@companyb.com", "California", "Company B", "Intern", 1),
        demo("user3", "demo3", "mailaddress3@companyc.com", "California", "Company C", "Software Engineer", 2),
        demo("user4", "demo4", "mailaddress4@gmail.com", "California", "UF", "Student", 3),
    ]
}

/// Seeds the requested data sets.
pub async fn initialize(pool: &PgPool, options: SeedOptions) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();
    let companies = CompanyRepository::new(pool.clone());

    if options.reference_data {
        let years = YearsOfExperienceRepository::new(pool.clone());
        for (description, id) in YEARS_OF_EXPERIENCE_DESCRIPTIONS.iter().zip(1..) {
            if years.insert_if_absent(id, description).await? {
                report.years_of_experience += 1;
            }
        }

        for company in DEFAULT_COMPANIES.iter() {
            if companies.insert_if_absent(company.name, company.domain).await? {
                report.companies += 1;
            }
        }
    }

    if options.demo_users {
        let users = UserRepository::new(pool.clone());
        for candidate in demo_users() {
            if users.exists_by_email(&candidate.email).await? {
                continue;
            }

            let company: Option<Company> = match email_domain(&candidate.email) {
                Some(domain) => companies.find_by_domain(domain).await?.map(Into::into),
                None => None,
            };
            let user = reconcile(candidate, company.as_ref());

            let password_hash = hash_off_thread(user.password.clone())
                .await
                .map_err(|e| SeedError::Password(e.to_string()))?;
            match users.create_user(&user, &password_hash, true).await {
                Ok(_) => report.users += 1,
                // Another instance seeded the same account first.
                Err(err) if is_unique_violation(&err) => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    tracing::info!(
        years_of_experience = report.years_of_experience,
        companies = report.companies,
        users = report.users,
        "Seed data applied"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::NO_COMPANY_ID;
    use shared::validation::is_valid_email;
    use std::collections::HashSet;

    #[test]
    fn test_demo_users_have_unique_valid_emails() {
        let users = demo_users();
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), users.len());
        assert!(users.iter().all(|u| is_valid_email(&u.email)));
    }

    #[test]
    fn test_demo_user_without_company_domain_keeps_name() {
        let users = demo_users();
        let gmail = users
            .iter()
            .find(|u| u.email.ends_with("@gmail.com"))
            .unwrap()
            .clone();

        let user = reconcile(gmail, None);
        assert_eq!(user.current_company_id, NO_COMPANY_ID);
        assert_eq!(user.current_company_name, "UF");
    }

    #[test]
    fn test_seed_options_default_is_noop() {
        let options = SeedOptions::default();
        assert!(!options.reference_data);
        assert!(!options.demo_users);
    }
}
