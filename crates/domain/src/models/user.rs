//! Registration domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `current_company_id` of a user whose e-mail domain matches no company.
pub const NO_COMPANY_ID: i64 = 0;

/// A registration submission as received from the caller.
///
/// Untrusted. Only `email` is validated; absent text fields deserialize to
/// empty strings and an absent `yearsOfExperienceId` to 0. Unknown fields such
/// as `currentCompanyId` are ignored, so callers cannot pick a company id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateUser {
    pub first_name: String,
    pub last_name: String,
    #[validate(custom(function = "shared::validation::validate_email_address"))]
    pub email: String,
    pub password: String,
    pub current_location: String,
    pub current_company_name: String,
    pub current_position: String,
    pub school: String,
    pub years_of_experience_id: i64,
}

/// A reconciled user record, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // Never echo credentials back
    pub password: String,
    pub current_location: String,
    pub current_company_id: i64,
    pub current_company_name: String,
    pub current_position: String,
    pub school: String,
    pub years_of_experience_id: i64,
}

/// A persisted user, as returned by the persistence gateway.
///
/// `user.password` is always empty: stored credentials never leave the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: i64,
    #[serde(flatten)]
    pub user: FinalizedUser,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finalized() -> FinalizedUser {
        FinalizedUser {
            first_name: "Mallika".to_string(),
            last_name: "Kumar".to_string(),
            email: "mailaddress4@asd.com".to_string(),
            password: "root".to_string(),
            current_location: "Mumbai".to_string(),
            current_company_id: NO_COMPANY_ID,
            current_company_name: "Company ABCD".to_string(),
            current_position: "Software Engineer".to_string(),
            school: "University of Mumbai".to_string(),
            years_of_experience_id: 1,
        }
    }

    #[test]
    fn test_candidate_missing_fields_default_to_empty() {
        let candidate: CandidateUser =
            serde_json::from_str(r#"{"email":"user@companya.com","lastName":"Kumar"}"#).unwrap();
        assert_eq!(candidate.email, "user@companya.com");
        assert_eq!(candidate.last_name, "Kumar");
        assert_eq!(candidate.first_name, "");
        assert_eq!(candidate.current_company_name, "");
        assert_eq!(candidate.years_of_experience_id, 0);
    }

    #[test]
    fn test_candidate_ignores_caller_company_id() {
        let candidate: CandidateUser = serde_json::from_str(
            r#"{"email":"user@companya.com","currentCompanyId":42,"verified":true}"#,
        )
        .unwrap();
        assert_eq!(candidate.email, "user@companya.com");
    }

    #[test]
    fn test_candidate_email_validation() {
        let mut candidate = CandidateUser {
            email: "user@companya.com".to_string(),
            ..Default::default()
        };
        assert!(candidate.validate().is_ok());

        candidate.email = "not-an-email".to_string();
        let errors = candidate.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_candidate_names_are_not_validated() {
        let candidate = CandidateUser {
            email: "user@companya.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            ..Default::default()
        };
        assert!(candidate.validate().is_ok());
    }

    #[test]
    fn test_registered_user_json_shape() {
        let user = RegisteredUser {
            id: 5,
            user: finalized(),
            verified: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["lastName"], "Kumar");
        assert_eq!(json["currentCompanyId"], 0);
        assert_eq!(json["currentCompanyName"], "Company ABCD");
        assert_eq!(json["yearsOfExperienceId"], 1);
        assert_eq!(json["verified"], false);
        assert!(json["createdAt"].is_string());
        assert!(json.get("password").is_none());
    }
}
