//! Common validation utilities.

use validator::{ValidateEmail, ValidationError};

/// Returns `true` when `email` is a syntactically valid address.
///
/// An address is accepted when it has exactly one `@`, a non-empty local
/// part, a domain part containing at least one `.`, no whitespace anywhere,
/// and passes the HTML5 e-mail grammar enforced by `validator`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    email.validate_email()
}

/// `validator` adapter for [`is_valid_email`].
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email_syntax");
        err.message = Some("Invalid email format".into());
        Err(err)
    }
}

/// Returns the domain part of an address: everything after the last `@`.
///
/// No normalization is applied; `User@CompanyA.com` yields `CompanyA.com`.
pub fn email_domain(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@companya.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("mailaddress2a@asd.com"));
        assert!(is_valid_email("a+tag@example.co.uk"));
    }

    #[test]
    fn test_generated_emails_are_valid() {
        for _ in 0..20 {
            let email: String = SafeEmail().fake();
            assert!(is_valid_email(&email), "expected {email} to be valid");
        }
    }

    #[test]
    fn test_missing_at_sign() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("mailaddress4"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_domain_without_dot() {
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@companya"));
    }

    #[test]
    fn test_multiple_at_signs() {
        assert!(!is_valid_email("user@foo@companya.com"));
        assert!(!is_valid_email("@@companya.com"));
    }

    #[test]
    fn test_empty_parts() {
        assert!(!is_valid_email("@companya.com"));
        assert!(!is_valid_email("user@"));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(!is_valid_email("user name@companya.com"));
        assert!(!is_valid_email(" user@companya.com"));
        assert!(!is_valid_email("user@companya.com\n"));
        assert!(!is_valid_email("user@company a.com"));
    }

    #[test]
    fn test_validate_email_address_error_message() {
        assert!(validate_email_address("user@companya.com").is_ok());

        let err = validate_email_address("not-an-email").unwrap_err();
        assert_eq!(err.code, "email_syntax");
        assert_eq!(err.message.unwrap().to_string(), "Invalid email format");
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("user@companya.com"), Some("companya.com"));
        assert_eq!(email_domain("User@CompanyA.com"), Some("CompanyA.com"));
        assert_eq!(email_domain("a@b@c.com"), Some("c.com"));
        assert_eq!(email_domain("no-at-sign"), None);
    }
}
