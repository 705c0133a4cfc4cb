//! Account field validation helpers.
//!
//! Column limits match the schema in
//! `20260301000001_create_users_table.sql`.

use crate::error::CoreError;

/// Maximum length of usernames, emails, and name fields.
pub const MAX_FIELD_LENGTH: usize = 64;

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Validate a username: non-empty, within length bounds, no whitespace.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.len() < MIN_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Username must be at least {MIN_USERNAME_LENGTH} characters long"
        )));
    }
    if username.len() > MAX_FIELD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Username must be at most {MAX_FIELD_LENGTH} characters long"
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Username must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validate an email address: a single `@` with a dotted domain part,
/// within length bounds. Deliverability is the mail server's problem.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.len() > MAX_FIELD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Email must be at most {MAX_FIELD_LENGTH} characters long"
        )));
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => {
            return Err(CoreError::Validation(
                "Email must contain exactly one '@'".to_string(),
            ))
        }
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate an optional name field (first/last name) against the length bound.
pub fn validate_name(name: &str, label: &str) -> Result<(), CoreError> {
    if name.len() > MAX_FIELD_LENGTH {
        return Err(CoreError::Validation(format!(
            "{label} must be at most {MAX_FIELD_LENGTH} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username_passes() {
        assert!(validate_username("ada").is_ok());
        assert!(validate_username("ada_lovelace-1815").is_ok());
    }

    #[test]
    fn short_or_spaced_username_fails() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("ada lovelace").is_err());
        assert!(validate_username(&"x".repeat(65)).is_err());
    }

    #[test]
    fn valid_email_passes() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b+tag@sub.example.org").is_ok());
    }

    #[test]
    fn malformed_email_fails() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("ada@localhost").is_err());
    }

    #[test]
    fn overlong_name_fails() {
        assert!(validate_name(&"x".repeat(65), "First name").is_err());
        assert!(validate_name("Ada", "First name").is_ok());
    }
}
