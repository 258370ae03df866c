//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("User ID must start and end with a letter or number")]
    InvalidIdEdge,

    #[error("User ID contains invalid character: '{0}'. Only alphanumeric characters and hyphens are allowed")]
    InvalidIdCharacter(char),

    #[error("Username must be between {0} and {1} characters")]
    UsernameLength(usize, usize),

    #[error("Username contains invalid character: '{0}'")]
    InvalidUsernameCharacter(char),
}

const MAX_USER_ID_LENGTH: usize = 50;
const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 64;

/// Validate a user ID
///
/// Rules:
/// - Cannot be empty
/// - Maximum 50 characters
/// - Only alphanumeric characters and hyphens
/// - Must start and end with alphanumeric
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if id.len() > MAX_USER_ID_LENGTH {
        return Err(UserValidationError::IdTooLong(MAX_USER_ID_LENGTH));
    }

    if let Some(c) = id.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(UserValidationError::InvalidIdCharacter(c));
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(UserValidationError::InvalidIdEdge);
    }

    Ok(())
}

/// Validate a username: lowercase letters, digits, `.`, `_` and `-`
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    let len = username.chars().count();

    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(UserValidationError::UsernameLength(
            MIN_USERNAME_LENGTH,
            MAX_USERNAME_LENGTH,
        ));
    }

    if let Some(c) = username
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')))
    {
        return Err(UserValidationError::InvalidUsernameCharacter(c));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_ids() {
        assert!(validate_user_id("user-1").is_ok());
        assert!(validate_user_id("a").is_ok());
        assert!(validate_user_id("9x7k2m").is_ok());
    }

    #[test]
    fn test_invalid_user_ids() {
        assert_eq!(validate_user_id(""), Err(UserValidationError::EmptyId));
        assert_eq!(
            validate_user_id(&"a".repeat(51)),
            Err(UserValidationError::IdTooLong(50))
        );
        assert_eq!(
            validate_user_id("user_1"),
            Err(UserValidationError::InvalidIdCharacter('_'))
        );
        assert_eq!(validate_user_id("-user"), Err(UserValidationError::InvalidIdEdge));
    }

    #[test]
    fn test_usernames() {
        assert!(validate_username("jane.doe").is_ok());
        assert!(validate_username("ops_bot-2").is_ok());
        assert_eq!(
            validate_username("jd"),
            Err(UserValidationError::UsernameLength(3, 64))
        );
        assert_eq!(
            validate_username("Jane"),
            Err(UserValidationError::InvalidUsernameCharacter('J'))
        );
    }
}
