//! Team validation

use thiserror::Error;

use crate::domain::email::is_valid_email;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team ID cannot be empty")]
    EmptyId,

    #[error("Team ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Team ID can only contain alphanumeric characters and hyphens")]
    InvalidIdCharacters,

    #[error("Team ID cannot start or end with a hyphen")]
    InvalidIdFormat,

    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Team name can only contain lowercase letters, numbers and hyphens")]
    InvalidNameCharacters,

    #[error("Team display name cannot be empty")]
    EmptyDisplayName,

    #[error("Team display name cannot exceed {0} characters")]
    DisplayNameTooLong(usize),

    #[error("Team email '{0}' is not a valid address")]
    InvalidEmail(String),
}

const MAX_TEAM_ID_LENGTH: usize = 50;
const MAX_TEAM_NAME_LENGTH: usize = 64;
const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Validate a team ID
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }

    if id.len() > MAX_TEAM_ID_LENGTH {
        return Err(TeamValidationError::IdTooLong(MAX_TEAM_ID_LENGTH));
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(TeamValidationError::InvalidIdCharacters);
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(TeamValidationError::InvalidIdFormat);
    }

    Ok(())
}

/// Validate a team name (the URL slug)
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.len() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';

    if !name.chars().all(allowed) || name.starts_with('-') || name.ends_with('-') {
        return Err(TeamValidationError::InvalidNameCharacters);
    }

    Ok(())
}

/// Validate a team display name
pub fn validate_display_name(display_name: &str) -> Result<(), TeamValidationError> {
    if display_name.trim().is_empty() {
        return Err(TeamValidationError::EmptyDisplayName);
    }

    if display_name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
        return Err(TeamValidationError::DisplayNameTooLong(MAX_DISPLAY_NAME_LENGTH));
    }

    Ok(())
}

/// Validate the team contact email; an empty email is allowed
pub fn validate_team_email(email: &str) -> Result<(), TeamValidationError> {
    if !email.is_empty() && !is_valid_email(email) {
        return Err(TeamValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}
