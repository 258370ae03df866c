//! Invitation errors

use thiserror::Error;

use crate::domain::DomainError;

/// Failures reported by the invite dispatcher
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    #[error("No email rate limiter is configured")]
    Unconfigured,

    #[error("Unable to set up the email rate limiter: {0}")]
    SetupFailed(String),

    #[error("Email invite rate limit exceeded: {0}")]
    Throttled(String),
}

impl DispatchError {
    /// Stable machine-readable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Unconfigured => "app.email.no_rate_limiter.app_error",
            Self::SetupFailed(_) => "app.email.setup_rate_limiter.app_error",
            Self::Throttled(_) => "app.email.rate_limit_exceeded.app_error",
        }
    }
}

/// Errors raised while validating or sending a batch of invitations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvitationError {
    #[error("No email addresses were provided")]
    EmptyBatch,

    #[error("Invalid email address: {address}")]
    InvalidEmailFormat { address: String },

    #[error("The following email addresses do not belong to an accepted domain: {addresses}")]
    DomainRestricted { addresses: String },

    #[error("Email invitations are disabled")]
    Disabled,

    #[error("Team '{team_id}' not found")]
    TeamNotFound { team_id: String },

    #[error("Unable to load team '{team_id}': {detail}")]
    TeamLookup { team_id: String, detail: String },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl InvitationError {
    pub fn domain_restricted<S: AsRef<str>>(addresses: &[S]) -> Self {
        let addresses = addresses
            .iter()
            .map(|address| address.as_ref())
            .collect::<Vec<&str>>()
            .join(", ");

        Self::DomainRestricted { addresses }
    }

    /// Stable machine-readable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::EmptyBatch => "api.context.invalid_body_param.app_error",
            Self::InvalidEmailFormat { .. } | Self::DomainRestricted { .. } => {
                "api.team.invite_members.invalid_email.app_error"
            }
            Self::Disabled => "api.team.invite_members.disabled.app_error",
            Self::TeamNotFound { .. } => "app.team.get.find.app_error",
            Self::TeamLookup { .. } => "app.team.get.finding.app_error",
            Self::Dispatch(err) => err.id(),
            Self::Domain(_) => "app.team.invite_members.app_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_restricted_joins_addresses() {
        let err = InvitationError::domain_restricted(&["a@x.com", "b@y.com"]);
        assert_eq!(
            err,
            InvitationError::DomainRestricted {
                addresses: "a@x.com, b@y.com".to_string()
            }
        );
        assert!(err.to_string().ends_with("a@x.com, b@y.com"));
    }

    #[test]
    fn test_dispatch_error_ids_are_distinct() {
        let ids = [
            DispatchError::Unconfigured.id(),
            DispatchError::SetupFailed("bad".into()).id(),
            DispatchError::Throttled("slow down".into()).id(),
        ];

        assert_eq!(ids[0], "app.email.no_rate_limiter.app_error");
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn test_dispatch_error_converts() {
        let err: InvitationError = DispatchError::Unconfigured.into();
        assert_eq!(err.id(), "app.email.no_rate_limiter.app_error");
        assert_eq!(err.to_string(), "No email rate limiter is configured");
    }

    #[test]
    fn test_format_and_domain_share_id() {
        let format = InvitationError::InvalidEmailFormat {
            address: "nope".into(),
        };
        let domain = InvitationError::domain_restricted(&["a@x.com"]);
        assert_eq!(format.id(), domain.id());
    }
}
