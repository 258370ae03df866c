//! API error payloads

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::invitation::{DispatchError, InvitationError};

/// Error class reported in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    PermissionError,
    NotFoundError,
    ConflictError,
    RateLimitError,
    NotImplementedError,
    ServerError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::PermissionError => write!(f, "permission_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ConflictError => write!(f, "conflict_error"),
            Self::RateLimitError => write!(f, "rate_limit_error"),
            Self::NotImplementedError => write!(f, "not_implemented_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
///
/// `code` carries the stable machine-readable id, e.g.
/// `api.team.invite_members.invalid_email.app_error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ApiErrorType::PermissionError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorType::ConflictError, message)
    }

    /// Rate limit error; reported as 413 like the rest of the invite API
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, ApiErrorType::RateLimitError, message)
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_IMPLEMENTED, ApiErrorType::NotImplementedError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            message,
        )
    }

    pub fn detail(&self) -> &ApiErrorDetail {
        &self.response.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::InvalidId { message } => Self::bad_request(message).with_param("id"),
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::PermissionDenied { permission, message } => Self::forbidden(message)
                .with_param(permission)
                .with_code("api.context.permissions.app_error"),
            DomainError::Internal { message } => Self::internal(message),
            DomainError::Storage { message } => Self::internal(message),
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        let message = err.to_string();

        let error = match &err {
            DispatchError::Unconfigured => Self::unavailable(message),
            DispatchError::SetupFailed(_) => Self::internal(message),
            DispatchError::Throttled(_) => Self::rate_limited(message),
        };

        error.with_code(err.id())
    }
}

impl From<InvitationError> for ApiError {
    fn from(err: InvitationError) -> Self {
        let code = err.id();
        let message = err.to_string();

        match err {
            InvitationError::EmptyBatch => Self::bad_request(message)
                .with_param("user_email")
                .with_code(code),
            InvitationError::InvalidEmailFormat { .. } | InvitationError::DomainRestricted { .. } => {
                Self::bad_request(message).with_code(code)
            }
            InvitationError::Disabled => Self::not_implemented(message).with_code(code),
            InvitationError::TeamNotFound { .. } => Self::not_found(message).with_code(code),
            InvitationError::TeamLookup { .. } => Self::internal(message).with_code(code),
            InvitationError::Dispatch(dispatch) => Self::from(dispatch),
            InvitationError::Domain(domain) => {
                let error = Self::from(domain);
                if error.response.error.code.is_some() {
                    error
                } else {
                    error.with_code(code)
                }
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_with_param() {
        let err = ApiError::bad_request("Invalid value")
            .with_param("user_email")
            .with_code("api.context.invalid_body_param.app_error");

        assert_eq!(err.detail().param, Some("user_email".to_string()));
        assert_eq!(
            err.detail().code,
            Some("api.context.invalid_body_param.app_error".to_string())
        );
    }

    #[test]
    fn test_domain_error_conversion() {
        let api_err: ApiError = DomainError::not_found("Team not found").into();
        assert_eq!(api_err.status, StatusCode::NOT_FOUND);

        let api_err: ApiError = DomainError::conflict("exists").into();
        assert_eq!(api_err.status, StatusCode::CONFLICT);

        let api_err: ApiError =
            DomainError::permission_denied("edit_other_users", "denied").into();
        assert_eq!(api_err.status, StatusCode::FORBIDDEN);
        assert_eq!(api_err.detail().param, Some("edit_other_users".to_string()));
    }

    #[test]
    fn test_invitation_error_statuses() {
        let cases = [
            (InvitationError::EmptyBatch, StatusCode::BAD_REQUEST),
            (
                InvitationError::InvalidEmailFormat {
                    address: "x".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                InvitationError::domain_restricted(&["a@b.com"]),
                StatusCode::BAD_REQUEST,
            ),
            (InvitationError::Disabled, StatusCode::NOT_IMPLEMENTED),
            (
                InvitationError::TeamNotFound {
                    team_id: "t".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                InvitationError::TeamLookup {
                    team_id: "t".to_string(),
                    detail: "boom".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                InvitationError::Dispatch(DispatchError::Unconfigured),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                InvitationError::Dispatch(DispatchError::SetupFailed("x".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                InvitationError::Dispatch(DispatchError::Throttled("x".to_string())),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
        ];

        for (error, status) in cases {
            let code = error.id();
            let api_err = ApiError::from(error);
            assert_eq!(api_err.status, status);
            assert_eq!(api_err.detail().code.as_deref(), Some(code));
        }
    }

    #[test]
    fn test_empty_batch_names_param() {
        let api_err = ApiError::from(InvitationError::EmptyBatch);
        assert_eq!(api_err.detail().param.as_deref(), Some("user_email"));
    }

    #[test]
    fn test_throttled_is_rate_limit_error() {
        let api_err = ApiError::from(DispatchError::Throttled("slow down".to_string()));
        assert_eq!(api_err.detail().error_type, ApiErrorType::RateLimitError);
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::from(InvitationError::Disabled);
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("not_implemented_error"));
        assert!(json.contains("api.team.invite_members.disabled.app_error"));
        assert!(!json.contains("param"));
    }
}
