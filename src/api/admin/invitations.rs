//! Team email invitation endpoint

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiErrorDetail, Json};
use crate::domain::invitation::{BatchResult, InviteMode, InviteOutcome};

use super::StatusOk;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InviteQuery {
    #[serde(default)]
    pub graceful: Option<String>,
}

/// One entry of a graceful-mode response
#[derive(Debug, Clone, Serialize)]
pub struct InviteOutcomeResponse {
    pub email: String,
    pub error: Option<ApiErrorDetail>,
}

impl From<InviteOutcome> for InviteOutcomeResponse {
    fn from(outcome: InviteOutcome) -> Self {
        Self {
            email: outcome.email,
            error: outcome
                .error
                .map(|e| ApiError::from(e).response.error),
        }
    }
}

/// Addresses from the request body; anything but a JSON string array is empty
fn parse_addresses(body: &[u8]) -> Vec<String> {
    serde_json::from_slice::<Vec<String>>(body).unwrap_or_default()
}

/// POST /api/v4/teams/{team_id}/invite/email
pub async fn invite_users_to_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Query(query): Query<InviteQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mode = InviteMode::from_graceful_param(query.graceful.as_deref());
    let addresses = parse_addresses(&body);

    debug!(team_id = %team_id, count = addresses.len(), ?mode, "Admin inviting users to team");

    let result = state
        .invitation_service
        .invite_to_team(&team_id, addresses, mode)
        .await?;

    let response = match result {
        BatchResult::Dispatched { .. } => Json(StatusOk::default()).into_response(),
        BatchResult::PerAddress(outcomes) => {
            let outcomes: Vec<InviteOutcomeResponse> =
                outcomes.into_iter().map(InviteOutcomeResponse::from).collect();
            Json(outcomes).into_response()
        }
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addresses() {
        assert_eq!(
            parse_addresses(br#"["a@corp.com","B@corp.com"]"#),
            vec!["a@corp.com", "B@corp.com"]
        );
        assert!(parse_addresses(b"").is_empty());
        assert!(parse_addresses(b"not json").is_empty());
        assert!(parse_addresses(br#"{"emails":["a@corp.com"]}"#).is_empty());
        assert!(parse_addresses(b"[1, 2]").is_empty());
    }
}
