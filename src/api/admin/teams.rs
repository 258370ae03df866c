//! Team administration endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::{Team, TeamType};
use crate::infrastructure::team::CreateTeamRequest;

use super::StatusOk;

/// Body of `POST /api/v4/teams`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "type")]
    pub team_type: TeamType,
    #[serde(default)]
    pub allowed_domains: Option<String>,
}

impl From<CreateTeamApiRequest> for CreateTeamRequest {
    fn from(request: CreateTeamApiRequest) -> Self {
        Self {
            name: request.name,
            display_name: request.display_name,
            description: request.description,
            email: request.email,
            team_type: request.team_type,
            allowed_domains: request.allowed_domains,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteTeamQuery {
    #[serde(default)]
    pub permanent: bool,
}

/// POST /api/v4/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    debug!(name = %request.name, "Admin creating team");

    let team = state.team_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /api/v4/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    debug!(team_id = %team_id, "Admin getting team");

    let team = state.team_service.get(&team_id).await?;

    Ok(Json(team))
}

/// DELETE /api/v4/teams/{team_id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Query(query): Query<DeleteTeamQuery>,
) -> Result<Json<StatusOk>, ApiError> {
    debug!(team_id = %team_id, permanent = query.permanent, "Admin deleting team");

    state.team_service.delete(&team_id, query.permanent).await?;

    Ok(Json(StatusOk::default()))
}
