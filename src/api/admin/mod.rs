//! Team administration API (`/api/v4`)

pub mod invitations;
pub mod teams;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use super::state::AppState;

/// `{"status":"OK"}` acknowledgement body
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusOk {
    pub status: &'static str,
}

impl Default for StatusOk {
    fn default() -> Self {
        Self { status: "OK" }
    }
}

/// Create the team administration router
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/teams", post(teams::create_team))
        .route(
            "/teams/{team_id}",
            get(teams::get_team).delete(teams::delete_team),
        )
        .route(
            "/teams/{team_id}/invite/email",
            post(invitations::invite_users_to_team),
        )
}
