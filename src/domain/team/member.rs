//! Team membership record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::TeamId;
use crate::domain::user::UserId;

/// A user's membership in a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    team_id: TeamId,
    user_id: UserId,
    /// Space-separated role names, e.g. `"team_user team_admin"`
    roles: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_at: Option<DateTime<Utc>>,
}

impl TeamMember {
    pub fn new(team_id: TeamId, user_id: UserId) -> Self {
        Self {
            team_id,
            user_id,
            roles: String::new(),
            delete_at: None,
        }
    }

    pub fn with_roles(mut self, roles: impl Into<String>) -> Self {
        self.roles = roles.into();
        self
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn roles(&self) -> &str {
        &self.roles
    }

    /// Role names in the order they appear in the role string
    pub fn role_names(&self) -> Vec<String> {
        self.roles.split_whitespace().map(String::from).collect()
    }

    pub fn is_deleted(&self) -> bool {
        self.delete_at.is_some()
    }
}
