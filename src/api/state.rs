//! Application state for shared services

use std::sync::Arc;

use crate::api::graph::GraphContext;
use crate::domain::invitation::{BatchResult, InvitationError, InviteMode};
use crate::domain::role::RoleRepository;
use crate::domain::session::Session;
use crate::domain::sidebar::SidebarCategoryRepository;
use crate::domain::team::{Team, TeamRepository};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::invitation::InvitationService;
use crate::infrastructure::team::{CreateTeamRequest, TeamService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamServiceTrait>,
    pub invitation_service: Arc<dyn InvitationServiceTrait>,
    pub lookups: GraphLookups,
}

/// Lookup collaborators handed to graph field resolution
#[derive(Clone)]
pub struct GraphLookups {
    pub teams: Arc<dyn TeamRepository>,
    pub users: Arc<dyn UserRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub sidebar_categories: Arc<dyn SidebarCategoryRepository>,
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError>;
    async fn get(&self, id: &str) -> Result<Team, DomainError>;
    async fn delete(&self, id: &str, permanent: bool) -> Result<(), DomainError>;
}

/// Trait for invitation service operations
#[async_trait::async_trait]
pub trait InvitationServiceTrait: Send + Sync {
    async fn invite_to_team(
        &self,
        team_id: &str,
        addresses: Vec<String>,
        mode: InviteMode,
    ) -> Result<BatchResult, InvitationError>;
}

#[async_trait::async_trait]
impl<R: TeamRepository + 'static> TeamServiceTrait for TeamService<R> {
    async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        TeamService::create(self, request).await
    }

    async fn get(&self, id: &str) -> Result<Team, DomainError> {
        TeamService::get(self, id).await
    }

    async fn delete(&self, id: &str, permanent: bool) -> Result<(), DomainError> {
        TeamService::delete(self, id, permanent).await
    }
}

#[async_trait::async_trait]
impl<R: TeamRepository + 'static> InvitationServiceTrait for InvitationService<R> {
    async fn invite_to_team(
        &self,
        team_id: &str,
        addresses: Vec<String>,
        mode: InviteMode,
    ) -> Result<BatchResult, InvitationError> {
        InvitationService::invite_to_team(self, team_id, &addresses, mode).await
    }
}

impl AppState {
    pub fn new(
        team_service: Arc<dyn TeamServiceTrait>,
        invitation_service: Arc<dyn InvitationServiceTrait>,
        lookups: GraphLookups,
    ) -> Self {
        Self {
            team_service,
            invitation_service,
            lookups,
        }
    }

    /// Resolution context for graph fields requested under `session`
    pub fn graph_context(&self, session: Session) -> GraphContext {
        GraphContext::new(
            session,
            self.lookups.teams.clone(),
            self.lookups.users.clone(),
            self.lookups.roles.clone(),
            self.lookups.sidebar_categories.clone(),
        )
    }
}
