//! Team administration API
//!
//! Team creation and deletion, email invitations with domain restrictions
//! and strict or graceful error reporting, and graph field resolvers for
//! team memberships.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, GraphLookups};
use infrastructure::{
    audit::TracingAuditSink,
    email::{LoggingMailTransport, MailTransport, RateLimitedInviteDispatcher},
    invitation::InvitationService,
    role::InMemoryRoleRepository,
    sidebar::InMemorySidebarCategoryRepository,
    team::{InMemoryTeamRepository, TeamService},
    user::InMemoryUserRepository,
};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state, logging outgoing mail instead of sending it
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    create_app_state_with_transport(config, Arc::new(LoggingMailTransport::new())).await
}

/// Create the application state with a specific mail transport
pub async fn create_app_state_with_transport(
    config: &AppConfig,
    transport: Arc<dyn MailTransport>,
) -> anyhow::Result<AppState> {
    let audit = Arc::new(TracingAuditSink::new());
    let teams = Arc::new(InMemoryTeamRepository::new());

    let rate_limit = config.email.invite_rate_limit();
    info!(
        enabled = rate_limit.is_some(),
        invitations = config.service.enable_email_invitations,
        "Configuring email invitations"
    );

    let dispatcher = Arc::new(RateLimitedInviteDispatcher::new(rate_limit, transport));

    let team_service = Arc::new(TeamService::new(teams.clone(), audit.clone()));
    let invitation_service = Arc::new(InvitationService::new(
        teams.clone(),
        dispatcher,
        audit,
        config.invitation_settings(),
    ));

    let lookups = GraphLookups {
        teams,
        users: Arc::new(InMemoryUserRepository::new()),
        roles: Arc::new(InMemoryRoleRepository::with_builtin_roles()),
        sidebar_categories: Arc::new(InMemorySidebarCategoryRepository::new()),
    };

    Ok(AppState::new(team_service, invitation_service, lookups))
}
