//! Graph fields of a team membership
//!
//! Each field resolves on its own when requested; nothing is cached on the
//! node between fields.

use async_trait::async_trait;
use tracing::debug;

use super::context::GraphContext;
use crate::domain::DomainError;
use crate::domain::role::Role;
use crate::domain::session::Permission;
use crate::domain::sidebar::SidebarCategoryWithChannels;
use crate::domain::team::{Team, TeamMember};
use crate::domain::user::User;

/// Field resolvers of the team-member graph type
#[async_trait]
pub trait TeamMemberFields: Send + Sync {
    async fn team(&self, ctx: &GraphContext) -> Result<Team, DomainError>;

    async fn user(&self, ctx: &GraphContext) -> Result<User, DomainError>;

    /// The member's sidebar categories in display order
    ///
    /// An id in the order list without a stored category resolves to `None`
    /// at that position.
    async fn sidebar_categories(
        &self,
        ctx: &GraphContext,
    ) -> Result<Vec<Option<SidebarCategoryWithChannels>>, DomainError>;

    /// Roles named by the membership, fetched in one lookup
    async fn roles(&self, ctx: &GraphContext) -> Result<Vec<Role>, DomainError>;
}

/// Graph node wrapping one membership record
#[derive(Debug, Clone)]
pub struct TeamMemberNode {
    member: TeamMember,
}

impl TeamMemberNode {
    pub fn new(member: TeamMember) -> Self {
        Self { member }
    }

    pub fn member(&self) -> &TeamMember {
        &self.member
    }
}

impl From<TeamMember> for TeamMemberNode {
    fn from(member: TeamMember) -> Self {
        Self::new(member)
    }
}

#[async_trait]
impl TeamMemberFields for TeamMemberNode {
    async fn team(&self, ctx: &GraphContext) -> Result<Team, DomainError> {
        let team_id = self.member.team_id();

        ctx.teams()
            .get(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", team_id)))
    }

    async fn user(&self, ctx: &GraphContext) -> Result<User, DomainError> {
        let user_id = self.member.user_id();

        ctx.users()
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))
    }

    async fn sidebar_categories(
        &self,
        ctx: &GraphContext,
    ) -> Result<Vec<Option<SidebarCategoryWithChannels>>, DomainError> {
        let user_id = self.member.user_id();

        if !ctx.session().can_act_as(user_id) {
            debug!(
                session_id = %ctx.session().id(),
                user_id = %user_id,
                "Denied sidebar categories for another user"
            );

            return Err(DomainError::permission_denied(
                Permission::EditOtherUsers.id(),
                "You do not have the appropriate permissions",
            ));
        }

        let categories = ctx
            .sidebar_categories()
            .get_categories(user_id, self.member.team_id())
            .await?;

        Ok(categories.in_order())
    }

    async fn roles(&self, ctx: &GraphContext) -> Result<Vec<Role>, DomainError> {
        ctx.roles().get_by_names(self.member.role_names()).await
    }
}
