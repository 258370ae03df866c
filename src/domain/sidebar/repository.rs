//! Sidebar category repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::SidebarCategorySet;
use crate::domain::DomainError;
use crate::domain::team::TeamId;
use crate::domain::user::UserId;

/// Storage for per-user, per-team sidebar categories
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SidebarCategoryRepository: Send + Sync {
    /// Fetch the category map and order list for a user in a team
    async fn get_categories(
        &self,
        user_id: &UserId,
        team_id: &TeamId,
    ) -> Result<SidebarCategorySet, DomainError>;

    /// Replace the categories for a user in a team
    async fn save_categories(
        &self,
        user_id: &UserId,
        team_id: &TeamId,
        categories: SidebarCategorySet,
    ) -> Result<(), DomainError>;
}
