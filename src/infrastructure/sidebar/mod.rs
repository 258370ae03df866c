//! Sidebar category infrastructure

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::DomainError;
use crate::domain::sidebar::{
    SidebarCategory, SidebarCategoryRepository, SidebarCategorySet, SidebarCategoryType,
    SidebarCategoryWithChannels,
};
use crate::domain::team::TeamId;
use crate::domain::user::UserId;

type CategoryKey = (UserId, TeamId);

/// In-memory category store
///
/// A user without stored categories in a team gets the default
/// favorites / channels / direct messages set on first read.
#[derive(Debug, Default)]
pub struct InMemorySidebarCategoryRepository {
    categories: RwLock<HashMap<CategoryKey, SidebarCategorySet>>,
}

impl InMemorySidebarCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn default_categories(user_id: &UserId, team_id: &TeamId) -> SidebarCategorySet {
    let defaults = [
        ("favorites", "Favorites", SidebarCategoryType::Favorites),
        ("channels", "Channels", SidebarCategoryType::Channels),
        ("direct_messages", "Direct Messages", SidebarCategoryType::DirectMessages),
    ];

    let categories: Vec<SidebarCategoryWithChannels> = defaults
        .into_iter()
        .map(|(prefix, display_name, category_type)| {
            let id = format!("{}_{}_{}", prefix, user_id, team_id);
            SidebarCategoryWithChannels::new(
                SidebarCategory::new(id, user_id.clone(), team_id.clone(), display_name, category_type),
                Vec::new(),
            )
        })
        .collect();

    let order = categories.iter().map(|c| c.id().to_string()).collect();
    SidebarCategorySet::new(categories, order)
}

#[async_trait]
impl SidebarCategoryRepository for InMemorySidebarCategoryRepository {
    async fn get_categories(
        &self,
        user_id: &UserId,
        team_id: &TeamId,
    ) -> Result<SidebarCategorySet, DomainError> {
        let key = (user_id.clone(), team_id.clone());

        if let Some(set) = self.categories.read().await.get(&key) {
            return Ok(set.clone());
        }

        debug!(user_id = %user_id, team_id = %team_id, "Creating default sidebar categories");

        let mut categories = self.categories.write().await;
        let set = categories
            .entry(key)
            .or_insert_with(|| default_categories(user_id, team_id));

        Ok(set.clone())
    }

    async fn save_categories(
        &self,
        user_id: &UserId,
        team_id: &TeamId,
        categories: SidebarCategorySet,
    ) -> Result<(), DomainError> {
        self.categories
            .write()
            .await
            .insert((user_id.clone(), team_id.clone()), categories);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (UserId, TeamId) {
        (UserId::new("user1").unwrap(), TeamId::new("team1").unwrap())
    }

    #[tokio::test]
    async fn test_defaults_created_on_first_read() {
        let repo = InMemorySidebarCategoryRepository::new();
        let (user_id, team_id) = ids();

        let set = repo.get_categories(&user_id, &team_id).await.unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.order(),
            &[
                "favorites_user1_team1".to_string(),
                "channels_user1_team1".to_string(),
                "direct_messages_user1_team1".to_string(),
            ]
        );

        let again = repo.get_categories(&user_id, &team_id).await.unwrap();
        assert_eq!(set, again);
    }

    #[tokio::test]
    async fn test_save_replaces_set() {
        let repo = InMemorySidebarCategoryRepository::new();
        let (user_id, team_id) = ids();

        repo.save_categories(&user_id, &team_id, SidebarCategorySet::default())
            .await
            .unwrap();

        let set = repo.get_categories(&user_id, &team_id).await.unwrap();
        assert!(set.is_empty());
    }
}
