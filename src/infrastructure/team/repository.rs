//! In-memory team repository implementation

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::team::{Team, TeamId, TeamRepository};

/// Team store keyed by id; team names are unique
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<TeamId, Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        Ok(self.teams.read().await.get(id).cloned())
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        if teams.contains_key(team.id()) {
            return Err(DomainError::conflict(format!(
                "Team '{}' already exists",
                team.id()
            )));
        }

        if teams.values().any(|existing| existing.name() == team.name()) {
            return Err(DomainError::conflict(format!(
                "A team named '{}' already exists",
                team.name()
            )));
        }

        teams.insert(team.id().clone(), team.clone());
        Ok(team)
    }

    async fn update(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        match teams.get_mut(team.id()) {
            Some(existing) => {
                *existing = team.clone();
                Ok(team)
            }
            None => Err(DomainError::not_found(format!(
                "Team '{}' not found",
                team.id()
            ))),
        }
    }

    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError> {
        Ok(self.teams.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_team(id: &str, name: &str) -> Team {
        Team::new(TeamId::new(id).unwrap(), name, "Display").unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryTeamRepository::new();
        let team = create_team("team1", "core");

        repo.create(team.clone()).await.unwrap();

        let retrieved = repo.get(team.id()).await.unwrap();
        assert_eq!(retrieved, Some(team));
    }

    #[tokio::test]
    async fn test_create_duplicate_id() {
        let repo = InMemoryTeamRepository::new();
        repo.create(create_team("team1", "core")).await.unwrap();

        let result = repo.create(create_team("team1", "other")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let repo = InMemoryTeamRepository::new();
        repo.create(create_team("team1", "core")).await.unwrap();

        let result = repo.create(create_team("team2", "core")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryTeamRepository::new();
        let result = repo.update(create_team("team1", "core")).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_soft_delete_round_trip() {
        let repo = InMemoryTeamRepository::new();
        let mut team = repo.create(create_team("team1", "core")).await.unwrap();

        team.soft_delete();
        repo.update(team.clone()).await.unwrap();

        let stored = repo.get(team.id()).await.unwrap().unwrap();
        assert!(stored.is_deleted());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryTeamRepository::new();
        let team = repo.create(create_team("team1", "core")).await.unwrap();

        assert!(repo.delete(team.id()).await.unwrap());
        assert!(!repo.delete(team.id()).await.unwrap());
        assert!(repo.get(team.id()).await.unwrap().is_none());
    }
}
