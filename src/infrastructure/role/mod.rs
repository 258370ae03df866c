//! Role infrastructure

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::role::{Role, RoleRepository};

/// In-memory role store
///
/// `get_by_names` returns roles in the order the names were requested,
/// skipping unknown names and duplicates.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with the built-in team and system roles
    pub fn with_builtin_roles() -> Self {
        Self {
            roles: RwLock::new(builtin_roles()),
        }
    }
}

fn builtin_roles() -> Vec<Role> {
    vec![
        Role::new("system_user", "System User")
            .with_permissions(["create_team", "list_public_teams"])
            .built_in(),
        Role::new("system_admin", "System Admin")
            .with_permissions(["manage_system", "edit_other_users", "invite_user"])
            .built_in(),
        Role::new("team_user", "Team User")
            .with_permissions(["view_team", "list_team_channels", "join_public_channels"])
            .built_in(),
        Role::new("team_admin", "Team Admin")
            .with_permissions(["manage_team", "invite_user", "remove_user_from_team"])
            .built_in(),
        Role::new("team_guest", "Team Guest")
            .with_permissions(["view_team"])
            .built_in(),
    ]
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn get_by_names(&self, names: Vec<String>) -> Result<Vec<Role>, DomainError> {
        let roles = self.roles.read().await;
        let mut found: Vec<Role> = Vec::with_capacity(names.len());

        for name in &names {
            if found.iter().any(|r| r.name() == name) {
                continue;
            }

            if let Some(role) = roles.iter().find(|r| r.name() == name) {
                found.push(role.clone());
            }
        }

        Ok(found)
    }

    async fn save(&self, role: Role) -> Result<Role, DomainError> {
        let mut roles = self.roles.write().await;

        match roles.iter_mut().find(|r| r.name() == role.name()) {
            Some(existing) => *existing = role.clone(),
            None => roles.push(role.clone()),
        }

        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_builtin_roles_in_request_order() {
        let repo = InMemoryRoleRepository::with_builtin_roles();

        let roles = repo
            .get_by_names(names(&["team_admin", "team_user"]))
            .await
            .unwrap();

        let found: Vec<&str> = roles.iter().map(|r| r.name()).collect();
        assert_eq!(found, vec!["team_admin", "team_user"]);
        assert!(roles[0].is_built_in());
    }

    #[tokio::test]
    async fn test_unknown_and_duplicate_names_skipped() {
        let repo = InMemoryRoleRepository::with_builtin_roles();

        let roles = repo
            .get_by_names(names(&["team_user", "nonexistent", "team_user"]))
            .await
            .unwrap();

        assert_eq!(roles.len(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_by_name() {
        let repo = InMemoryRoleRepository::new();
        repo.save(Role::new("custom", "Custom")).await.unwrap();
        repo.save(Role::new("custom", "Renamed")).await.unwrap();

        let roles = repo.get_by_names(names(&["custom"])).await.unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].display_name(), "Renamed");
    }
}
