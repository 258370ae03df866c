//! Role repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::Role;
use crate::domain::DomainError;

/// Batched role lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Resolve role names in one call
    ///
    /// Unknown names are skipped. Implementations document whether the
    /// result follows the order of `names`.
    async fn get_by_names(&self, names: Vec<String>) -> Result<Vec<Role>, DomainError>;

    /// Register a role
    async fn save(&self, role: Role) -> Result<Role, DomainError>;
}
