//! Role entity

use serde::{Deserialize, Serialize};

/// A named bundle of permissions, e.g. `team_admin`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: String,
    name: String,
    display_name: String,
    #[serde(default)]
    description: String,
    permissions: Vec<String>,
    /// Managed by a permission scheme rather than assigned explicitly
    #[serde(default)]
    scheme_managed: bool,
    #[serde(default)]
    built_in: bool,
}

impl Role {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            name: name.into(),
            display_name: display_name.into(),
            description: String::new(),
            permissions: Vec::new(),
            scheme_managed: false,
            built_in: false,
        }
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark as a built-in, scheme-managed role
    pub fn built_in(mut self) -> Self {
        self.built_in = true;
        self.scheme_managed = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    pub fn is_scheme_managed(&self) -> bool {
        self.scheme_managed
    }

    pub fn is_built_in(&self) -> bool {
        self.built_in
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
