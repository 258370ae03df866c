//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    TeamValidationError, validate_display_name, validate_team_email, validate_team_id,
    validate_team_name,
};

/// Team identifier - alphanumeric + hyphens, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Create a new TeamId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, TeamValidationError> {
        let id = id.into();
        validate_team_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who may join a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamType {
    /// Anyone on the server can join
    Open,
    /// Membership by invitation only
    #[default]
    Invite,
}

impl std::fmt::Display for TeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Invite => write!(f, "invite"),
        }
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    /// URL slug
    name: String,
    display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Contact address, stored lowercased
    email: String,
    team_type: TeamType,
    /// Domain restriction for invitations, e.g. `"@corp.com, example.org"`
    allowed_domains: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    /// Set when the team is soft-deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_at: Option<DateTime<Utc>>,
}

impl Team {
    /// Create a new team
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, TeamValidationError> {
        let name = name.into();
        let display_name = display_name.into();
        validate_team_name(&name)?;
        validate_display_name(&display_name)?;
        let now = Utc::now();

        Ok(Self {
            id,
            name,
            display_name,
            description: None,
            email: String::new(),
            team_type: TeamType::default(),
            allowed_domains: String::new(),
            created_at: now,
            updated_at: now,
            delete_at: None,
        })
    }

    /// Set the contact email (builder pattern); the address is lowercased
    pub fn with_email(mut self, email: impl AsRef<str>) -> Result<Self, TeamValidationError> {
        let email = email.as_ref().to_lowercase();
        validate_team_email(&email)?;
        self.email = email;
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_type(mut self, team_type: TeamType) -> Self {
        self.team_type = team_type;
        self
    }

    pub fn with_allowed_domains(mut self, allowed_domains: impl Into<String>) -> Self {
        self.allowed_domains = allowed_domains.into();
        self
    }

    // Getters

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn team_type(&self) -> TeamType {
        self.team_type
    }

    pub fn allowed_domains(&self) -> &str {
        &self.allowed_domains
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn delete_at(&self) -> Option<DateTime<Utc>> {
        self.delete_at
    }

    pub fn is_deleted(&self) -> bool {
        self.delete_at.is_some()
    }

    // Mutators

    /// Mark the team as deleted without removing it
    pub fn soft_delete(&mut self) {
        if self.delete_at.is_none() {
            let now = Utc::now();
            self.delete_at = Some(now);
            self.updated_at = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team::new(TeamId::new("team-1").unwrap(), "core", "Core Team").unwrap()
    }

    #[test]
    fn test_team_id_valid() {
        let id = TeamId::new("my-team").unwrap();
        assert_eq!(id.as_str(), "my-team");
    }

    #[test]
    fn test_team_id_invalid() {
        assert!(TeamId::new("").is_err());
        assert!(TeamId::new("-team").is_err());
        assert!(TeamId::new("team_name").is_err());
    }

    #[test]
    fn test_generated_team_id_is_valid() {
        let id = TeamId::generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(TeamId::new(id.as_str()).is_ok());
        assert_ne!(id, TeamId::generate());
    }

    #[test]
    fn test_team_creation() {
        let team = team();

        assert_eq!(team.name(), "core");
        assert_eq!(team.display_name(), "Core Team");
        assert_eq!(team.email(), "");
        assert_eq!(team.allowed_domains(), "");
        assert_eq!(team.team_type(), TeamType::Invite);
        assert!(!team.is_deleted());
    }

    #[test]
    fn test_team_invalid_names() {
        let id = TeamId::new("team-1").unwrap();
        assert!(Team::new(id.clone(), "", "Core").is_err());
        assert!(Team::new(id, "core", "").is_err());
    }

    #[test]
    fn test_team_email_lowercased() {
        let team = team().with_email("Admins@Corp.COM").unwrap();
        assert_eq!(team.email(), "admins@corp.com");
    }

    #[test]
    fn test_team_invalid_email() {
        assert_eq!(
            team().with_email("not-an-email"),
            Err(TeamValidationError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_team_builders() {
        let team = team()
            .with_description("The core team")
            .with_type(TeamType::Open)
            .with_allowed_domains("@corp.com, example.org");

        assert_eq!(team.description(), Some("The core team"));
        assert_eq!(team.team_type(), TeamType::Open);
        assert_eq!(team.allowed_domains(), "@corp.com, example.org");
    }

    #[test]
    fn test_soft_delete_is_idempotent() {
        let mut team = team();
        team.soft_delete();
        let first = team.delete_at();
        assert!(team.is_deleted());

        team.soft_delete();
        assert_eq!(team.delete_at(), first);
    }

    #[test]
    fn test_team_serialization() {
        let team = team().with_allowed_domains("corp.com");
        let json = serde_json::to_value(&team).unwrap();

        assert_eq!(json["id"], "team-1");
        assert_eq!(json["team_type"], "invite");
        assert_eq!(json["allowed_domains"], "corp.com");
        assert!(json.get("delete_at").is_none());
    }
}
