//! Team service for team administration

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::audit::{AuditRecord, AuditSink};
use crate::domain::team::{Team, TeamId, TeamRepository, TeamType};
use crate::domain::DomainError;

/// Request for creating a new team
#[derive(Debug, Clone, Default)]
pub struct CreateTeamRequest {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub team_type: TeamType,
    pub allowed_domains: Option<String>,
}

/// Team service for creating, fetching and deleting teams
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
    audit: Arc<dyn AuditSink>,
}

impl<R: TeamRepository> TeamService<R> {
    /// Create a new team service
    pub fn new(repository: Arc<R>, audit: Arc<dyn AuditSink>) -> Self {
        Self { repository, audit }
    }

    /// Create a new team with a generated id
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        info!(name = %request.name, "Creating team");

        let mut record = AuditRecord::new("createTeam");
        let result = self.create_team(request).await;

        if let Ok(team) = &result {
            record.add_meta("team", team);
            record.success();
        }

        self.audit.log(record);
        result
    }

    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        let mut team = Team::new(TeamId::generate(), request.name, request.display_name)
            .map_err(|e| DomainError::validation(e.to_string()))?
            .with_type(request.team_type);

        if let Some(email) = request.email {
            team = team
                .with_email(email)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(description) = request.description {
            team = team.with_description(description);
        }

        if let Some(allowed_domains) = request.allowed_domains {
            team = team.with_allowed_domains(allowed_domains);
        }

        self.repository.create(team).await
    }

    /// Get a team by ID
    pub async fn get(&self, id: &str) -> Result<Team, DomainError> {
        debug!(id = %id, "Fetching team");

        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        self.repository
            .get(&team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))
    }

    /// Delete a team, soft unless `permanent` is set
    pub async fn delete(&self, id: &str, permanent: bool) -> Result<(), DomainError> {
        info!(id = %id, permanent, "Deleting team");

        let mut record = AuditRecord::new("deleteTeam");
        record.add_meta("team_id", id);
        record.add_meta("permanent", permanent);

        let result = self.delete_team(id, permanent, &mut record).await;

        if result.is_ok() {
            record.success();
        }

        self.audit.log(record);
        result
    }

    async fn delete_team(
        &self,
        id: &str,
        permanent: bool,
        record: &mut AuditRecord,
    ) -> Result<(), DomainError> {
        let mut team = self.get(id).await?;
        record.add_meta("team", &team);

        if permanent {
            self.repository.delete(team.id()).await?;
        } else {
            team.soft_delete();
            self.repository.update(team).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audit::AuditStatus;
    use crate::domain::team::MockTeamRepository;
    use crate::infrastructure::audit::InMemoryAuditSink;
    use crate::infrastructure::team::InMemoryTeamRepository;

    fn create_service() -> (TeamService<InMemoryTeamRepository>, Arc<InMemoryAuditSink>) {
        let audit = Arc::new(InMemoryAuditSink::new());
        let service = TeamService::new(Arc::new(InMemoryTeamRepository::new()), audit.clone());
        (service, audit)
    }

    fn request(name: &str) -> CreateTeamRequest {
        CreateTeamRequest {
            name: name.to_string(),
            display_name: "Core Team".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_team() {
        let (service, audit) = create_service();

        let team = service
            .create(CreateTeamRequest {
                email: Some("Admins@Corp.COM".to_string()),
                allowed_domains: Some("corp.com".to_string()),
                ..request("core")
            })
            .await
            .unwrap();

        assert_eq!(team.name(), "core");
        assert_eq!(team.email(), "admins@corp.com");
        assert_eq!(team.allowed_domains(), "corp.com");
        assert_eq!(team.id().as_str().len(), 32);

        let records = audit.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].action(), "createTeam");
        assert_eq!(records[0].status(), AuditStatus::Success);
        assert!(records[0].get_meta("team").is_some());
    }

    #[tokio::test]
    async fn test_create_team_invalid_name() {
        let (service, audit) = create_service();

        let result = service.create(request("Not A Slug")).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(audit.records()[0].status(), AuditStatus::Fail);
    }

    #[tokio::test]
    async fn test_create_team_invalid_email() {
        let (service, _) = create_service();

        let result = service
            .create(CreateTeamRequest {
                email: Some("not-an-email".to_string()),
                ..request("core")
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_get_missing_team() {
        let (service, _) = create_service();

        let result = service.get("missing").await;
        assert!(result.unwrap_err().is_not_found());

        let result = service.get("bad id!").await;
        assert!(matches!(result, Err(DomainError::InvalidId { .. })));
    }

    #[tokio::test]
    async fn test_soft_delete() {
        let (service, audit) = create_service();
        let team = service.create(request("core")).await.unwrap();

        service.delete(team.id().as_str(), false).await.unwrap();

        let stored = service.get(team.id().as_str()).await.unwrap();
        assert!(stored.is_deleted());

        let records = audit.records();
        assert_eq!(records[1].action(), "deleteTeam");
        assert_eq!(records[1].status(), AuditStatus::Success);
        assert_eq!(records[1].get_meta("permanent"), Some(&serde_json::json!(false)));
    }

    #[tokio::test]
    async fn test_permanent_delete() {
        let (service, _) = create_service();
        let team = service.create(request("core")).await.unwrap();

        service.delete(team.id().as_str(), true).await.unwrap();

        assert!(service.get(team.id().as_str()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_team_records_failure() {
        let (service, audit) = create_service();

        let result = service.delete("missing", false).await;

        assert!(result.unwrap_err().is_not_found());
        let records = audit.records();
        assert_eq!(records[0].status(), AuditStatus::Fail);
        assert!(records[0].get_meta("team").is_none());
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut repo = MockTeamRepository::new();
        repo.expect_create()
            .returning(|_| Err(DomainError::storage("disk full")));

        let service = TeamService::new(Arc::new(repo), Arc::new(InMemoryAuditSink::new()));
        let result = service.create(request("core")).await;

        assert_eq!(result, Err(DomainError::storage("disk full")));
    }
}
