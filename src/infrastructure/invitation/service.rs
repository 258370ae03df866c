//! Invitation service - validates a batch of addresses and sends team invites

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::domain::audit::{AuditRecord, AuditSink};
use crate::domain::invitation::{
    BatchResult, InvitationBatch, InvitationError, InviteDispatch, InviteDispatcher, InviteMode,
};
use crate::domain::team::{Team, TeamId, TeamRepository};

const SENDER_NAME: &str = "Administrator";

/// Server-wide settings that affect invitations
#[derive(Debug, Clone)]
pub struct InvitationSettings {
    pub enable_email_invitations: bool,
    pub site_url: String,
    /// Global domain restriction, applied on top of each team's own rule
    pub restrict_creation_to_domains: String,
}

impl Default for InvitationSettings {
    fn default() -> Self {
        Self {
            enable_email_invitations: true,
            site_url: "http://localhost:8080".to_string(),
            restrict_creation_to_domains: String::new(),
        }
    }
}

/// Processes invitation batches for a team
pub struct InvitationService<R: TeamRepository> {
    teams: Arc<R>,
    dispatcher: Arc<dyn InviteDispatcher>,
    audit: Arc<dyn AuditSink>,
    settings: InvitationSettings,
}

impl<R: TeamRepository> InvitationService<R> {
    pub fn new(
        teams: Arc<R>,
        dispatcher: Arc<dyn InviteDispatcher>,
        audit: Arc<dyn AuditSink>,
        settings: InvitationSettings,
    ) -> Self {
        Self {
            teams,
            dispatcher,
            audit,
            settings,
        }
    }

    /// Invite a list of raw addresses to a team
    ///
    /// The batch is rejected as a whole when it is empty or contains a
    /// malformed address. Domain restrictions fail the whole batch in
    /// [`InviteMode::Strict`] and are reported per address in
    /// [`InviteMode::Graceful`]. A dispatch failure aborts either mode.
    pub async fn invite_to_team<S: AsRef<str>>(
        &self,
        team_id: &str,
        addresses: &[S],
        mode: InviteMode,
    ) -> Result<BatchResult, InvitationError> {
        if !self.settings.enable_email_invitations {
            return Err(InvitationError::Disabled);
        }

        let batch = InvitationBatch::parse(addresses)?;

        info!(team_id = %team_id, count = batch.len(), ?mode, "Inviting users to team");

        let mut record = AuditRecord::new("inviteUsersToTeam");
        record.add_meta("team_id", team_id);
        record.add_meta("count", batch.len());
        record.add_meta("emails", batch.emails());

        let result = self.process(team_id, &batch, mode, &mut record).await;

        match &result {
            Ok(_) => record.success(),
            Err(e) => warn!(team_id = %team_id, error = %e, "Invitation batch failed"),
        }

        self.audit.log(record);
        result
    }

    async fn process(
        &self,
        team_id: &str,
        batch: &InvitationBatch,
        mode: InviteMode,
        record: &mut AuditRecord,
    ) -> Result<BatchResult, InvitationError> {
        let team = self.load_team(team_id).await?;
        let rules = [
            team.allowed_domains(),
            self.settings.restrict_creation_to_domains.as_str(),
        ];

        match mode {
            InviteMode::Strict => {
                let restricted = batch.restricted(&rules);

                if !restricted.is_empty() {
                    record.add_meta("rejected", &restricted);
                    return Err(InvitationError::domain_restricted(&restricted));
                }

                self.dispatch(&team, batch.emails()).await?;
                Ok(BatchResult::Dispatched { count: batch.len() })
            }
            InviteMode::Graceful => {
                let partition = batch.partition(&rules);

                let errors: Vec<String> = partition
                    .outcomes
                    .iter()
                    .filter_map(|o| o.error.as_ref().map(|e| format!("{}: {}", o.email, e)))
                    .collect();

                if !errors.is_empty() {
                    record.add_meta("rejected", &partition.rejected);
                    record.add_meta("errors", &errors);
                }

                if !partition.accepted.is_empty() {
                    self.dispatch(&team, partition.accepted).await?;
                }

                Ok(BatchResult::PerAddress(partition.outcomes))
            }
        }
    }

    async fn load_team(&self, team_id: &str) -> Result<Team, InvitationError> {
        let id = TeamId::new(team_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        match self.teams.get(&id).await {
            Ok(Some(team)) => Ok(team),
            Ok(None) => Err(InvitationError::TeamNotFound {
                team_id: team_id.to_string(),
            }),
            Err(e) if e.is_not_found() => Err(InvitationError::TeamNotFound {
                team_id: team_id.to_string(),
            }),
            Err(e) => Err(InvitationError::TeamLookup {
                team_id: team_id.to_string(),
                detail: e.to_string(),
            }),
        }
    }

    async fn dispatch(&self, team: &Team, emails: Vec<String>) -> Result<(), InvitationError> {
        debug!(team_id = %team.id(), count = emails.len(), "Dispatching invitations");

        let dispatch = InviteDispatch {
            team: team.clone(),
            sender_name: SENDER_NAME.to_string(),
            sender_id: format!("mmctl {}", uuid::Uuid::new_v4().simple()),
            site_url: self.settings.site_url.clone(),
            emails,
        };

        self.dispatcher.send_invites(dispatch).await?;
        Ok(())
    }
}
