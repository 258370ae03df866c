//! Invite dispatcher port

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::error::DispatchError;
use crate::domain::team::Team;

/// One request to send invitation emails for a team
#[derive(Debug, Clone, PartialEq)]
pub struct InviteDispatch {
    pub team: Team,
    pub sender_name: String,
    pub sender_id: String,
    pub site_url: String,
    pub emails: Vec<String>,
}

/// Sends invitation emails, applying its own rate limiting
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InviteDispatcher: Send + Sync {
    async fn send_invites(&self, dispatch: InviteDispatch) -> Result<(), DispatchError>;
}
