//! Rate-limited invite dispatcher

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::rate_limiter::{InviteRateLimit, InviteRateLimiter};
use super::transport::{MailMessage, MailTransport};
use crate::domain::invitation::{DispatchError, InviteDispatch, InviteDispatcher};

#[derive(Debug)]
enum LimiterState {
    Unconfigured,
    Failed(String),
    Ready(InviteRateLimiter),
}

/// Sends team invitations through a [`MailTransport`] behind a per-team limiter
pub struct RateLimitedInviteDispatcher {
    limiter: LimiterState,
    transport: Arc<dyn MailTransport>,
}

impl RateLimitedInviteDispatcher {
    /// `None` leaves the dispatcher without a limiter, which makes every
    /// dispatch fail with [`DispatchError::Unconfigured`].
    pub fn new(limit: Option<InviteRateLimit>, transport: Arc<dyn MailTransport>) -> Self {
        let limiter = match limit {
            None => LimiterState::Unconfigured,
            Some(limit) => match InviteRateLimiter::new(limit) {
                Ok(limiter) => LimiterState::Ready(limiter),
                Err(detail) => {
                    warn!(error = %detail, "Invalid invite rate limit settings");
                    LimiterState::Failed(detail)
                }
            },
        };

        Self { limiter, transport }
    }

    fn render(dispatch: &InviteDispatch, to: &str) -> MailMessage {
        let team = &dispatch.team;
        let site_url = dispatch.site_url.trim_end_matches('/');

        MailMessage {
            to: to.to_string(),
            subject: format!(
                "{} invited you to join {}",
                dispatch.sender_name,
                team.display_name()
            ),
            body: format!(
                "{} ({}) invited you to join the {} team.\n\nJoin here: {}/signup_user_complete/?id={}\n",
                dispatch.sender_name,
                dispatch.sender_id,
                team.display_name(),
                site_url,
                team.id()
            ),
        }
    }
}

#[async_trait]
impl InviteDispatcher for RateLimitedInviteDispatcher {
    async fn send_invites(&self, dispatch: InviteDispatch) -> Result<(), DispatchError> {
        let limiter = match &self.limiter {
            LimiterState::Unconfigured => return Err(DispatchError::Unconfigured),
            LimiterState::Failed(detail) => return Err(DispatchError::SetupFailed(detail.clone())),
            LimiterState::Ready(limiter) => limiter,
        };

        let team_id = dispatch.team.id().as_str();
        let count = u32::try_from(dispatch.emails.len()).unwrap_or(u32::MAX);
        let result = limiter.check_and_record(team_id, count).await;

        if !result.allowed {
            warn!(
                team_id = %team_id,
                requested = count,
                remaining = result.remaining,
                "Invite rate limit exceeded"
            );

            return Err(DispatchError::Throttled(format!(
                "{} invitations requested for team {}, {} of {} remaining, resets in {}s",
                count, team_id, result.remaining, result.limit, result.reset_in_seconds
            )));
        }

        info!(team_id = %team_id, count, "Sending team invitations");

        for email in &dispatch.emails {
            let message = Self::render(&dispatch, email);

            if let Err(e) = self.transport.send(message).await {
                warn!(team_id = %team_id, to = %email, error = %e, "Failed to send invitation");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::domain::team::{Team, TeamId};
    use crate::infrastructure::email::transport::MockMailTransport;

    fn dispatch(emails: &[&str]) -> InviteDispatch {
        InviteDispatch {
            team: Team::new(TeamId::new("team1").unwrap(), "core", "Core Team").unwrap(),
            sender_name: "Administrator".to_string(),
            sender_id: "mmctl abc".to_string(),
            site_url: "https://chat.example.com/".to_string(),
            emails: emails.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn transport_expecting(times: usize) -> Arc<MockMailTransport> {
        let mut transport = MockMailTransport::new();
        transport.expect_send().times(times).returning(|_| Ok(()));
        Arc::new(transport)
    }

    #[tokio::test]
    async fn test_unconfigured() {
        let dispatcher = RateLimitedInviteDispatcher::new(None, transport_expecting(0));

        let result = dispatcher.send_invites(dispatch(&["a@corp.com"])).await;
        assert_eq!(result, Err(DispatchError::Unconfigured));
    }

    #[tokio::test]
    async fn test_setup_failed() {
        let dispatcher = RateLimitedInviteDispatcher::new(
            Some(InviteRateLimit::hourly(0)),
            transport_expecting(0),
        );

        let result = dispatcher.send_invites(dispatch(&["a@corp.com"])).await;
        assert!(matches!(result, Err(DispatchError::SetupFailed(_))));
    }

    #[tokio::test]
    async fn test_sends_one_message_per_address() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_send()
            .withf(|m| {
                m.subject == "Administrator invited you to join Core Team"
                    && m.body.contains("https://chat.example.com/signup_user_complete/?id=team1")
            })
            .times(2)
            .returning(|_| Ok(()));

        let dispatcher =
            RateLimitedInviteDispatcher::new(Some(InviteRateLimit::default()), Arc::new(transport));

        let result = dispatcher
            .send_invites(dispatch(&["a@corp.com", "b@corp.com"]))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_throttled() {
        let dispatcher = RateLimitedInviteDispatcher::new(
            Some(InviteRateLimit::hourly(2)),
            transport_expecting(2),
        );

        dispatcher
            .send_invites(dispatch(&["a@corp.com", "b@corp.com"]))
            .await
            .unwrap();

        let result = dispatcher.send_invites(dispatch(&["c@corp.com"])).await;
        assert!(matches!(result, Err(DispatchError::Throttled(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_does_not_abort() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_send()
            .times(2)
            .returning(|_| Err(DomainError::internal("smtp down")));

        let dispatcher =
            RateLimitedInviteDispatcher::new(Some(InviteRateLimit::default()), Arc::new(transport));

        let result = dispatcher
            .send_invites(dispatch(&["a@corp.com", "b@corp.com"]))
            .await;
        assert!(result.is_ok());
    }
}
