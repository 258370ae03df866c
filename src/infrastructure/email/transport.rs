//! Outbound mail transport

use async_trait::async_trait;
use tracing::info;

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// A single rendered email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivers rendered emails
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: MailMessage) -> Result<(), DomainError>;
}

/// Transport that only logs what would have been sent
#[derive(Debug, Default)]
pub struct LoggingMailTransport;

impl LoggingMailTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for LoggingMailTransport {
    async fn send(&self, message: MailMessage) -> Result<(), DomainError> {
        info!(
            to = %message.to,
            subject = %message.subject,
            body_len = message.body.len(),
            "Sending email"
        );

        Ok(())
    }
}
