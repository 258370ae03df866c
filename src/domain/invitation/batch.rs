//! Invitation batches and their outcomes

use serde::{Deserialize, Serialize};

use super::domain_restriction::is_address_allowed;
use super::error::InvitationError;
use crate::domain::email::EmailAddress;

/// How domain-restriction failures are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InviteMode {
    /// Any restricted address fails the whole batch
    #[default]
    Strict,
    /// Restricted addresses are reported individually; the rest are sent
    Graceful,
}

impl InviteMode {
    /// Any non-empty `graceful` query value selects graceful mode
    pub fn from_graceful_param(value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => Self::Graceful,
            _ => Self::Strict,
        }
    }
}

/// Result for a single address in graceful mode
#[derive(Debug, Clone, PartialEq)]
pub struct InviteOutcome {
    pub email: String,
    pub error: Option<InvitationError>,
}

impl InviteOutcome {
    pub fn accepted(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            error: None,
        }
    }

    pub fn rejected(email: impl Into<String>, error: InvitationError) -> Self {
        Self {
            email: email.into(),
            error: Some(error),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }
}

/// Graceful-mode split of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct GracefulPartition {
    /// One outcome per address, in input order
    pub outcomes: Vec<InviteOutcome>,
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

/// Successful outcome of processing a batch
#[derive(Debug, Clone, PartialEq)]
pub enum BatchResult {
    /// Strict mode: every address was sent
    Dispatched { count: usize },
    /// Graceful mode: per-address outcomes
    PerAddress(Vec<InviteOutcome>),
}

/// A validated, lowercased, non-empty list of addresses
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationBatch {
    addresses: Vec<EmailAddress>,
}

impl InvitationBatch {
    /// Validate raw addresses
    ///
    /// An empty list fails before any address is looked at; the first
    /// malformed address fails the whole batch.
    pub fn parse<I, S>(raw: I) -> Result<Self, InvitationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = raw.into_iter().collect();

        if raw.is_empty() {
            return Err(InvitationError::EmptyBatch);
        }

        let addresses = raw
            .iter()
            .map(|address| {
                EmailAddress::parse(address)
                    .map_err(|address| InvitationError::InvalidEmailFormat { address })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { addresses })
    }

    pub fn addresses(&self) -> &[EmailAddress] {
        &self.addresses
    }

    pub fn emails(&self) -> Vec<String> {
        self.addresses.iter().map(|a| a.as_str().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Addresses that fail the domain rules, in input order
    pub fn restricted<R: AsRef<str>>(&self, rules: &[R]) -> Vec<String> {
        self.addresses
            .iter()
            .filter(|address| !is_address_allowed(address.as_str(), rules))
            .map(|address| address.as_str().to_string())
            .collect()
    }

    /// Split into accepted and rejected addresses, keeping one outcome each
    pub fn partition<R: AsRef<str>>(&self, rules: &[R]) -> GracefulPartition {
        let mut partition = GracefulPartition {
            outcomes: Vec::with_capacity(self.addresses.len()),
            accepted: Vec::new(),
            rejected: Vec::new(),
        };

        for address in &self.addresses {
            let email = address.as_str();

            if is_address_allowed(email, rules) {
                partition.accepted.push(email.to_string());
                partition.outcomes.push(InviteOutcome::accepted(email));
            } else {
                partition.rejected.push(email.to_string());
                partition.outcomes.push(InviteOutcome::rejected(
                    email,
                    InvitationError::domain_restricted(&[email]),
                ));
            }
        }

        partition
    }
}
