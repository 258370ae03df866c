//! Team email invitation domain

mod batch;
mod dispatcher;
mod domain_restriction;
mod error;

pub use batch::{BatchResult, GracefulPartition, InvitationBatch, InviteMode, InviteOutcome};
pub use dispatcher::{InviteDispatch, InviteDispatcher};
pub use domain_restriction::{is_address_allowed, normalize_domains};
pub use error::{DispatchError, InvitationError};

#[cfg(test)]
pub use dispatcher::MockInviteDispatcher;
