//! Team invitation infrastructure

mod service;

pub use service::{InvitationService, InvitationSettings};
