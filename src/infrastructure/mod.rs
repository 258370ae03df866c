//! Infrastructure layer - in-memory stores, services and outbound adapters

pub mod audit;
pub mod email;
pub mod invitation;
pub mod logging;
pub mod role;
pub mod sidebar;
pub mod team;
pub mod user;
