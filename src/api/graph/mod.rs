//! Graph field resolution for team membership queries
//!
//! The query engine itself lives outside this crate; it drives these
//! resolvers one field at a time.

mod context;
mod team_member;

pub use context::GraphContext;
pub use team_member::{TeamMemberFields, TeamMemberNode};
