//! Team domain module
//!
//! Teams carry the invitation domain restriction; team members link users to
//! teams and carry their team-scoped roles.

mod entity;
mod member;
mod repository;
mod validation;

pub use entity::{Team, TeamId, TeamType};
pub use member::TeamMember;
pub use repository::TeamRepository;
pub use validation::{
    TeamValidationError, validate_display_name, validate_team_email, validate_team_id,
    validate_team_name,
};

#[cfg(test)]
pub use repository::MockTeamRepository;
