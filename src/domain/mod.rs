//! Domain layer - entities, rules and the ports the services depend on

pub mod audit;
pub mod email;
pub mod error;
pub mod invitation;
pub mod role;
pub mod session;
pub mod sidebar;
pub mod team;
pub mod user;

pub use audit::{AuditRecord, AuditSink, AuditStatus};
pub use email::{EmailAddress, is_valid_email};
pub use error::DomainError;
pub use invitation::{
    BatchResult, DispatchError, InvitationBatch, InvitationError, InviteDispatch,
    InviteDispatcher, InviteMode, InviteOutcome,
};
pub use role::{Role, RoleRepository};
pub use session::{Permission, Session};
pub use sidebar::{SidebarCategoryRepository, SidebarCategorySet, SidebarCategoryWithChannels};
pub use team::{Team, TeamId, TeamMember, TeamRepository, TeamType};
pub use user::{User, UserId, UserRepository};
