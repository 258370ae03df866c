//! Email delivery for team invitations

mod dispatcher;
mod rate_limiter;
mod transport;

pub use dispatcher::RateLimitedInviteDispatcher;
pub use rate_limiter::{InviteRateLimit, InviteRateLimiter, RateLimitResult};
pub use transport::{LoggingMailTransport, MailMessage, MailTransport};
