//! User domain module

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{UserValidationError, validate_user_id, validate_username};

#[cfg(test)]
pub use repository::MockUserRepository;
