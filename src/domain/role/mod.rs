//! Role domain module

mod entity;
mod repository;

pub use entity::Role;
pub use repository::RoleRepository;

#[cfg(test)]
pub use repository::MockRoleRepository;
