//! Sidebar categories domain module
//!
//! Categories are stored as an id map plus a separate order list; readers
//! must rebuild the display order from the list.

mod entity;
mod ordering;
mod repository;

pub use entity::{
    SidebarCategory, SidebarCategorySet, SidebarCategorySorting, SidebarCategoryType,
    SidebarCategoryWithChannels,
};
pub use ordering::order_by_keys;
pub use repository::SidebarCategoryRepository;

#[cfg(test)]
pub use repository::MockSidebarCategoryRepository;
