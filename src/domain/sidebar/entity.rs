//! Sidebar category types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ordering::order_by_keys;
use crate::domain::team::TeamId;
use crate::domain::user::UserId;

/// Kind of sidebar category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SidebarCategoryType {
    Favorites,
    Channels,
    DirectMessages,
    #[default]
    Custom,
}

/// How channels inside a category are sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SidebarCategorySorting {
    #[default]
    Default,
    Manual,
    Recent,
    Alphabetical,
}

/// A user's sidebar category within one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarCategory {
    pub id: String,
    pub user_id: UserId,
    pub team_id: TeamId,
    pub display_name: String,
    #[serde(rename = "type")]
    pub category_type: SidebarCategoryType,
    pub sorting: SidebarCategorySorting,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub collapsed: bool,
}

impl SidebarCategory {
    pub fn new(
        id: impl Into<String>,
        user_id: UserId,
        team_id: TeamId,
        display_name: impl Into<String>,
        category_type: SidebarCategoryType,
    ) -> Self {
        Self {
            id: id.into(),
            user_id,
            team_id,
            display_name: display_name.into(),
            category_type,
            sorting: SidebarCategorySorting::default(),
            muted: false,
            collapsed: false,
        }
    }
}

/// A category together with the ids of the channels it contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarCategoryWithChannels {
    #[serde(flatten)]
    pub category: SidebarCategory,
    pub channel_ids: Vec<String>,
}

impl SidebarCategoryWithChannels {
    pub fn new(category: SidebarCategory, channel_ids: Vec<String>) -> Self {
        Self {
            category,
            channel_ids,
        }
    }

    pub fn id(&self) -> &str {
        &self.category.id
    }
}

/// All of a user's categories in a team, keyed by id, plus their display order
///
/// The map carries no ordering; `order` is authoritative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarCategorySet {
    categories: HashMap<String, SidebarCategoryWithChannels>,
    order: Vec<String>,
}

impl SidebarCategorySet {
    pub fn new(categories: Vec<SidebarCategoryWithChannels>, order: Vec<String>) -> Self {
        let categories = categories
            .into_iter()
            .map(|category| (category.id().to_string(), category))
            .collect();

        Self { categories, order }
    }

    pub fn categories(&self) -> &HashMap<String, SidebarCategoryWithChannels> {
        &self.categories
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories following the order list
    ///
    /// An id without a category yields `None` at its position.
    pub fn in_order(&self) -> Vec<Option<SidebarCategoryWithChannels>> {
        order_by_keys(&self.categories, &self.order)
    }
}
