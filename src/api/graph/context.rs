//! Per-request resolution context

use std::sync::Arc;

use crate::domain::role::RoleRepository;
use crate::domain::session::Session;
use crate::domain::sidebar::SidebarCategoryRepository;
use crate::domain::team::TeamRepository;
use crate::domain::user::UserRepository;

/// Session and lookup collaborators for one graph query
#[derive(Clone)]
pub struct GraphContext {
    session: Session,
    teams: Arc<dyn TeamRepository>,
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    sidebar_categories: Arc<dyn SidebarCategoryRepository>,
}

impl GraphContext {
    pub fn new(
        session: Session,
        teams: Arc<dyn TeamRepository>,
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        sidebar_categories: Arc<dyn SidebarCategoryRepository>,
    ) -> Self {
        Self {
            session,
            teams,
            users,
            roles,
            sidebar_categories,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn teams(&self) -> &dyn TeamRepository {
        self.teams.as_ref()
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    pub fn roles(&self) -> &dyn RoleRepository {
        self.roles.as_ref()
    }

    pub fn sidebar_categories(&self) -> &dyn SidebarCategoryRepository {
        self.sidebar_categories.as_ref()
    }
}
