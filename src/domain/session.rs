//! Request sessions and the permission checks made against them

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;

/// Permissions consulted by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Act on behalf of other users
    EditOtherUsers,
    /// Full administrative access
    ManageSystem,
    InviteUser,
}

impl Permission {
    /// Stable identifier used in error payloads
    pub fn id(&self) -> &'static str {
        match self {
            Self::EditOtherUsers => "edit_other_users",
            Self::ManageSystem => "manage_system",
            Self::InviteUser => "invite_user",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The caller on whose behalf a request runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    user_id: Option<UserId>,
    /// Local-mode sessions (admin socket) are not bound to a user
    local: bool,
    permissions: HashSet<Permission>,
}

impl Session {
    /// A session belonging to a user with no extra permissions
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            user_id: Some(user_id),
            local: false,
            permissions: HashSet::new(),
        }
    }

    /// An unrestricted local-mode session
    pub fn local() -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            user_id: None,
            local: true,
            permissions: HashSet::new(),
        }
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.local
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.local
            || self.permissions.contains(&permission)
            || (permission != Permission::ManageSystem
                && self.permissions.contains(&Permission::ManageSystem))
    }

    /// Whether this session may act as `user_id`
    ///
    /// True for the user themself, for unrestricted sessions and for
    /// holders of [`Permission::EditOtherUsers`].
    pub fn can_act_as(&self, user_id: &UserId) -> bool {
        if self.local || self.user_id.as_ref() == Some(user_id) {
            return true;
        }

        self.has_permission(Permission::EditOtherUsers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn test_self_access() {
        let session = Session::for_user(user("alice"));
        assert!(session.can_act_as(&user("alice")));
        assert!(!session.can_act_as(&user("bob")));
    }

    #[test]
    fn test_edit_other_users_permission() {
        let session =
            Session::for_user(user("alice")).with_permission(Permission::EditOtherUsers);
        assert!(session.can_act_as(&user("bob")));
    }

    #[test]
    fn test_manage_system_implies_other_permissions() {
        let session = Session::for_user(user("root")).with_permission(Permission::ManageSystem);
        assert!(session.has_permission(Permission::EditOtherUsers));
        assert!(session.can_act_as(&user("bob")));
    }

    #[test]
    fn test_unrelated_permission_does_not_grant_access() {
        let session = Session::for_user(user("alice")).with_permission(Permission::InviteUser);
        assert!(!session.can_act_as(&user("bob")));
    }

    #[test]
    fn test_local_session_is_unrestricted() {
        let session = Session::local();
        assert!(session.is_unrestricted());
        assert!(session.user_id().is_none());
        assert!(session.has_permission(Permission::ManageSystem));
        assert!(session.can_act_as(&user("anyone")));
    }

    #[test]
    fn test_permission_ids() {
        assert_eq!(Permission::EditOtherUsers.to_string(), "edit_other_users");
        assert_eq!(Permission::ManageSystem.id(), "manage_system");
    }
}
