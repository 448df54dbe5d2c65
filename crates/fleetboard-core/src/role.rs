//! User roles and the role selector view model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoleError;

/// A user's role within an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    Staff,
    User,
}

impl Role {
    /// Every known role, protected one first
    pub const ALL: [Role; 4] = [Role::SuperAdmin, Role::Admin, Role::Staff, Role::User];

    /// Wire value as used by the API
    pub fn value(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
            Role::User => "USER",
        }
    }

    /// Human readable title
    pub fn title(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Staff => "Staff",
            Role::User => "User",
        }
    }

    /// The super admin role cannot be assigned or changed from the UI
    pub fn is_protected(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.value() == s)
            .ok_or_else(|| RoleError::Unknown(s.to_string()))
    }
}

/// Roles a user can be switched to
pub fn assignable_roles() -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|role| !role.is_protected())
        .collect()
}

/// How the role selector renders for a given role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleView {
    /// Plain text, no editing
    ReadOnly { title: &'static str },
    /// Selector over the assignable roles
    Editable { selected: Role, options: Vec<Role> },
}

impl RoleView {
    pub fn for_role(role: Role) -> Self {
        if role.is_protected() {
            RoleView::ReadOnly {
                title: role.title(),
            }
        } else {
            RoleView::Editable {
                selected: role,
                options: assignable_roles(),
            }
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, RoleView::Editable { .. })
    }
}

/// Holds the selected role and notifies the owner on change
pub struct RoleSelector<F: FnMut(Role)> {
    role: Role,
    on_change: Option<F>,
}

impl<F: FnMut(Role)> RoleSelector<F> {
    pub fn new(role: Role, on_change: Option<F>) -> Self {
        Self { role, on_change }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn view(&self) -> RoleView {
        RoleView::for_role(self.role)
    }

    /// Apply a selection coming from the UI.
    ///
    /// The value must name a known role. Selections made while the view is
    /// read-only, or naming the protected role, are ignored and return
    /// `Ok(false)`.
    pub fn select(&mut self, value: &str) -> Result<bool, RoleError> {
        let role: Role = value.parse()?;
        if !self.view().is_editable() {
            tracing::debug!("Ignoring role change to {} on protected role", role);
            return Ok(false);
        }
        if role.is_protected() {
            tracing::warn!("Refusing to assign protected role {}", role);
            return Ok(false);
        }
        self.role = role;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(role);
        }
        Ok(true)
    }
}
