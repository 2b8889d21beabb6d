//! Role inputs.

/// Role update. Roles only carry a name; `None` leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleUpdate {
    pub name: Option<String>,
}

/// A role assignment of `role` to `user` on `project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub project: String,
    pub user: String,
    pub role: String,
}
