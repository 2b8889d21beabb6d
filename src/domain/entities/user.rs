//! User inputs and the partial-update decision table.

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Default project id.
    pub project: Option<String>,
    pub domain: String,
    pub enabled: bool,
}

/// Combined user update. `None` means "no change".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub enabled: Option<bool>,
    /// Default project id.
    pub project: Option<String>,
}

/// Backend operation a user patch resolves to.
///
/// Keystone exposes narrow operations for the password, the enabled flag
/// and the default project. A patch touching exactly one of them uses that
/// operation; every other combination goes through the combined update.
#[derive(Debug, Clone, PartialEq)]
pub enum UserPatch {
    Noop,
    Password(String),
    Enabled(bool),
    Project(String),
    Combined(UserUpdate),
}

impl UserPatch {
    pub fn plan(update: UserUpdate) -> Self {
        match update {
            UserUpdate {
                name: None,
                email: None,
                password: None,
                enabled: None,
                project: None,
            } => UserPatch::Noop,
            UserUpdate {
                name: None,
                email: None,
                password: Some(password),
                enabled: None,
                project: None,
            } => UserPatch::Password(password),
            UserUpdate {
                name: None,
                email: None,
                password: None,
                enabled: Some(enabled),
                project: None,
            } => UserPatch::Enabled(enabled),
            UserUpdate {
                name: None,
                email: None,
                password: None,
                enabled: None,
                project: Some(project),
            } => UserPatch::Project(project),
            update => UserPatch::Combined(update),
        }
    }
}

/// Filters for listing users.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Default project id.
    pub project: Option<String>,
    pub domain: Option<String>,
    pub group: Option<String>,
}
