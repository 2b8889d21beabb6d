//! Project inputs, filters and pages.

use serde_json::{Map, Value};

use super::Resource;

/// Input for creating a project.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    /// Owning domain; `None` lets Keystone scope it to the caller's domain.
    pub domain: Option<String>,
    pub enabled: bool,
}

/// Project update.
///
/// Named fields use `None` for "no change". Keystone projects accept
/// arbitrary extra attributes, so unrecognized keys from the request are
/// carried in `extra` and sent as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub enabled: Option<bool>,
    pub extra: Map<String, Value>,
}

/// Filters for listing projects.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFilter {
    pub paginate: bool,
    pub marker: Option<String>,
    pub domain: Option<String>,
    pub user: Option<String>,
    /// List every project visible to an admin, rather than only the
    /// projects the user is a member of.
    pub admin: bool,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            paginate: false,
            marker: None,
            domain: None,
            user: None,
            admin: true,
        }
    }
}

/// One page of projects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPage {
    pub items: Vec<Resource>,
    pub has_more: bool,
}
