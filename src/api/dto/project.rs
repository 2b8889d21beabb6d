//! DTOs for project endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::application::services::ProjectListOptions;
use crate::domain::entities::ProjectUpdate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub domain_id: Option<String>,
    pub enabled: Option<bool>,
}

/// Request body for `PATCH /api/keystone/projects/{id}`.
///
/// Keystone projects take arbitrary extra attributes; keys not named here
/// are collected into `extra` and forwarded unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub domain_id: Option<String>,
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<UpdateProjectRequest> for ProjectUpdate {
    fn from(req: UpdateProjectRequest) -> Self {
        ProjectUpdate {
            name: req.name,
            description: req.description,
            domain: req.domain_id,
            enabled: req.enabled,
            extra: req.extra,
        }
    }
}

/// Query parameters for `GET /api/keystone/projects`.
///
/// Flags are matched against the literal strings: only `paginate=true`
/// paginates and only `admin=false` drops admin listing. Any other value
/// leaves the default in place.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListQuery {
    pub paginate: Option<String>,
    pub marker: Option<String>,
    pub domain_id: Option<String>,
    pub user_id: Option<String>,
    pub admin: Option<String>,
}

impl From<ProjectListQuery> for ProjectListOptions {
    fn from(q: ProjectListQuery) -> Self {
        ProjectListOptions {
            paginate: Some(q.paginate.as_deref() == Some("true")),
            marker: q.marker,
            domain: q.domain_id,
            user: q.user_id,
            admin: Some(q.admin.as_deref() != Some("false")),
        }
    }
}
