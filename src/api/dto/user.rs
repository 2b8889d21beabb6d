//! DTOs for user endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::CreateUser;
use crate::domain::entities::{UserFilter, UserUpdate};

/// Request body for `POST /api/keystone/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub project_id: Option<String>,
    pub domain_id: Option<String>,
    pub enabled: Option<bool>,
}

impl From<CreateUserRequest> for CreateUser {
    /// Empty strings for `email`, `project_id` and `domain_id` count as absent.
    fn from(req: CreateUserRequest) -> Self {
        CreateUser {
            name: req.name,
            email: non_empty(req.email),
            password: req.password,
            project: non_empty(req.project_id),
            domain: non_empty(req.domain_id),
            enabled: req.enabled,
        }
    }
}

/// Request body for `PATCH /api/keystone/users/{id}`. Unknown keys are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub enabled: Option<bool>,
    pub project_id: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        UserUpdate {
            name: req.name,
            email: req.email,
            password: req.password,
            enabled: req.enabled,
            project: req.project_id,
        }
    }
}

/// Query parameters for `GET /api/keystone/users`.
#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub project_id: Option<String>,
    pub domain_id: Option<String>,
    pub group_id: Option<String>,
}

impl From<UserListQuery> for UserFilter {
    fn from(q: UserListQuery) -> Self {
        UserFilter {
            project: q.project_id,
            domain: q.domain_id,
            group: q.group_id,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
