//! Handlers for role endpoints and project role grants.

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::envelope::ListResponse;
use crate::api::dto::role::{CreateRoleRequest, GrantRoleRequest, RoleListQuery, UpdateRoleRequest};
use crate::api::extract::{AppJson, Created};
use crate::domain::entities::{Identifier, Resource, ResourceKind, RoleAssignment, RoleUpdate, Session};
use crate::error::AppError;
use crate::state::AppState;

/// Fetches a role; `default` returns the deployment's default role.
///
/// `GET /api/keystone/roles/{id}`
pub async fn get_role_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, AppError> {
    let id = Identifier::parse(ResourceKind::Role, id);
    let role = state.role_service.get_role(&session, &id).await?;
    Ok(Json(role))
}

/// `PATCH /api/keystone/roles/{id}`
pub async fn update_role_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateRoleRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;
    let update = RoleUpdate { name: payload.name };
    state.role_service.update_role(&session, &id, update).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/keystone/roles/{id}`
pub async fn delete_role_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.role_service.delete_role(&session, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists roles.
///
/// # Endpoint
///
/// `GET /api/keystone/roles?user_id=&project_id=`
///
/// With both parameters only the roles the user holds on the project are
/// returned.
pub async fn role_list_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<RoleListQuery>,
) -> Result<Json<ListResponse<Resource>>, AppError> {
    let roles = state
        .role_service
        .list_roles(&session, query.user_id.as_deref(), query.project_id.as_deref())
        .await?;
    Ok(Json(ListResponse::new(roles)))
}

/// `POST /api/keystone/roles`
pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(payload): AppJson<CreateRoleRequest>,
) -> Result<Created, AppError> {
    payload.validate()?;
    let role = state.role_service.create_role(&session, &payload.name).await?;
    Ok(Created::new(ResourceKind::Role, role))
}

/// `DELETE /api/keystone/roles` with a JSON array of ids.
pub async fn delete_roles_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(ids): AppJson<Vec<String>>,
) -> Result<StatusCode, AppError> {
    state.role_service.delete_roles(&session, ids).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Grants a role to a user on a project.
///
/// # Endpoint
///
/// `PUT /api/keystone/projects/{project_id}/roles/{role_id}/users/{user_id}`
///
/// The body is optional. When present it must be JSON, and an `action`
/// other than `"grant"` is rejected. Ids are always taken from the path.
pub async fn grant_role_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path((project, role, user)): Path<(String, String, String)>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let request: GrantRoleRequest = if body.iter().all(u8::is_ascii_whitespace) {
        GrantRoleRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    if !request.is_grant() {
        return Err(AppError::bad_request(
            "Unsupported action",
            json!({ "action": request.action, "expected": GrantRoleRequest::GRANT }),
        ));
    }

    let assignment = RoleAssignment {
        project,
        user,
        role,
    };
    state.role_service.grant_role(&session, assignment).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Revokes a role from a user on a project.
///
/// `DELETE /api/keystone/projects/{project_id}/roles/{role_id}/users/{user_id}`
pub async fn revoke_role_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path((project, role, user)): Path<(String, String, String)>,
) -> Result<StatusCode, AppError> {
    let assignment = RoleAssignment {
        project,
        user,
        role,
    };
    state.role_service.revoke_role(&session, assignment).await?;
    Ok(StatusCode::NO_CONTENT)
}
