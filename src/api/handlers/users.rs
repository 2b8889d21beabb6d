//! Handlers for user endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::envelope::ListResponse;
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserListQuery};
use crate::api::extract::{AppJson, Created};
use crate::domain::entities::{Identifier, Resource, ResourceKind, Session};
use crate::error::AppError;
use crate::state::AppState;

/// Fetches a user.
///
/// # Endpoint
///
/// `GET /api/keystone/users/{id}`
///
/// `current` returns the caller's own user.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, AppError> {
    let id = Identifier::parse(ResourceKind::User, id);
    let user = state.user_service.get_user(&session, &id).await?;
    Ok(Json(user))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PATCH /api/keystone/users/{id}`
///
/// Editable fields: `name`, `email`, `password`, `enabled`, `project_id`.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateUserRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;
    state
        .user_service
        .update_user(&session, &id, payload.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/keystone/users/{id}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(&session, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists users.
///
/// # Endpoint
///
/// `GET /api/keystone/users?project_id=&domain_id=&group_id=`
///
/// Without `domain_id` the caller's domain context applies.
pub async fn user_list_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<UserListQuery>,
) -> Result<Json<ListResponse<Resource>>, AppError> {
    let users = state.user_service.list_users(&session, query.into()).await?;
    Ok(Json(ListResponse::new(users)))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/keystone/users`
///
/// # Errors
///
/// Returns 400 if `name` is missing or invalid.
/// Returns 502 if the created user comes back without an id.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<Created, AppError> {
    payload.validate()?;
    let user = state.user_service.create_user(&session, payload.into()).await?;
    Ok(Created::new(ResourceKind::User, user))
}

/// Deletes several users.
///
/// # Endpoint
///
/// `DELETE /api/keystone/users` with a JSON array of ids.
pub async fn delete_users_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(ids): AppJson<Vec<String>>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_users(&session, ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
