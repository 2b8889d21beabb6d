//! Handlers for project endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::envelope::ListResponse;
use crate::api::dto::project::{CreateProjectRequest, ProjectListQuery, UpdateProjectRequest};
use crate::api::extract::{AppJson, Created};
use crate::domain::entities::{Resource, ResourceKind, Session};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/keystone/projects/{id}`
pub async fn get_project_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, AppError> {
    let project = state.project_service.get_project(&session, &id).await?;
    Ok(Json(project))
}

/// Partially updates a project.
///
/// # Endpoint
///
/// `PATCH /api/keystone/projects/{id}`
///
/// Besides `name`, `description`, `domain_id` and `enabled`, any other key
/// is forwarded to Keystone as a project attribute.
pub async fn update_project_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateProjectRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;
    state
        .project_service
        .update_project(&session, &id, payload.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/keystone/projects/{id}`
pub async fn delete_project_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.project_service.delete_project(&session, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists projects.
///
/// # Endpoint
///
/// `GET /api/keystone/projects?paginate=&marker=&domain_id=&user_id=&admin=`
///
/// # Response
///
/// ```json
/// { "has_more": false, "items": [{ "id": "...", "name": "demo" }] }
/// ```
///
/// `has_more` is always present.
pub async fn project_list_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<ListResponse<Resource>>, AppError> {
    let page = state
        .project_service
        .list_projects(&session, query.into())
        .await?;
    Ok(Json(ListResponse::paged(page.items, page.has_more)))
}

/// `POST /api/keystone/projects`
pub async fn create_project_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(payload): AppJson<CreateProjectRequest>,
) -> Result<Created, AppError> {
    payload.validate()?;
    let project = state
        .project_service
        .create_project(
            &session,
            payload.name,
            payload.description,
            payload.domain_id,
            payload.enabled,
        )
        .await?;
    Ok(Created::new(ResourceKind::Project, project))
}

/// `DELETE /api/keystone/projects` with a JSON array of ids.
pub async fn delete_projects_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(ids): AppJson<Vec<String>>,
) -> Result<StatusCode, AppError> {
    state.project_service.delete_projects(&session, ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
