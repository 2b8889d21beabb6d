//! Handlers for domain endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::domain::{CreateDomainRequest, UpdateDomainRequest};
use crate::api::dto::envelope::ListResponse;
use crate::api::extract::{AppJson, Created};
use crate::domain::entities::{Identifier, Resource, ResourceKind, Session};
use crate::error::AppError;
use crate::state::AppState;

/// Fetches a domain.
///
/// # Endpoint
///
/// `GET /api/keystone/domains/{id}`
///
/// `default` returns the caller's default domain: the selected domain
/// context, else the domain of the caller's user, else the deployment
/// default.
pub async fn get_domain_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, AppError> {
    let id = Identifier::parse(ResourceKind::Domain, id);
    let domain = state.domain_service.get_domain(&session, &id).await?;
    Ok(Json(domain))
}

/// Partially updates a domain.
///
/// # Endpoint
///
/// `PATCH /api/keystone/domains/{id}`
///
/// Absent fields are left unchanged.
pub async fn update_domain_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateDomainRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;
    state
        .domain_service
        .update_domain(&session, &id, payload.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a domain.
///
/// # Endpoint
///
/// `DELETE /api/keystone/domains/{id}`
///
/// # Errors
///
/// Keystone refuses to delete an enabled domain; its error is passed on.
pub async fn delete_domain_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.domain_service.delete_domain(&session, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists all domains visible to the caller.
///
/// # Endpoint
///
/// `GET /api/keystone/domains`
pub async fn domain_list_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<ListResponse<Resource>>, AppError> {
    let domains = state.domain_service.list_domains(&session).await?;
    Ok(Json(ListResponse::new(domains)))
}

/// Creates a new domain.
///
/// # Endpoint
///
/// `POST /api/keystone/domains`
///
/// # Errors
///
/// Returns 400 if the domain name is missing or invalid.
/// Returns 409 if the domain already exists.
pub async fn create_domain_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(payload): AppJson<CreateDomainRequest>,
) -> Result<Created, AppError> {
    payload.validate()?;
    let domain = state
        .domain_service
        .create_domain(&session, payload.name, payload.description, payload.enabled)
        .await?;
    Ok(Created::new(ResourceKind::Domain, domain))
}

/// Deletes several domains.
///
/// # Endpoint
///
/// `DELETE /api/keystone/domains` with a JSON array of ids, deleted in order.
pub async fn delete_domains_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    AppJson(ids): AppJson<Vec<String>>,
) -> Result<StatusCode, AppError> {
    state.domain_service.delete_domains(&session, ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
