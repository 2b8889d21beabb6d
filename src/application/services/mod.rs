//! Request-level rules over the identity backend.
//!
//! - [`UserService`] - `current` lookup, creation defaults, narrow patch dispatch
//! - [`RoleService`] - `default` lookup, per-user listing, grants
//! - [`DomainService`] - `default` lookup, creation defaults
//! - [`ProjectService`] - pagination decision, extra-attribute forwarding
//! - [`AuthService`] - token validation into a [`crate::domain::entities::Session`]
//! - [`bulk`] - ordered, best-effort bulk deletion

pub mod auth_service;
pub mod bulk;
pub mod domain_service;
pub mod project_service;
pub mod role_service;
pub mod user_service;

use serde_json::json;

use crate::domain::entities::Resource;
use crate::error::AppError;

pub use auth_service::AuthService;
pub use domain_service::DomainService;
pub use project_service::{ProjectListOptions, ProjectService};
pub use role_service::RoleService;
pub use user_service::{CreateUser, UserService};

/// Rejects created objects the backend returned without an id.
pub(crate) fn ensure_id(resource: &Resource, kind: &str) -> Result<(), AppError> {
    if resource.id().is_none() {
        return Err(AppError::bad_gateway(
            format!("Identity service returned a {kind} without an id"),
            json!({ "kind": kind }),
        ));
    }
    Ok(())
}
