//! API route configuration.
//!
//! All routes require a Keystone token via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_domain_handler, create_project_handler, create_role_handler, create_user_handler,
    delete_domain_handler, delete_domains_handler, delete_project_handler,
    delete_projects_handler, delete_role_handler, delete_roles_handler, delete_user_handler,
    delete_users_handler, domain_list_handler, get_domain_handler, get_project_handler,
    get_role_handler, get_user_handler, grant_role_handler, project_list_handler,
    revoke_role_handler, role_list_handler, update_domain_handler, update_project_handler,
    update_role_handler, update_user_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get, routing::put};

/// Keystone resource routes, mounted under `/api/keystone`.
///
/// # Endpoints
///
/// - `GET|POST|DELETE         /users`          - List, create, bulk delete
/// - `GET|PATCH|DELETE        /users/{id}`     - `id` may be `current`
/// - `GET|POST|DELETE         /roles`
/// - `GET|PATCH|DELETE        /roles/{id}`     - `id` may be `default`
/// - `GET|POST|DELETE         /domains`
/// - `GET|PATCH|DELETE        /domains/{id}`   - `id` may be `default`
/// - `GET|POST|DELETE         /projects`
/// - `GET|PATCH|DELETE        /projects/{id}`
/// - `PUT|DELETE /projects/{project_id}/roles/{role_id}/users/{user_id}` - Grant, revoke
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(user_list_handler)
                .post(create_user_handler)
                .delete(delete_users_handler),
        )
        .route(
            "/users/{id}",
            get(get_user_handler)
                .patch(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/roles",
            get(role_list_handler)
                .post(create_role_handler)
                .delete(delete_roles_handler),
        )
        .route(
            "/roles/{id}",
            get(get_role_handler)
                .patch(update_role_handler)
                .delete(delete_role_handler),
        )
        .route(
            "/domains",
            get(domain_list_handler)
                .post(create_domain_handler)
                .delete(delete_domains_handler),
        )
        .route(
            "/domains/{id}",
            get(get_domain_handler)
                .patch(update_domain_handler)
                .delete(delete_domain_handler),
        )
        .route(
            "/projects",
            get(project_list_handler)
                .post(create_project_handler)
                .delete(delete_projects_handler),
        )
        .route(
            "/projects/{id}",
            get(get_project_handler)
                .patch(update_project_handler)
                .delete(delete_project_handler),
        )
        // `{id}` here is the project; the name matches `/projects/{id}`.
        .route(
            "/projects/{id}/roles/{role_id}/users/{user_id}",
            put(grant_role_handler).delete(revoke_role_handler),
        )
}
