//! Shared application state.

use std::sync::Arc;

use crate::application::services::{
    AuthService, DomainService, ProjectService, RoleService, UserService,
};
use crate::infrastructure::keystone::KeystoneClient;

/// Services shared by all handlers.
///
/// Holds no per-request data; every call works from the request and its
/// session only.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub role_service: Arc<RoleService>,
    pub domain_service: Arc<DomainService>,
    pub project_service: Arc<ProjectService>,
}

impl AppState {
    /// Wires every service to the same Keystone client.
    ///
    /// `paginate_projects` turns on pagination for every project listing.
    pub fn new(keystone: Arc<KeystoneClient>, paginate_projects: bool) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(keystone.clone())),
            user_service: Arc::new(UserService::new(keystone.clone(), keystone.clone())),
            role_service: Arc::new(RoleService::new(keystone.clone())),
            domain_service: Arc::new(DomainService::new(keystone.clone())),
            project_service: Arc::new(ProjectService::new(keystone, paginate_projects)),
        }
    }
}
