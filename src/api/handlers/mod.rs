//! HTTP request handlers for API endpoints.
//!
//! One module per Keystone resource, plus the public health check.

pub mod domains;
pub mod health;
pub mod projects;
pub mod roles;
pub mod users;

pub use domains::{
    create_domain_handler, delete_domain_handler, delete_domains_handler, domain_list_handler,
    get_domain_handler, update_domain_handler,
};
pub use health::health_handler;
pub use projects::{
    create_project_handler, delete_project_handler, delete_projects_handler,
    get_project_handler, project_list_handler, update_project_handler,
};
pub use roles::{
    create_role_handler, delete_role_handler, delete_roles_handler, get_role_handler,
    grant_role_handler, revoke_role_handler, role_list_handler, update_role_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, delete_users_handler, get_user_handler,
    update_user_handler, user_list_handler,
};
