//! # keystone-gateway
//!
//! A stateless REST gateway exposing Keystone users, roles, domains and
//! projects as JSON, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Request inputs, sessions and repository traits
//! - **Application Layer** ([`application`]) - Sentinel lookups, defaults, patch dispatch, bulk deletion
//! - **Infrastructure Layer** ([`infrastructure`]) - Keystone v3 HTTP client
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - `current` user and `default` role/domain lookups
//! - Partial updates routed to Keystone's narrow user operations
//! - Ordered bulk deletion with per-item failure reporting
//! - Optional marker pagination for projects
//! - Per-request Keystone token authentication, rate limiting and tracing
//!
//! ## Quick Start
//!
//! ```bash
//! export KEYSTONE_URL="http://localhost:5000/v3"
//! cargo run
//!
//! curl -H "X-Auth-Token: $OS_TOKEN" localhost:8080/api/keystone/users/current
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, DomainService, ProjectService, RoleService, UserService,
    };
    pub use crate::domain::entities::{Identifier, Resource, ResourceKind, Session};
    pub use crate::error::AppError;
    pub use crate::infrastructure::keystone::{KeystoneClient, KeystoneSettings};
    pub use crate::routes::{api_router, app_router};
    pub use crate::state::AppState;
}
