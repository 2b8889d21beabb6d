//! Repository trait definitions for the domain layer.
//!
//! These traits are the gateway's view of the identity backend. Services only
//! depend on them, so the backend client stays an opaque collaborator.
//!
//! # Architecture
//!
//! - Traits define the contract for backend operations
//! - The implementation lives in `crate::infrastructure::keystone`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Users, including narrow single-attribute updates
//! - [`RoleRepository`] - Roles and project role assignments
//! - [`DomainRepository`] - Identity domains and the default domain
//! - [`ProjectRepository`] - Projects with optional pagination
//! - [`TokenRepository`] - Token validation

pub mod domain_repository;
pub mod project_repository;
pub mod role_repository;
pub mod token_repository;
pub mod user_repository;

pub use domain_repository::DomainRepository;
pub use project_repository::ProjectRepository;
pub use role_repository::RoleRepository;
pub use token_repository::TokenRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use domain_repository::MockDomainRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
#[cfg(test)]
pub use role_repository::MockRoleRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
