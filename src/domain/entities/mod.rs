//! Core entities passed between the API, services and the identity backend.
//!
//! Keystone objects themselves are never modelled field by field: they travel
//! as [`Resource`] mappings. The typed structs here are the inputs the
//! gateway builds from requests.

pub mod domain;
pub mod identifier;
pub mod project;
pub mod resource;
pub mod role;
pub mod session;
pub mod user;

pub use domain::{DomainUpdate, NewDomain};
pub use identifier::Identifier;
pub use project::{NewProject, ProjectFilter, ProjectPage, ProjectUpdate};
pub use resource::{Resource, ResourceKind};
pub use role::{RoleAssignment, RoleUpdate};
pub use session::{Session, token_fingerprint};
pub use user::{NewUser, UserFilter, UserPatch, UserUpdate};
