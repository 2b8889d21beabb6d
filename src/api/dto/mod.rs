//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs derive `Deserialize` and `validator::Validate`; Keystone
//! objects are returned as-is, so only the envelope and health types are
//! response DTOs.

pub mod domain;
pub mod envelope;
pub mod health;
pub mod project;
pub mod role;
pub mod user;
