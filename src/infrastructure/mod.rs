//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`keystone`] - Keystone v3 HTTP client implementing all repositories

pub mod keystone;
