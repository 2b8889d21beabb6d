//! Domain layer: entities and backend repository interfaces.
//!
//! # Architecture
//!
//! - [`entities`] - Resources, identifiers, sessions and request-derived inputs
//! - [`repositories`] - Backend trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Request rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
