//! Keystone v3 adapter.
//!
//! [`KeystoneClient`] implements every repository trait of the domain layer
//! over the Keystone v3 REST API, one file per resource:
//!
//! - `users` - users, project membership via role assignments
//! - `roles` - roles and project role grants
//! - `domains` - domains and default-domain resolution
//! - `projects` - projects with marker pagination
//! - `tokens` - token validation and the health probe

mod client;
mod domains;
mod error;
mod projects;
mod roles;
mod tokens;
mod users;

pub use client::{KeystoneClient, KeystoneSettings};
