//! Application layer: services orchestrating backend calls per request.

pub mod services;
