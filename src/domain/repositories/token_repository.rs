//! Repository trait for token validation.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Validates caller tokens against the identity service.
///
/// # Implementations
///
/// - [`crate::infrastructure::keystone::KeystoneClient`] - `GET /v3/auth/tokens`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Validates `token` and returns the session it describes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown, revoked or
    /// expired.
    async fn validate(&self, token: &str) -> Result<Session, AppError>;

    /// Checks whether the identity endpoint answers at all.
    ///
    /// Used by the health endpoint; never fails.
    async fn health_check(&self) -> bool;
}
