//! Repository trait for Keystone domains.

use crate::domain::entities::{DomainUpdate, NewDomain, Resource, Session};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for identity domains.
///
/// # Implementations
///
/// - [`crate::infrastructure::keystone::KeystoneClient`] - Keystone v3 over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Finds a domain by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain does not exist.
    async fn get(&self, session: &Session, id: &str) -> Result<Resource, AppError>;

    /// Retrieves the default domain for this session.
    ///
    /// Resolution order: the session's domain context, the domain of the
    /// session's user, then the deployment-wide default domain id.
    async fn get_default(&self, session: &Session) -> Result<Resource, AppError>;

    async fn list(&self, session: &Session) -> Result<Vec<Resource>, AppError>;

    async fn create(&self, session: &Session, new_domain: NewDomain)
    -> Result<Resource, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain does not exist.
    async fn update(&self, session: &Session, id: &str, update: DomainUpdate)
    -> Result<(), AppError>;

    /// Deletes a domain. Keystone refuses to delete enabled domains.
    async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError>;
}
