//! Repository trait for Keystone users.

use crate::domain::entities::{NewUser, Resource, Session, UserFilter, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Backend operations on users.
///
/// Besides the combined [`update`](UserRepository::update), Keystone users
/// have narrow single-attribute mutations; callers pick one of them when a
/// patch touches exactly that attribute.
///
/// # Implementations
///
/// - [`crate::infrastructure::keystone::KeystoneClient`] - Keystone v3 over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn get(&self, session: &Session, id: &str) -> Result<Resource, AppError>;

    /// Fetches the user the session belongs to.
    async fn get_current(&self, session: &Session) -> Result<Resource, AppError>;

    async fn list(&self, session: &Session, filter: UserFilter)
    -> Result<Vec<Resource>, AppError>;

    /// Creates a user and returns it as stored by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is taken in the domain.
    async fn create(&self, session: &Session, new_user: NewUser) -> Result<Resource, AppError>;

    /// Applies a combined update; `None` fields are left unchanged.
    async fn update(&self, session: &Session, id: &str, update: UserUpdate)
    -> Result<(), AppError>;

    async fn update_password(
        &self,
        session: &Session,
        id: &str,
        password: &str,
    ) -> Result<(), AppError>;

    async fn update_enabled(&self, session: &Session, id: &str, enabled: bool)
    -> Result<(), AppError>;

    /// Changes the user's default project.
    async fn update_project(&self, session: &Session, id: &str, project: &str)
    -> Result<(), AppError>;

    async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError>;
}
