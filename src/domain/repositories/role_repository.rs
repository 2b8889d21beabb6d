//! Repository trait for Keystone roles and role assignments.

use crate::domain::entities::{Resource, RoleAssignment, RoleUpdate, Session};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn get(&self, session: &Session, id: &str) -> Result<Resource, AppError>;

    /// Retrieves the deployment's default member role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the configured role does not exist.
    async fn get_default(&self, session: &Session) -> Result<Resource, AppError>;

    async fn list(&self, session: &Session) -> Result<Vec<Resource>, AppError>;

    /// Lists the roles `user_id` holds on `project_id`.
    async fn list_for_user(
        &self,
        session: &Session,
        user_id: &str,
        project_id: &str,
    ) -> Result<Vec<Resource>, AppError>;

    async fn create(&self, session: &Session, name: &str) -> Result<Resource, AppError>;

    async fn update(&self, session: &Session, id: &str, update: RoleUpdate)
    -> Result<(), AppError>;

    async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError>;

    /// Grants a role to a user on a project.
    async fn grant(&self, session: &Session, assignment: RoleAssignment) -> Result<(), AppError>;

    /// Revokes a role from a user on a project.
    async fn revoke(&self, session: &Session, assignment: RoleAssignment)
    -> Result<(), AppError>;
}
