//! Repository trait for Keystone projects.

use crate::domain::entities::{NewProject, ProjectFilter, ProjectPage, ProjectUpdate, Resource, Session};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get(&self, session: &Session, id: &str) -> Result<Resource, AppError>;

    /// Lists projects. When `filter.paginate` is set only one page is
    /// returned and [`ProjectPage::has_more`] reports whether another follows.
    async fn list(&self, session: &Session, filter: ProjectFilter)
    -> Result<ProjectPage, AppError>;

    async fn create(&self, session: &Session, new_project: NewProject)
    -> Result<Resource, AppError>;

    async fn update(
        &self,
        session: &Session,
        id: &str,
        update: ProjectUpdate,
    ) -> Result<(), AppError>;

    async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError>;
}
