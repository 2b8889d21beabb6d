//! Project management service.

use crate::application::services::bulk::delete_each;
use crate::application::services::ensure_id;
use crate::domain::entities::{NewProject, ProjectFilter, ProjectPage, ProjectUpdate, Resource, Session};
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Query-level options for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectListOptions {
    pub paginate: Option<bool>,
    pub marker: Option<String>,
    pub domain: Option<String>,
    pub user: Option<String>,
    pub admin: Option<bool>,
}

/// Service for Keystone projects.
///
/// Whether listings are paginated is partly a deployment decision, so the
/// toggle is handed in at construction rather than read from global state.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
    paginate_by_default: bool,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>, paginate_by_default: bool) -> Self {
        Self {
            repository,
            paginate_by_default,
        }
    }

    pub async fn get_project(&self, session: &Session, id: &str) -> Result<Resource, AppError> {
        self.repository.get(session, id).await
    }

    /// Lists projects.
    ///
    /// A page is requested when the caller asks for it (`paginate=true`),
    /// supplies a marker, or the deployment paginates by default. `admin`
    /// defaults to true.
    pub async fn list_projects(
        &self,
        session: &Session,
        options: ProjectListOptions,
    ) -> Result<ProjectPage, AppError> {
        let paginate = self.paginate_by_default
            || options.paginate.unwrap_or(false)
            || options.marker.is_some();

        let filter = ProjectFilter {
            paginate,
            marker: options.marker,
            domain: options.domain,
            user: options.user,
            admin: options.admin.unwrap_or(true),
        };

        self.repository.list(session, filter).await
    }

    /// Creates a project; `enabled` defaults to true.
    pub async fn create_project(
        &self,
        session: &Session,
        name: String,
        description: Option<String>,
        domain: Option<String>,
        enabled: Option<bool>,
    ) -> Result<Resource, AppError> {
        let new_project = NewProject {
            name,
            description,
            domain,
            enabled: enabled.unwrap_or(true),
        };

        let created = self.repository.create(session, new_project).await?;
        ensure_id(&created, "project")?;

        tracing::info!(id = created.id(), "Project created");
        Ok(created)
    }

    pub async fn update_project(
        &self,
        session: &Session,
        id: &str,
        update: ProjectUpdate,
    ) -> Result<(), AppError> {
        if !update.extra.is_empty() {
            let keys: Vec<&str> = update.extra.keys().map(String::as_str).collect();
            tracing::debug!(id, ?keys, "Forwarding extra project attributes");
        }

        self.repository.update(session, id, update).await?;
        tracing::info!(id, "Project updated");
        Ok(())
    }

    pub async fn delete_project(&self, session: &Session, id: &str) -> Result<(), AppError> {
        self.repository.delete(session, id).await?;
        tracing::info!(id, "Project deleted");
        Ok(())
    }

    pub async fn delete_projects(&self, session: &Session, ids: Vec<String>) -> Result<(), AppError> {
        delete_each("project", ids, |id| async move {
            self.repository.delete(session, &id).await
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProjectRepository;
    use serde_json::{Map, json};

    fn resource(value: serde_json::Value) -> Resource {
        serde_json::from_value(value).unwrap()
    }

    fn session() -> Session {
        Session::new("token", "admin")
    }

    #[tokio::test]
    async fn test_list_projects_defaults() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo
            .expect_list()
            .withf(|_, f| {
                f == &ProjectFilter {
                    paginate: false,
                    marker: None,
                    domain: None,
                    user: None,
                    admin: true,
                }
            })
            .times(1)
            .returning(|_, _| {
                Ok(ProjectPage {
                    items: vec![
                        resource(json!({ "name": "Ni!" })),
                        resource(json!({ "name": "Ptang!" })),
                    ],
                    has_more: false,
                })
            });

        let service = ProjectService::new(Arc::new(mock_repo), false);
        let page = service
            .list_projects(&session(), ProjectListOptions::default())
            .await
            .unwrap();

        assert!(!page.has_more);
        assert_eq!(page.items[0].get("name").unwrap(), "Ni!");
    }

    #[tokio::test]
    async fn test_marker_enables_pagination() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo
            .expect_list()
            .withf(|_, f| f.paginate && f.marker.as_deref() == Some("p20"))
            .times(1)
            .returning(|_, _| Ok(ProjectPage::default()));

        let service = ProjectService::new(Arc::new(mock_repo), false);
        let options = ProjectListOptions {
            marker: Some("p20".into()),
            ..Default::default()
        };

        assert!(service.list_projects(&session(), options).await.is_ok());
    }

    #[tokio::test]
    async fn test_deployment_setting_enables_pagination() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo
            .expect_list()
            .withf(|_, f| f.paginate && f.marker.is_none())
            .times(1)
            .returning(|_, _| Ok(ProjectPage::default()));

        let service = ProjectService::new(Arc::new(mock_repo), true);

        assert!(
            service
                .list_projects(&session(), ProjectListOptions::default())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_list_projects_non_admin_for_user() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo
            .expect_list()
            .withf(|_, f| !f.admin && f.user.as_deref() == Some("u1") && f.domain.as_deref() == Some("d1"))
            .times(1)
            .returning(|_, _| Ok(ProjectPage::default()));

        let service = ProjectService::new(Arc::new(mock_repo), false);
        let options = ProjectListOptions {
            domain: Some("d1".into()),
            user: Some("u1".into()),
            admin: Some(false),
            ..Default::default()
        };

        assert!(service.list_projects(&session(), options).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_project_partial() {
        let mut mock_repo = MockProjectRepository::new();
        mock_repo
            .expect_create()
            .withf(|_, p| {
                p == &NewProject {
                    name: "bob".into(),
                    description: None,
                    domain: None,
                    enabled: true,
                }
            })
            .times(1)
            .returning(|_, _| Ok(resource(json!({ "id": "project123", "name": "bob" }))));

        let service = ProjectService::new(Arc::new(mock_repo), false);
        let created = service
            .create_project(&session(), "bob".into(), None, None, None)
            .await
            .unwrap();

        assert_eq!(created.id(), Some("project123"));
    }

    #[tokio::test]
    async fn test_update_project_forwards_extra() {
        let mut extra = Map::new();
        extra.insert("foo".into(), json!("bar"));
        let expected = ProjectUpdate {
            name: Some("spam".into()),
            description: None,
            domain: Some("domain123".into()),
            enabled: None,
            extra,
        };

        let mut mock_repo = MockProjectRepository::new();
        let matcher = expected.clone();
        mock_repo
            .expect_update()
            .withf(move |_, id, u| id == "spam123" && u == &matcher)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = ProjectService::new(Arc::new(mock_repo), false);

        assert!(
            service
                .update_project(&session(), "spam123", expected)
                .await
                .is_ok()
        );
    }
}
