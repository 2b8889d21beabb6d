//! Keystone implementation of [`ProjectRepository`].

use async_trait::async_trait;
use serde_json::Map;

use super::client::{KeystoneClient, put_opt};
use crate::domain::entities::{
    NewProject, ProjectFilter, ProjectPage, ProjectUpdate, Resource, Session,
};
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

#[async_trait]
impl ProjectRepository for KeystoneClient {
    async fn get(&self, session: &Session, id: &str) -> Result<Resource, AppError> {
        self.get_object(session, &["projects", id], "project").await
    }

    /// Admins see every project (optionally only a user's); everyone else
    /// sees the projects of a user, themselves by default.
    ///
    /// Paginated listing asks for one project more than a page to learn
    /// whether another page exists, then drops it.
    async fn list(&self, session: &Session, filter: ProjectFilter) -> Result<ProjectPage, AppError> {
        let user = match (filter.admin, filter.user.as_deref()) {
            (true, user) => user,
            (false, user) => Some(user.unwrap_or(session.user_id.as_str())),
        };
        let segments = match user {
            Some(user) => vec!["users", user, "projects"],
            None => vec!["projects"],
        };

        let limit = (self.page_size + 1).to_string();
        let mut query = Vec::new();
        if let Some(domain) = filter.domain.as_deref() {
            query.push(("domain_id", domain));
        }
        if filter.paginate {
            query.push(("limit", limit.as_str()));
            if let Some(marker) = filter.marker.as_deref() {
                query.push(("marker", marker));
            }
        }

        let mut items = self
            .get_list(session, &segments, &query, "projects")
            .await?;

        let has_more = filter.paginate && items.len() > self.page_size;
        if has_more {
            items.truncate(self.page_size);
        }

        Ok(ProjectPage { items, has_more })
    }

    async fn create(&self, session: &Session, new_project: NewProject) -> Result<Resource, AppError> {
        let mut attrs = Map::new();
        attrs.insert("name".into(), new_project.name.into());
        attrs.insert("enabled".into(), new_project.enabled.into());
        put_opt(&mut attrs, "description", new_project.description);
        put_opt(&mut attrs, "domain_id", new_project.domain);

        self.create_object(session, &["projects"], "project", attrs)
            .await
    }

    /// Named fields replace extra attributes of the same name.
    async fn update(&self, session: &Session, id: &str, update: ProjectUpdate) -> Result<(), AppError> {
        let mut attrs = update.extra;
        put_opt(&mut attrs, "name", update.name);
        put_opt(&mut attrs, "description", update.description);
        put_opt(&mut attrs, "domain_id", update.domain);
        put_opt(&mut attrs, "enabled", update.enabled);

        self.patch_object(session, &["projects", id], "project", attrs)
            .await
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError> {
        self.delete_object(session, &["projects", id]).await
    }
}
