//! Keystone implementation of [`UserRepository`].

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::client::{KeystoneClient, put_opt};
use crate::domain::entities::{NewUser, Resource, Session, UserFilter, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

impl KeystoneClient {
    async fn patch_user(
        &self,
        session: &Session,
        id: &str,
        attrs: Map<String, Value>,
    ) -> Result<(), AppError> {
        self.patch_object(session, &["users", id], "user", attrs)
            .await
    }
}

#[async_trait]
impl UserRepository for KeystoneClient {
    async fn get(&self, session: &Session, id: &str) -> Result<Resource, AppError> {
        self.get_object(session, &["users", id], "user").await
    }

    async fn get_current(&self, session: &Session) -> Result<Resource, AppError> {
        self.get_object(session, &["users", session.user_id.as_str()], "user")
            .await
    }

    /// The project filter matches the users' default project.
    async fn list(&self, session: &Session, filter: UserFilter) -> Result<Vec<Resource>, AppError> {
        let mut query = Vec::new();
        if let Some(domain) = filter.domain.as_deref() {
            query.push(("domain_id", domain));
        }
        if let Some(project) = filter.project.as_deref() {
            query.push(("default_project_id", project));
        }

        match filter.group.as_deref() {
            Some(group) => {
                self.get_list(session, &["groups", group, "users"], &query, "users")
                    .await
            }
            None => self.get_list(session, &["users"], &query, "users").await,
        }
    }

    async fn create(&self, session: &Session, new_user: NewUser) -> Result<Resource, AppError> {
        let mut attrs = Map::new();
        attrs.insert("name".into(), new_user.name.into());
        attrs.insert("domain_id".into(), new_user.domain.into());
        attrs.insert("enabled".into(), new_user.enabled.into());
        put_opt(&mut attrs, "email", new_user.email);
        put_opt(&mut attrs, "password", new_user.password);
        put_opt(&mut attrs, "default_project_id", new_user.project);

        self.create_object(session, &["users"], "user", attrs).await
    }

    async fn update(&self, session: &Session, id: &str, update: UserUpdate) -> Result<(), AppError> {
        let mut attrs = Map::new();
        put_opt(&mut attrs, "name", update.name);
        put_opt(&mut attrs, "email", update.email);
        put_opt(&mut attrs, "password", update.password);
        put_opt(&mut attrs, "enabled", update.enabled);
        put_opt(&mut attrs, "default_project_id", update.project);

        self.patch_user(session, id, attrs).await
    }

    async fn update_password(
        &self,
        session: &Session,
        id: &str,
        password: &str,
    ) -> Result<(), AppError> {
        let mut attrs = Map::new();
        attrs.insert("password".into(), password.into());
        self.patch_user(session, id, attrs).await
    }

    async fn update_enabled(&self, session: &Session, id: &str, enabled: bool) -> Result<(), AppError> {
        let mut attrs = Map::new();
        attrs.insert("enabled".into(), enabled.into());
        self.patch_user(session, id, attrs).await
    }

    async fn update_project(&self, session: &Session, id: &str, project: &str) -> Result<(), AppError> {
        let mut attrs = Map::new();
        attrs.insert("default_project_id".into(), project.into());
        self.patch_user(session, id, attrs).await
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError> {
        self.delete_object(session, &["users", id]).await
    }
}
