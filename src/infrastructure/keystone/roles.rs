//! Keystone implementation of [`RoleRepository`].

use async_trait::async_trait;
use serde_json::{Map, json};

use super::client::{KeystoneClient, put_opt};
use crate::domain::entities::{Resource, RoleAssignment, RoleUpdate, Session};
use crate::domain::repositories::RoleRepository;
use crate::error::AppError;

#[async_trait]
impl RoleRepository for KeystoneClient {
    async fn get(&self, session: &Session, id: &str) -> Result<Resource, AppError> {
        self.get_object(session, &["roles", id], "role").await
    }

    /// Looks the configured default role up by name.
    async fn get_default(&self, session: &Session) -> Result<Resource, AppError> {
        let name = self.default_role.as_str();
        let roles = self
            .get_list(session, &["roles"], &[("name", name)], "roles")
            .await?;

        roles.into_iter().next().ok_or_else(|| {
            AppError::not_found(
                format!("Default role '{name}' not found"),
                json!({ "name": name }),
            )
        })
    }

    async fn list(&self, session: &Session) -> Result<Vec<Resource>, AppError> {
        self.get_list(session, &["roles"], &[], "roles").await
    }

    async fn list_for_user(
        &self,
        session: &Session,
        user_id: &str,
        project_id: &str,
    ) -> Result<Vec<Resource>, AppError> {
        self.get_list(
            session,
            &["projects", project_id, "users", user_id, "roles"],
            &[],
            "roles",
        )
        .await
    }

    async fn create(&self, session: &Session, name: &str) -> Result<Resource, AppError> {
        let mut attrs = Map::new();
        attrs.insert("name".into(), name.into());
        self.create_object(session, &["roles"], "role", attrs).await
    }

    async fn update(&self, session: &Session, id: &str, update: RoleUpdate) -> Result<(), AppError> {
        let mut attrs = Map::new();
        put_opt(&mut attrs, "name", update.name);
        self.patch_object(session, &["roles", id], "role", attrs)
            .await
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError> {
        self.delete_object(session, &["roles", id]).await
    }

    async fn grant(&self, session: &Session, assignment: RoleAssignment) -> Result<(), AppError> {
        self.put_empty(session, &assignment_path(&assignment)).await
    }

    async fn revoke(&self, session: &Session, assignment: RoleAssignment) -> Result<(), AppError> {
        self.delete_object(session, &assignment_path(&assignment))
            .await
    }
}

fn assignment_path(assignment: &RoleAssignment) -> [&str; 6] {
    [
        "projects",
        assignment.project.as_str(),
        "users",
        assignment.user.as_str(),
        "roles",
        assignment.role.as_str(),
    ]
}
