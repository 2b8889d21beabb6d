//! Role management service.

use crate::application::services::bulk::delete_each;
use crate::application::services::ensure_id;
use crate::domain::entities::{Identifier, Resource, RoleAssignment, RoleUpdate, Session};
use crate::domain::repositories::RoleRepository;
use crate::error::AppError;
use std::sync::Arc;

pub struct RoleService {
    roles: Arc<dyn RoleRepository>,
}

impl RoleService {
    pub fn new(roles: Arc<dyn RoleRepository>) -> Self {
        Self { roles }
    }

    /// Fetches a role; `default` resolves to the deployment's default role.
    pub async fn get_role(&self, session: &Session, id: &Identifier) -> Result<Resource, AppError> {
        match id {
            Identifier::Default => self.roles.get_default(session).await,
            other => self.roles.get(session, other.as_str()).await,
        }
    }

    /// Lists roles. With both a user and a project the result is the roles
    /// that user holds on that project.
    pub async fn list_roles(
        &self,
        session: &Session,
        user_id: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<Vec<Resource>, AppError> {
        match (user_id, project_id) {
            (Some(user_id), Some(project_id)) => {
                self.roles.list_for_user(session, user_id, project_id).await
            }
            _ => self.roles.list(session).await,
        }
    }

    pub async fn create_role(&self, session: &Session, name: &str) -> Result<Resource, AppError> {
        let created = self.roles.create(session, name).await?;
        ensure_id(&created, "role")?;

        tracing::info!(id = created.id(), name, "Role created");
        Ok(created)
    }

    pub async fn update_role(&self, session: &Session, id: &str, update: RoleUpdate) -> Result<(), AppError> {
        self.roles.update(session, id, update).await?;
        tracing::info!(id, "Role updated");
        Ok(())
    }

    pub async fn delete_role(&self, session: &Session, id: &str) -> Result<(), AppError> {
        self.roles.delete(session, id).await?;
        tracing::info!(id, "Role deleted");
        Ok(())
    }

    pub async fn delete_roles(&self, session: &Session, ids: Vec<String>) -> Result<(), AppError> {
        delete_each("role", ids, |id| async move { self.roles.delete(session, &id).await }).await
    }

    pub async fn grant_role(&self, session: &Session, assignment: RoleAssignment) -> Result<(), AppError> {
        tracing::info!(
            project = %assignment.project,
            user = %assignment.user,
            role = %assignment.role,
            "Granting role"
        );
        self.roles.grant(session, assignment).await
    }

    pub async fn revoke_role(&self, session: &Session, assignment: RoleAssignment) -> Result<(), AppError> {
        tracing::info!(
            project = %assignment.project,
            user = %assignment.user,
            role = %assignment.role,
            "Revoking role"
        );
        self.roles.revoke(session, assignment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRoleRepository;
    use serde_json::json;

    fn resource(value: serde_json::Value) -> Resource {
        serde_json::from_value(value).unwrap()
    }

    fn session() -> Session {
        Session::new("token", "admin")
    }

    #[tokio::test]
    async fn test_get_role_by_id() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_get()
            .withf(|_, id| id == "the_id")
            .times(1)
            .returning(|_, _| Ok(resource(json!({ "name": "Ni!" }))));
        roles.expect_get_default().never();

        let svc = RoleService::new(Arc::new(roles));
        let role = svc
            .get_role(&session(), &Identifier::Literal("the_id".into()))
            .await
            .unwrap();

        assert_eq!(role.get("name").unwrap(), "Ni!");
    }

    #[tokio::test]
    async fn test_get_default_role_skips_generic_get() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_get_default()
            .times(1)
            .returning(|_| Ok(resource(json!({ "name": "Ni!" }))));
        roles.expect_get().never();

        let svc = RoleService::new(Arc::new(roles));
        let role = svc.get_role(&session(), &Identifier::Default).await.unwrap();

        assert_eq!(role.get("name").unwrap(), "Ni!");
    }

    #[tokio::test]
    async fn test_list_roles_generic() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_list()
            .times(1)
            .returning(|_| Ok(vec![resource(json!({ "name": "Ni!" }))]));
        roles.expect_list_for_user().never();

        let svc = RoleService::new(Arc::new(roles));

        assert_eq!(svc.list_roles(&session(), None, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_roles_for_user_in_project() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_list_for_user()
            .withf(|_, user, project| user == "user123" && project == "project123")
            .times(1)
            .returning(|_, _, _| Ok(vec![resource(json!({ "name": "Ni!" }))]));
        roles.expect_list().never();

        let svc = RoleService::new(Arc::new(roles));
        let items = svc
            .list_roles(&session(), Some("user123"), Some("project123"))
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_roles_user_without_project_is_generic() {
        let mut roles = MockRoleRepository::new();
        roles.expect_list().times(1).returning(|_| Ok(Vec::new()));
        roles.expect_list_for_user().never();

        let svc = RoleService::new(Arc::new(roles));

        assert!(svc.list_roles(&session(), Some("user123"), None).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_role() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_create()
            .withf(|_, name| name == "bob")
            .times(1)
            .returning(|_, _| Ok(resource(json!({ "id": "role123", "name": "bob" }))));

        let svc = RoleService::new(Arc::new(roles));
        let created = svc.create_role(&session(), "bob").await.unwrap();

        assert_eq!(created.id(), Some("role123"));
    }

    #[tokio::test]
    async fn test_update_role() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_update()
            .withf(|_, id, u| id == "the_id" && u.name.as_deref() == Some("spam"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let svc = RoleService::new(Arc::new(roles));
        let update = RoleUpdate {
            name: Some("spam".into()),
        };

        assert!(svc.update_role(&session(), "the_id", update).await.is_ok());
    }

    #[tokio::test]
    async fn test_grant_role_passes_assignment() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_grant()
            .withf(|_, a| a.project == "project1" && a.user == "user3" && a.role == "role2")
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = RoleService::new(Arc::new(roles));
        let assignment = RoleAssignment {
            project: "project1".into(),
            user: "user3".into(),
            role: "role2".into(),
        };

        assert!(svc.grant_role(&session(), assignment).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_roles_attempts_every_id() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_delete()
            .times(3)
            .returning(|_, id| {
                if id == "id1" {
                    Err(AppError::not_found("Role not found", json!({})))
                } else {
                    Ok(())
                }
            });

        let svc = RoleService::new(Arc::new(roles));
        let ids = vec!["id1".into(), "id2".into(), "id3".into()];
        let err = svc.delete_roles(&session(), ids).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_error_info().details["deleted"], 2);
    }
}
