//! User management service.

use crate::application::services::bulk::delete_each;
use crate::application::services::ensure_id;
use crate::domain::entities::{
    Identifier, NewUser, Resource, Session, UserFilter, UserPatch, UserUpdate,
};
use crate::domain::repositories::{DomainRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Fields accepted when creating a user, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub project: Option<String>,
    pub domain: Option<String>,
    pub enabled: Option<bool>,
}

/// Service for Keystone users.
///
/// Resolves the `current` sentinel, fills creation defaults and routes
/// patches to the narrowest backend operation that covers them.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    domains: Arc<dyn DomainRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, domains: Arc<dyn DomainRepository>) -> Self {
        Self { users, domains }
    }

    /// Fetches a user; `current` resolves to the session's own user.
    pub async fn get_user(&self, session: &Session, id: &Identifier) -> Result<Resource, AppError> {
        match id {
            Identifier::Current => self.users.get_current(session).await,
            other => self.users.get(session, other.as_str()).await,
        }
    }

    /// Lists users. Without an explicit domain filter the session's domain
    /// context applies.
    pub async fn list_users(
        &self,
        session: &Session,
        mut filter: UserFilter,
    ) -> Result<Vec<Resource>, AppError> {
        if filter.domain.is_none() {
            filter.domain = session.domain_context.clone();
        }
        self.users.list(session, filter).await
    }

    /// Creates a user.
    ///
    /// # Defaults
    ///
    /// - `enabled`: true
    /// - `domain`: the session's default domain, resolved from the backend
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadGateway`] if the backend returns a user
    /// without an id.
    pub async fn create_user(&self, session: &Session, input: CreateUser) -> Result<Resource, AppError> {
        let domain = match input.domain {
            Some(domain) => domain,
            None => {
                let default = self.domains.get_default(session).await?;
                default.id().map(str::to_owned).ok_or_else(|| {
                    AppError::bad_gateway("Default domain has no id", json!({}))
                })?
            }
        };

        let new_user = NewUser {
            name: input.name,
            email: input.email,
            password: input.password,
            project: input.project,
            domain,
            enabled: input.enabled.unwrap_or(true),
        };

        let created = self.users.create(session, new_user).await?;
        ensure_id(&created, "user")?;

        tracing::info!(id = created.id(), "User created");
        Ok(created)
    }

    /// Applies a partial update through the operation picked by
    /// [`UserPatch::plan`].
    pub async fn update_user(&self, session: &Session, id: &str, update: UserUpdate) -> Result<(), AppError> {
        match UserPatch::plan(update) {
            UserPatch::Noop => {
                tracing::debug!(id, "User patch without editable fields");
                return Ok(());
            }
            UserPatch::Password(password) => {
                self.users.update_password(session, id, &password).await?
            }
            UserPatch::Enabled(enabled) => self.users.update_enabled(session, id, enabled).await?,
            UserPatch::Project(project) => self.users.update_project(session, id, &project).await?,
            UserPatch::Combined(update) => self.users.update(session, id, update).await?,
        }

        tracing::info!(id, "User updated");
        Ok(())
    }

    pub async fn delete_user(&self, session: &Session, id: &str) -> Result<(), AppError> {
        self.users.delete(session, id).await?;
        tracing::info!(id, "User deleted");
        Ok(())
    }

    pub async fn delete_users(&self, session: &Session, ids: Vec<String>) -> Result<(), AppError> {
        delete_each("user", ids, |id| async move { self.users.delete(session, &id).await }).await
    }
}
