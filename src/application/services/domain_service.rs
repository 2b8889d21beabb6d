//! Identity domain service.

use crate::application::services::bulk::delete_each;
use crate::application::services::ensure_id;
use crate::domain::entities::{DomainUpdate, Identifier, NewDomain, Resource, Session};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for Keystone domains.
pub struct DomainService {
    repository: Arc<dyn DomainRepository>,
}

impl DomainService {
    /// Creates a new domain service.
    pub fn new(repository: Arc<dyn DomainRepository>) -> Self {
        Self { repository }
    }

    /// Fetches a domain; `default` resolves to the session's default domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain does not exist.
    pub async fn get_domain(&self, session: &Session, id: &Identifier) -> Result<Resource, AppError> {
        match id {
            Identifier::Default => self.repository.get_default(session).await,
            other => self.repository.get(session, other.as_str()).await,
        }
    }

    pub async fn list_domains(&self, session: &Session) -> Result<Vec<Resource>, AppError> {
        self.repository.list(session).await
    }

    /// Creates a new domain.
    ///
    /// # Arguments
    ///
    /// - `name` - Domain name
    /// - `description` - Optional human-readable description
    /// - `enabled` - Defaults to true when `None`
    pub async fn create_domain(
        &self,
        session: &Session,
        name: String,
        description: Option<String>,
        enabled: Option<bool>,
    ) -> Result<Resource, AppError> {
        let new_domain = NewDomain {
            name,
            description,
            enabled: enabled.unwrap_or(true),
        };

        let created = self.repository.create(session, new_domain).await?;
        ensure_id(&created, "domain")?;

        tracing::info!(id = created.id(), "Domain created");
        Ok(created)
    }

    pub async fn update_domain(
        &self,
        session: &Session,
        id: &str,
        update: DomainUpdate,
    ) -> Result<(), AppError> {
        self.repository.update(session, id, update).await?;
        tracing::info!(id, "Domain updated");
        Ok(())
    }

    pub async fn delete_domain(&self, session: &Session, id: &str) -> Result<(), AppError> {
        self.repository.delete(session, id).await?;
        tracing::info!(id, "Domain deleted");
        Ok(())
    }

    pub async fn delete_domains(&self, session: &Session, ids: Vec<String>) -> Result<(), AppError> {
        delete_each("domain", ids, |id| async move {
            self.repository.delete(session, &id).await
        })
        .await
    }
}
