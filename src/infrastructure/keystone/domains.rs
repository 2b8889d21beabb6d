//! Keystone implementation of [`DomainRepository`].

use async_trait::async_trait;
use serde_json::Map;

use super::client::{KeystoneClient, put_opt};
use crate::domain::entities::{DomainUpdate, NewDomain, Resource, Session};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;

impl KeystoneClient {
    /// Default domain for a session: the selected domain context, then the
    /// domain of the token's user, then the deployment default.
    pub(crate) fn default_domain_for<'a>(&'a self, session: &'a Session) -> &'a str {
        session
            .domain_context
            .as_deref()
            .or(session.user_domain_id.as_deref())
            .unwrap_or(&self.default_domain_id)
    }
}

#[async_trait]
impl DomainRepository for KeystoneClient {
    async fn get(&self, session: &Session, id: &str) -> Result<Resource, AppError> {
        self.get_object(session, &["domains", id], "domain").await
    }

    async fn get_default(&self, session: &Session) -> Result<Resource, AppError> {
        let id = self.default_domain_for(session);
        self.get_object(session, &["domains", id], "domain").await
    }

    async fn list(&self, session: &Session) -> Result<Vec<Resource>, AppError> {
        self.get_list(session, &["domains"], &[], "domains").await
    }

    async fn create(&self, session: &Session, new_domain: NewDomain) -> Result<Resource, AppError> {
        let mut attrs = Map::new();
        attrs.insert("name".into(), new_domain.name.into());
        attrs.insert("enabled".into(), new_domain.enabled.into());
        put_opt(&mut attrs, "description", new_domain.description);

        self.create_object(session, &["domains"], "domain", attrs)
            .await
    }

    async fn update(&self, session: &Session, id: &str, update: DomainUpdate) -> Result<(), AppError> {
        let mut attrs = Map::new();
        put_opt(&mut attrs, "name", update.name);
        put_opt(&mut attrs, "description", update.description);
        put_opt(&mut attrs, "enabled", update.enabled);

        self.patch_object(session, &["domains", id], "domain", attrs)
            .await
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError> {
        self.delete_object(session, &["domains", id]).await
    }
}
