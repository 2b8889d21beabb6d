//! Keystone implementation of [`TokenRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;

use super::client::KeystoneClient;
use super::error;
use crate::domain::entities::{Session, token_fingerprint};
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

#[derive(Deserialize)]
struct TokenEnvelope {
    token: TokenBody,
}

#[derive(Deserialize)]
struct TokenBody {
    expires_at: Option<DateTime<Utc>>,
    user: TokenUser,
    project: Option<Scope>,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
    name: Option<String>,
    domain: Option<Scope>,
}

#[derive(Deserialize)]
struct Scope {
    id: String,
}

impl TokenEnvelope {
    fn into_session(self, token: &str) -> Session {
        let TokenBody {
            expires_at,
            user,
            project,
        } = self.token;

        Session {
            token: token.to_owned(),
            user_id: user.id,
            user_name: user.name,
            user_domain_id: user.domain.map(|d| d.id),
            project_id: project.map(|p| p.id),
            expires_at,
            domain_context: None,
        }
    }
}

#[async_trait]
impl TokenRepository for KeystoneClient {
    /// Validates `token` with itself as subject (`GET /v3/auth/tokens`).
    async fn validate(&self, token: &str) -> Result<Session, AppError> {
        let url = self.endpoint(&["auth", "tokens"])?;
        tracing::debug!(url = %url, token = %token_fingerprint(token), "Validating token");

        let response = self
            .http()
            .request(Method::GET, url)
            .header("X-Auth-Token", token)
            .header("X-Subject-Token", token)
            .send()
            .await
            .map_err(error::transport)?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND) {
            return Err(AppError::unauthorized(
                "Invalid or expired token",
                json!({ "backend_status": status.as_u16() }),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error::from_status(status, &body));
        }

        let envelope: TokenEnvelope = response
            .json()
            .await
            .map_err(|e| error::invalid_body(e.to_string()))?;

        Ok(envelope.into_session(token))
    }

    /// Probes the unauthenticated v3 version document.
    async fn health_check(&self) -> bool {
        match self.send(None, Method::GET, &[], &[], None).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Identity service health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_document_into_session() {
        let envelope: TokenEnvelope = serde_json::from_value(json!({
            "token": {
                "expires_at": "2030-01-01T12:00:00.000000Z",
                "methods": ["password"],
                "user": {
                    "id": "u1",
                    "name": "admin",
                    "domain": { "id": "default", "name": "Default" }
                },
                "project": { "id": "p1", "name": "demo", "domain": { "id": "default" } },
                "roles": [{ "id": "r1", "name": "admin" }]
            }
        }))
        .unwrap();

        let session = envelope.into_session("tok");

        assert_eq!(session.token, "tok");
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.user_name.as_deref(), Some("admin"));
        assert_eq!(session.user_domain_id.as_deref(), Some("default"));
        assert_eq!(session.project_id.as_deref(), Some("p1"));
        assert!(session.expires_at.is_some());
        assert!(session.domain_context.is_none());
    }

    #[test]
    fn test_unscoped_token() {
        let envelope: TokenEnvelope = serde_json::from_value(json!({
            "token": { "user": { "id": "u1" } }
        }))
        .unwrap();

        let session = envelope.into_session("tok");

        assert!(session.project_id.is_none());
        assert!(session.expires_at.is_none());
    }
}
