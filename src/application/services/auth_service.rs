//! Caller authentication service.

use crate::domain::entities::Session;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

/// Service for turning a presented token into a [`Session`].
pub struct AuthService {
    repository: Arc<dyn TokenRepository>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<dyn TokenRepository>) -> Self {
        Self { repository }
    }

    /// Validates a token and builds the request session.
    ///
    /// # Arguments
    ///
    /// - `token` - Keystone token presented by the caller
    /// - `domain_context` - Domain the caller is working in, if any
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is empty, invalid or
    /// expired.
    pub async fn authenticate(
        &self,
        token: &str,
        domain_context: Option<String>,
    ) -> Result<Session, AppError> {
        if token.trim().is_empty() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Empty token" }),
            ));
        }

        let session = self.repository.validate(token).await?;

        if session.is_expired(Utc::now()) {
            tracing::debug!(
                token = %session.token_fingerprint(),
                "Rejected expired token"
            );
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Token expired" }),
            ));
        }

        tracing::debug!(
            user_id = %session.user_id,
            token = %session.token_fingerprint(),
            "Authenticated request"
        );

        Ok(session.with_domain_context(domain_context))
    }

    /// Reports whether the identity service is reachable.
    pub async fn backend_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
