//! Caller context derived from a validated Keystone token.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// The authenticated caller of a request.
///
/// Built by [`crate::application::services::AuthService`] from the token the
/// caller presented and handed to every backend call, which acts with that
/// token on the caller's behalf.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub user_name: Option<String>,
    pub user_domain_id: Option<String>,
    pub project_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    /// Domain the caller is currently working in (`X-Domain-Context`).
    pub domain_context: Option<String>,
}

impl Session {
    /// Creates a session with only the token and user id set.
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            user_name: None,
            user_domain_id: None,
            project_id: None,
            expires_at: None,
            domain_context: None,
        }
    }

    pub fn with_domain_context(mut self, domain_context: Option<String>) -> Self {
        self.domain_context = domain_context;
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires| expires <= now)
    }

    /// Short SHA-256 prefix of the token, safe to put in logs.
    pub fn token_fingerprint(&self) -> String {
        token_fingerprint(&self.token)
    }
}

/// Short SHA-256 prefix of a raw token.
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(&digest[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fingerprint_is_stable_and_hides_token() {
        let session = Session::new("gAAAAsecret", "u1");
        let fp = session.token_fingerprint();

        assert_eq!(fp.len(), 16);
        assert_eq!(fp, Session::new("gAAAAsecret", "other").token_fingerprint());
        assert!(!fp.contains("secret"));
    }

    #[test]
    fn test_expiry() {
        let now = Utc::now();
        let mut session = Session::new("t", "u1");
        assert!(!session.is_expired(now));

        session.expires_at = Some(now - Duration::seconds(1));
        assert!(session.is_expired(now));

        session.expires_at = Some(now + Duration::hours(1));
        assert!(!session.is_expired(now));
    }
}
