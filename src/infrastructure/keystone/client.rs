//! HTTP plumbing shared by the Keystone repositories.

use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use url::Url;

use super::error;
use crate::domain::entities::{Resource, Session, token_fingerprint};
use crate::error::AppError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`KeystoneClient`].
#[derive(Debug, Clone)]
pub struct KeystoneSettings {
    /// Keystone endpoint, with or without the trailing `/v3`.
    pub url: Url,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Domain used when neither the session nor its token names one.
    pub default_domain_id: String,
    /// Name of the role returned for the `default` role id.
    pub default_role: String,
    /// Number of projects per page when listing is paginated.
    pub page_size: usize,
}

/// Keystone v3 client.
///
/// Implements every repository trait of the domain layer. It holds no
/// credentials of its own: each call carries the token of the session it
/// was made for, so Keystone enforces the caller's permissions.
pub struct KeystoneClient {
    http: Client,
    root: Url,
    pub(crate) default_domain_id: String,
    pub(crate) default_role: String,
    pub(crate) page_size: usize,
}

impl KeystoneClient {
    /// Builds the client and its connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(settings: KeystoneSettings) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .user_agent(USER_AGENT)
            .use_rustls_tls()
            .build()?;

        Ok(Self {
            http,
            root: api_root(&settings.url),
            default_domain_id: settings.default_domain_id,
            default_role: settings.default_role,
            page_size: settings.page_size,
        })
    }

    /// `<root>/v3/<segments...>`, each segment percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::internal(
                    "Identity service URL cannot carry a path",
                    json!({ "url": self.root.as_str() }),
                )
            })?
            .pop_if_empty()
            .push("v3")
            .extend(segments);
        Ok(url)
    }

    /// Sends one request and returns the response if its status is a success.
    ///
    /// `token` is sent as `X-Auth-Token`; only the version probe goes without.
    pub(crate) async fn send(
        &self,
        token: Option<&str>,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Response, AppError> {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        tracing::debug!(
            method = %method,
            url = %url,
            token = token.map(token_fingerprint).as_deref().unwrap_or("-"),
            "Identity service request"
        );

        let mut request = self.http.request(method, url);
        if let Some(token) = token {
            request = request.header("X-Auth-Token", token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(error::transport)?;
        check(response).await
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) async fn get_object(
        &self,
        session: &Session,
        segments: &[&str],
        key: &str,
    ) -> Result<Resource, AppError> {
        let response = self
            .send(Some(&session.token), Method::GET, segments, &[], None)
            .await?;
        envelope(response, key).await
    }

    pub(crate) async fn get_list(
        &self,
        session: &Session,
        segments: &[&str],
        query: &[(&str, &str)],
        key: &str,
    ) -> Result<Vec<Resource>, AppError> {
        let response = self
            .send(Some(&session.token), Method::GET, segments, query, None)
            .await?;
        envelope(response, key).await
    }

    /// POSTs `{key: attrs}` and returns the created object.
    pub(crate) async fn create_object(
        &self,
        session: &Session,
        segments: &[&str],
        key: &str,
        attrs: Map<String, Value>,
    ) -> Result<Resource, AppError> {
        let body = json!({ key: attrs });
        let response = self
            .send(Some(&session.token), Method::POST, segments, &[], Some(body))
            .await?;
        envelope(response, key).await
    }

    /// PATCHes `{key: attrs}`. The echoed object is discarded.
    pub(crate) async fn patch_object(
        &self,
        session: &Session,
        segments: &[&str],
        key: &str,
        attrs: Map<String, Value>,
    ) -> Result<(), AppError> {
        let body = json!({ key: attrs });
        self.send(Some(&session.token), Method::PATCH, segments, &[], Some(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn delete_object(
        &self,
        session: &Session,
        segments: &[&str],
    ) -> Result<(), AppError> {
        self.send(Some(&session.token), Method::DELETE, segments, &[], None)
            .await?;
        Ok(())
    }

    pub(crate) async fn put_empty(
        &self,
        session: &Session,
        segments: &[&str],
    ) -> Result<(), AppError> {
        self.send(Some(&session.token), Method::PUT, segments, &[], None)
            .await?;
        Ok(())
    }
}

/// Strips a trailing `/v3` so both spellings of the endpoint work.
fn api_root(url: &Url) -> Url {
    let mut root = url.clone();
    let path = url.path().trim_end_matches('/');
    let path = path.strip_suffix("/v3").unwrap_or(path).to_owned();
    root.set_path(&path);
    root.set_query(None);
    root
}

async fn check(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "Identity service response");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(error::from_status(status, &body))
}

/// Decodes `body[key]`, e.g. the `user` of `{"user": {...}}`.
async fn envelope<T: DeserializeOwned>(response: Response, key: &str) -> Result<T, AppError> {
    let mut body: Map<String, Value> = response
        .json()
        .await
        .map_err(|e| error::invalid_body(e.to_string()))?;

    let value = body
        .remove(key)
        .ok_or_else(|| error::invalid_body(format!("missing '{key}'")))?;

    serde_json::from_value(value).map_err(|e| error::invalid_body(e.to_string()))
}

/// Inserts `value` under `key` when it is set.
pub(crate) fn put_opt<T: Into<Value>>(attrs: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        attrs.insert(key.to_owned(), value.into());
    }
}
