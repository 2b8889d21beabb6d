//! Keystone token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Header carrying the caller's Keystone token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Header selecting the domain an admin is working in.
pub const DOMAIN_CONTEXT_HEADER: &str = "x-domain-context";

/// Authenticates requests with the caller's Keystone token.
///
/// # Header Format
///
/// ```text
/// X-Auth-Token: <token>
/// Authorization: Bearer <token>
/// X-Domain-Context: <domain id>      (optional)
/// ```
///
/// `X-Auth-Token` wins when both token headers are sent.
///
/// # Authentication Flow
///
/// 1. Extract the token
/// 2. Validate it against Keystone
/// 3. Store the resulting [`crate::domain::entities::Session`] in the
///    request extensions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if no token is sent or Keystone rejects it.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match header_value(&parts.headers, AUTH_TOKEN_HEADER) {
        Some(token) => token,
        None => {
            let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
                .await
                .map_err(|_| {
                    AppError::unauthorized(
                        "Unauthorized",
                        serde_json::json!({
                            "reason": "X-Auth-Token or Authorization header is missing or invalid"
                        }),
                    )
                })?;
            token
        }
    };
    let domain_context = header_value(&parts.headers, DOMAIN_CONTEXT_HEADER);

    let session = st.auth_service.authenticate(&token, domain_context).await?;
    tracing::debug!(
        user_id = %session.user_id,
        token = %session.token_fingerprint(),
        "Request authenticated"
    );
    parts.extensions.insert(session);

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
