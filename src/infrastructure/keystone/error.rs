//! Mapping of Keystone failures onto [`AppError`].

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;

#[derive(Deserialize)]
struct KeystoneErrorBody {
    error: KeystoneErrorInfo,
}

#[derive(Deserialize)]
struct KeystoneErrorInfo {
    message: String,
}

/// Pulls `error.message` out of a Keystone error document.
fn keystone_message(body: &str) -> Option<String> {
    serde_json::from_str::<KeystoneErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.is_empty())
}

/// Builds the error for a non-success Keystone response.
///
/// | Keystone | Gateway |
/// |----------|---------|
/// | 400      | 400     |
/// | 401      | 401     |
/// | 403      | 403     |
/// | 404      | 404     |
/// | 409      | 409     |
/// | other    | 502     |
pub(crate) fn from_status(status: StatusCode, body: &str) -> AppError {
    let message = keystone_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Identity service error")
            .to_string()
    });
    let details = json!({ "backend_status": status.as_u16() });

    match status {
        StatusCode::BAD_REQUEST => AppError::bad_request(message, details),
        StatusCode::UNAUTHORIZED => AppError::unauthorized(message, details),
        StatusCode::FORBIDDEN => AppError::forbidden(message, details),
        StatusCode::NOT_FOUND => AppError::not_found(message, details),
        StatusCode::CONFLICT => AppError::conflict(message, details),
        _ => AppError::bad_gateway(message, details),
    }
}

/// The request never produced a response (connect, timeout, TLS).
pub(crate) fn transport(err: reqwest::Error) -> AppError {
    tracing::warn!(error = %err, "Identity service unreachable");
    AppError::bad_gateway(
        "Identity service unavailable",
        json!({ "reason": err.to_string() }),
    )
}

/// A success response whose body is not what Keystone documents.
pub(crate) fn invalid_body(reason: impl Into<String>) -> AppError {
    AppError::bad_gateway(
        "Identity service returned an unexpected body",
        json!({ "reason": reason.into() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystone_message_is_surfaced() {
        let body = r#"{"error": {"code": 404, "message": "Could not find user: abc.", "title": "Not Found"}}"#;
        let err = from_status(StatusCode::NOT_FOUND, body);

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Could not find user: abc.");
        assert_eq!(err.to_error_info().details["backend_status"], 404);
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            from_status(StatusCode::BAD_REQUEST, ""),
            AppError::Validation { .. }
        ));
        assert!(matches!(
            from_status(StatusCode::UNAUTHORIZED, ""),
            AppError::Unauthorized { .. }
        ));
        assert!(matches!(
            from_status(StatusCode::FORBIDDEN, ""),
            AppError::Forbidden { .. }
        ));
        assert!(matches!(
            from_status(StatusCode::CONFLICT, ""),
            AppError::Conflict { .. }
        ));
        assert!(matches!(
            from_status(StatusCode::SERVICE_UNAVAILABLE, ""),
            AppError::BadGateway { .. }
        ));
        assert!(matches!(
            from_status(StatusCode::INTERNAL_SERVER_ERROR, ""),
            AppError::BadGateway { .. }
        ));
    }

    #[test]
    fn test_non_json_body_falls_back_to_reason() {
        let err = from_status(StatusCode::FORBIDDEN, "<html>nope</html>");
        assert_eq!(err.to_string(), "Forbidden");
    }
}
