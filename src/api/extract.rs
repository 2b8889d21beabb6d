//! Request extractors and response helpers shared by the handlers.

use axum::{
    Json,
    extract::FromRequest,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use url::Url;

use crate::domain::entities::{Resource, ResourceKind};
use crate::error::AppError;

/// JSON body extractor rejecting with [`AppError`] instead of axum's
/// plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T: Serialize> IntoResponse for AppJson<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// `201 Created` with a `Location` header pointing at the new resource.
#[derive(Debug)]
pub struct Created {
    location: Option<String>,
    resource: Resource,
}

impl Created {
    /// The resource must have an id.
    pub fn new(kind: ResourceKind, resource: Resource) -> Self {
        let id = resource.id().unwrap_or_default();
        Self {
            location: location(kind, id),
            resource,
        }
    }
}

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        match self.location.and_then(|l| HeaderValue::try_from(l).ok()) {
            Some(location) => (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(self.resource),
            )
                .into_response(),
            None => AppError::bad_gateway(
                "Identity service returned an id unusable in a URL",
                serde_json::json!({}),
            )
            .into_response(),
        }
    }
}

/// `/api/keystone/<plural>/<id>`, with `id` percent-encoded as one path
/// segment.
pub fn location(kind: ResourceKind, id: &str) -> Option<String> {
    let mut url = Url::parse("http://localhost/").ok()?;
    url.path_segments_mut()
        .ok()?
        .clear()
        .extend(["api", "keystone", kind.plural(), id]);
    Some(url.path().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location() {
        assert_eq!(
            location(ResourceKind::Project, "project123").as_deref(),
            Some("/api/keystone/projects/project123")
        );
        assert_eq!(
            location(ResourceKind::User, "u1").as_deref(),
            Some("/api/keystone/users/u1")
        );
    }

    #[test]
    fn test_location_encodes_id_as_one_segment() {
        assert_eq!(
            location(ResourceKind::Role, "a b/c").as_deref(),
            Some("/api/keystone/roles/a%20b%2Fc")
        );
        assert_eq!(
            location(ResourceKind::Domain, "x?y#z").as_deref(),
            Some("/api/keystone/domains/x%3Fy%23z")
        );
    }

    #[test]
    fn test_created_response() {
        let resource: Resource = serde_json::from_value(json!({ "id": "role123", "name": "bob" })).unwrap();
        let response = Created::new(ResourceKind::Role, resource).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/api/keystone/roles/role123"
        );
    }
}
