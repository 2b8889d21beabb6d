#![allow(dead_code)]

use axum_test::TestServer;
use keystone_gateway::infrastructure::keystone::{KeystoneClient, KeystoneSettings};
use keystone_gateway::routes::api_router;
use keystone_gateway::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TOKEN: &str = "gAAAAAtest-token";
pub const USER_ID: &str = "current_id";
pub const USER_DOMAIN: &str = "the_domain";

/// Starts a Keystone stand-in that accepts [`TOKEN`].
pub async fn keystone() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/auth/tokens"))
        .and(header("X-Auth-Token", TOKEN))
        .and(header("X-Subject-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_document()))
        .mount(&server)
        .await;

    server
}

pub fn token_document() -> Value {
    json!({
        "token": {
            "expires_at": "2099-01-01T00:00:00.000000Z",
            "methods": ["password"],
            "user": {
                "id": USER_ID,
                "name": "admin",
                "domain": { "id": USER_DOMAIN, "name": "The Domain" }
            },
            "project": { "id": "admin_project", "name": "admin" }
        }
    })
}

pub fn settings(uri: &str, page_size: usize) -> KeystoneSettings {
    KeystoneSettings {
        url: Url::parse(uri).unwrap(),
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(1),
        default_domain_id: "default".to_string(),
        default_role: "member".to_string(),
        page_size,
    }
}

pub fn create_test_state(uri: &str, paginate_projects: bool, page_size: usize) -> AppState {
    let client = KeystoneClient::new(settings(uri, page_size)).unwrap();
    AppState::new(Arc::new(client), paginate_projects)
}

pub fn make_server(keystone: &MockServer) -> TestServer {
    make_server_with(keystone, false, 20)
}

pub fn make_server_with(keystone: &MockServer, paginate_projects: bool, page_size: usize) -> TestServer {
    let state = create_test_state(&keystone.uri(), paginate_projects, page_size);
    TestServer::new(api_router(state)).unwrap()
}

/// Paths of the requests Keystone received with `verb`, in arrival order.
pub async fn received_paths(keystone: &MockServer, verb: &str) -> Vec<String> {
    keystone
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r: &&Request| r.method.as_str() == verb)
        .map(|r| r.url.path().to_string())
        .collect()
}
