mod common;

use axum::http::StatusCode;
use common::{TOKEN, USER_DOMAIN, keystone, make_server, received_paths};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

// ─── GET ───

#[tokio::test]
async fn test_get_default_domain_from_token_user() {
    let keystone = keystone().await;
    Mock::given(method("GET"))
        .and(path(format!("/v3/domains/{USER_DOMAIN}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "domain": { "id": USER_DOMAIN, "name": "Ni!" } })),
        )
        .expect(1)
        .mount(&keystone)
        .await;

    let server = make_server(&keystone);
    let response = server
        .get("/api/keystone/domains/default")
        .add_header("X-Auth-Token", TOKEN)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Ni!");
}

#[tokio::test]
async fn test_get_default_domain_prefers_domain_context() {
    let keystone = keystone().await;
    Mock::given(method("GET"))
        .and(path("/v3/domains/ctx_domain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "domain": { "id": "ctx_domain" } })))
        .expect(1)
        .mount(&keystone)
        .await;

    let server = make_server(&keystone);
    let response = server
        .get("/api/keystone/domains/default")
        .add_header("X-Auth-Token", TOKEN)
        .add_header("X-Domain-Context", "ctx_domain")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], "ctx_domain");
}

#[tokio::test]
async fn test_get_domain_by_id() {
    let keystone = keystone().await;
    Mock::given(method("GET"))
        .and(path("/v3/domains/the_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "domain": { "id": "the_id" } })))
        .expect(1)
        .mount(&keystone)
        .await;

    let server = make_server(&keystone);
    let response = server
        .get("/api/keystone/domains/the_id")
        .add_header("X-Auth-Token", TOKEN)
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_forbidden_passes_through() {
    let keystone = keystone().await;
    Mock::given(method("GET"))
        .and(path("/v3/domains"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "You are not authorized to perform the requested action." }
        })))
        .mount(&keystone)
        .await;

    let server = make_server(&keystone);
    let response = server
        .get("/api/keystone/domains")
        .add_header("X-Auth-Token", TOKEN)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["error"]["code"], "forbidden");
}

// ─── CREATE / PATCH ───

#[tokio::test]
async fn test_create_domain_partial_defaults_enabled() {
    let keystone = keystone().await;
    Mock::given(method("POST"))
        .and(path("/v3/domains"))
        .and(body_json(json!({ "domain": { "name": "bob", "enabled": true } })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "domain": { "id": "domain123" } })))
        .expect(1)
        .mount(&keystone)
        .await;

    let server = make_server(&keystone);
    let response = server
        .post("/api/keystone/domains")
        .add_header("X-Auth-Token", TOKEN)
        .json(&json!({ "name": "bob" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header("location"), "/api/keystone/domains/domain123");
}

#[tokio::test]
async fn test_create_duplicate_domain_is_conflict() {
    let keystone = keystone().await;
    Mock::given(method("POST"))
        .and(path("/v3/domains"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": { "code": 409, "message": "Conflict occurred attempting to store domain" }
        })))
        .mount(&keystone)
        .await;

    let server = make_server(&keystone);
    let response = server
        .post("/api/keystone/domains")
        .add_header("X-Auth-Token", TOKEN)
        .json(&json!({ "name": "bob" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Conflict occurred attempting to store domain"
    );
}

#[tokio::test]
async fn test_patch_domain_sends_only_given_fields() {
    let keystone = keystone().await;
    Mock::given(method("PATCH"))
        .and(path("/v3/domains/domain123"))
        .and(body_json(json!({ "domain": { "enabled": false } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "domain": { "id": "domain123" } })))
        .expect(1)
        .mount(&keystone)
        .await;

    let server = make_server(&keystone);
    let response = server
        .patch("/api/keystone/domains/domain123")
        .add_header("X-Auth-Token", TOKEN)
        .json(&json!({ "enabled": false }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

// ─── DELETE ───

#[tokio::test]
async fn test_bulk_delete_domains_in_order() {
    let keystone = keystone().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(3)
        .mount(&keystone)
        .await;

    let server = make_server(&keystone);
    let response = server
        .delete("/api/keystone/domains")
        .add_header("X-Auth-Token", TOKEN)
        .json(&json!(["id3", "id1", "id2"]))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(
        received_paths(&keystone, "DELETE").await,
        vec!["/v3/domains/id3", "/v3/domains/id1", "/v3/domains/id2"]
    );
}

#[tokio::test]
async fn test_bulk_delete_rejects_non_array_body() {
    let keystone = keystone().await;
    let server = make_server(&keystone);

    let response = server
        .delete("/api/keystone/domains")
        .add_header("X-Auth-Token", TOKEN)
        .json(&json!({ "ids": ["id1"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(received_paths(&keystone, "DELETE").await.is_empty());
}
