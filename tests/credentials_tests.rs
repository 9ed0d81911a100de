//! Integration tests for nested resource clients.
//!
//! Credentials live under one consumer and plugin configurations under one
//! API; these tests verify the parent identifier is baked into every path
//! and carried into failure messages.

use kong_admin::{Fields, KongAdminClient, KongError, ListParams, PluginDefinition};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn kong(server: &MockServer) -> KongAdminClient {
    KongAdminClient::from_url(&server.uri()).unwrap()
}

// ============================================================================
// Basic auth
// ============================================================================

#[tokio::test]
async fn test_basic_auth_create_or_update_puts_to_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/consumers/alice/basicauth/"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ba-1",
            "username": "alice"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .consumers()
        .basic_auth("alice")
        .create_or_update(None, Some("alice"), Some("secret"))
        .await
        .unwrap();

    assert_eq!(record.get("id"), Some(&json!("ba-1")));
}

#[tokio::test]
async fn test_basic_auth_create_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/consumers/alice/basicauth/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "ba-2",
            "username": "alice"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .consumers()
        .basic_auth("alice")
        .create("alice", "secret")
        .await
        .unwrap();

    assert_eq!(record.get("username"), Some(&json!("alice")));
}

#[tokio::test]
async fn test_basic_auth_update_rejects_unknown_field_without_io() {
    let server = MockServer::start().await;

    let result = kong(&server)
        .consumers()
        .basic_auth("alice")
        .update("ba-1", &Fields::new().set("bogus", "x"))
        .await;

    assert!(matches!(
        result,
        Err(KongError::Validation { resource: "Basic Auth", field }) if field == "bogus"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Key auth
// ============================================================================

#[tokio::test]
async fn test_key_auth_create_without_key_sends_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/consumers/alice/keyauth/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "ka-1",
            "key": "generated-by-backend"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .consumers()
        .key_auth("alice")
        .create(None)
        .await
        .unwrap();

    assert_eq!(record.get("key"), Some(&json!("generated-by-backend")));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_key_auth_list_uses_nested_path_with_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/consumers/alice/keyauth/"))
        .and(query_param("size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = kong(&server)
        .consumers()
        .key_auth("alice")
        .list(&ListParams::new())
        .await
        .unwrap();

    assert_eq!(page.count(), 0);
}

// ============================================================================
// OAuth2
// ============================================================================

#[tokio::test]
async fn test_oauth2_create_posts_application() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/consumers/alice/oauth2/"))
        .and(body_string_contains("name=portal"))
        .and(body_string_contains("redirect_uri=https%3A%2F%2Fapp.example.com"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "oa-1",
            "name": "portal",
            "client_id": "generated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .consumers()
        .oauth2("alice")
        .create("portal", "https://app.example.com", None, None)
        .await
        .unwrap();

    assert_eq!(record.get("client_id"), Some(&json!("generated")));
}

// ============================================================================
// Plugin configurations under an API
// ============================================================================

#[tokio::test]
async fn test_api_plugin_create_namespaces_config_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apis/svc/plugins/"))
        .and(body_string_contains("name=ratelimiting"))
        .and(body_string_contains("value.minute=20"))
        .and(body_string_contains("enabled=true"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "pc-1",
            "name": "ratelimiting"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .apis()
        .plugins("svc")
        .create(
            &PluginDefinition::new("ratelimiting")
                .config("minute", 20)
                .enabled(true),
        )
        .await
        .unwrap();

    assert_eq!(record.get("id"), Some(&json!("pc-1")));
}

#[tokio::test]
async fn test_api_plugin_update_patches_by_plugin_name() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/apis/svc/plugins/ratelimiting/"))
        .and(body_string_contains("value.minute=50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pc-1",
            "name": "ratelimiting"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .apis()
        .plugins("svc")
        .update(&PluginDefinition::new("ratelimiting").config("minute", 50))
        .await
        .unwrap();

    assert_eq!(record.get("name"), Some(&json!("ratelimiting")));
}

#[tokio::test]
async fn test_nested_delete_failure_names_parent_context() {
    let server = MockServer::start().await;
    // Fails on every attempt; the surfaced error names both the credential
    // and its consumer.
    Mock::given(method("DELETE"))
        .and(path("/consumers/alice/basicauth/ba-1/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(3)
        .mount(&server)
        .await;

    let result = kong(&server)
        .consumers()
        .basic_auth("alice")
        .delete("ba-1")
        .await;

    match result {
        Err(KongError::RequestFailed { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(
                message,
                "Could not delete Basic Auth (status: 500): ba-1 for Consumer: alice"
            );
        }
        other => panic!("expected generic failure, got {other:?}"),
    }
}

// ============================================================================
// Top-level plugins
// ============================================================================

#[tokio::test]
async fn test_plugins_list_reads_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plugins/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "data": [{"id": "pc-1", "name": "ratelimiting"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = kong(&server).plugins().list().await.unwrap();
    assert_eq!(page.count(), 1);
}

#[tokio::test]
async fn test_plugins_retrieve_schema() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plugins/ratelimiting/schema/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fields": {"minute": {"type": "number"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let schema = kong(&server)
        .plugins()
        .retrieve_schema("ratelimiting")
        .await
        .unwrap();

    assert!(schema.contains_key("fields"));
}
