//! Integration tests for the shared resource-client pattern.
//!
//! These tests run the top-level `apis` and `consumers` clients against a
//! mock Admin API and verify the wire protocol: paths, query strings,
//! form-encoded bodies, and the status-code contract.

use kong_admin::{ApiDefinition, Fields, KongAdminClient, KongError, ListParams};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn kong(server: &MockServer) -> KongAdminClient {
    KongAdminClient::from_url(&server.uri()).unwrap()
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_add_api_posts_form_and_returns_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apis/"))
        .and(body_string_contains("target_url=http%3A%2F%2Fupstream"))
        .and(body_string_contains("name=svc"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "4d924084-1adb-40a5-c042-63b19db421d1",
            "name": "svc",
            "target_url": "http://upstream"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .apis()
        .add(&ApiDefinition::new("http://upstream").name("svc"))
        .await
        .unwrap();

    assert_eq!(
        record.get("id"),
        Some(&json!("4d924084-1adb-40a5-c042-63b19db421d1"))
    );
}

#[tokio::test]
async fn test_add_api_conflict_maps_to_conflict_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apis/"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"name": "already exists with value 'svc'"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = kong(&server)
        .apis()
        .add(&ApiDefinition::new("http://upstream").name("svc"))
        .await;

    match result {
        Err(KongError::Conflict { message }) => {
            assert_eq!(message, "name: already exists with value 'svc'");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

// ============================================================================
// Create-or-update (upsert)
// ============================================================================

#[tokio::test]
async fn test_add_or_update_embeds_id_and_accepts_200() {
    let server = MockServer::start().await;
    // The idempotent replay of an existing id answers 200, not 409.
    Mock::given(method("PUT"))
        .and(path("/apis/"))
        .and(body_string_contains("id=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc",
            "name": "svc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .apis()
        .add_or_update(Some("abc"), &ApiDefinition::new("http://upstream").name("svc"))
        .await
        .unwrap();

    assert_eq!(record.get("id"), Some(&json!("abc")));
}

#[tokio::test]
async fn test_consumer_create_or_update_accepts_201_as_insert() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/consumers/"))
        .and(body_string_contains("username=alice"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "c-1",
            "username": "alice"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .consumers()
        .create_or_update(None, Some("alice"), None)
        .await
        .unwrap();

    assert_eq!(record.get("username"), Some(&json!("alice")));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_patches_item_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/apis/svc/"))
        .and(body_string_contains("target_url=http%3A%2F%2Fnew-upstream"))
        .and(body_string_contains("name=renamed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc",
            "name": "renamed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server)
        .apis()
        .update("svc", "http://new-upstream", &Fields::new().set("name", "renamed"))
        .await
        .unwrap();

    assert_eq!(record.get("name"), Some(&json!("renamed")));
}

#[tokio::test]
async fn test_update_with_unknown_field_issues_no_request() {
    let server = MockServer::start().await;

    let result = kong(&server)
        .apis()
        .update("svc", "http://upstream", &Fields::new().set("bogus", "x"))
        .await;

    assert!(matches!(
        result,
        Err(KongError::Validation { resource: "API", field }) if field == "bogus"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// List and count
// ============================================================================

#[tokio::test]
async fn test_list_sends_size_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apis/"))
        .and(query_param("size", "10"))
        .and(query_param("name", "svc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "data": [{"id": "abc", "name": "svc"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = kong(&server)
        .apis()
        .list(&ListParams::new().size(10).filter("name", "svc"))
        .await
        .unwrap();

    assert_eq!(page.count(), 1);
    assert_eq!(page.data.len(), 1);
}

#[tokio::test]
async fn test_list_passes_offset_token_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/consumers/"))
        .and(query_param("offset", "WyJhYmMiXQ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = kong(&server)
        .consumers()
        .list(&ListParams::new().offset("WyJhYmMiXQ"))
        .await
        .unwrap();

    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_list_with_unknown_filter_issues_no_request() {
    let server = MockServer::start().await;

    let result = kong(&server)
        .consumers()
        .list(&ListParams::new().filter("bogus", "x"))
        .await;

    assert!(matches!(result, Err(KongError::Validation { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_count_reads_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apis/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 5,
            "data": [{"id": "a"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(kong(&server).apis().count().await.unwrap(), 5);
}

#[tokio::test]
async fn test_count_falls_back_to_page_length() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/consumers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "a"}, {"id": "b"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(kong(&server).consumers().count().await.unwrap(), 2);
}

// ============================================================================
// Retrieve
// ============================================================================

#[tokio::test]
async fn test_retrieve_returns_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apis/svc/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc",
            "name": "svc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = kong(&server).apis().retrieve("svc").await.unwrap();
    assert_eq!(record.get("id"), Some(&json!("abc")));
}

#[tokio::test]
async fn test_retrieve_missing_resource_is_an_error() {
    let server = MockServer::start().await;
    // 404 is only a success for delete; retrieve surfaces it.
    Mock::given(method("GET"))
        .and(path("/apis/ghost/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = kong(&server).apis().retrieve("ghost").await;

    match result {
        Err(KongError::RequestFailed { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected generic failure, got {other:?}"),
    }
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_succeeds_on_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/apis/svc/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    assert!(kong(&server).apis().delete("svc").await.is_ok());
}

#[tokio::test]
async fn test_delete_of_absent_resource_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/consumers/ghost/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(kong(&server).consumers().delete("ghost").await.is_ok());
}
