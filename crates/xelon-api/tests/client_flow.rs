//! End-to-end tests driving `XelonClient` against a mock API.

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xelon_api::{Context, Error, SearchListOptions, XelonClient};

async fn client_for(server: &MockServer) -> XelonClient {
    XelonClient::builder("integration-token")
        .with_base_url(format!("{}/api/service/", server.uri()))
        .with_client_id("tenant-9")
        .with_user_agent("xelon-tests")
        .build()
        .unwrap()
}

#[tokio::test]
async fn services_share_one_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/service/tenants/current"))
        .and(header("authorization", "Bearer integration-token"))
        .and(header("user-agent", "xelon-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"identifier": "t-9"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/service/ssh-keys"))
        .and(header("x-user-id", "tenant-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"identifier": "k-1"}, {"identifier": "k-2"}],
            "meta": {"current_page": 1, "per_page": 2, "total": 4, "last_page": 2}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let ctx = Context::background();

    let (tenant, _) = client.tenants().get_current(&ctx).await.unwrap();
    assert_eq!(tenant.id.as_deref(), Some("t-9"));

    let (keys, response) = client
        .ssh_keys()
        .list(&ctx, Some(&SearchListOptions::new()))
        .await
        .unwrap();
    assert_eq!(keys.len(), 2);
    let meta = response.meta().unwrap();
    assert_eq!((meta.page, meta.last_page, meta.total), (1, 2, 4));
}

#[tokio::test]
async fn validation_errors_are_structured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/service/networks/wan"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": {"name": ["The name field is required."], "networkSize": ["Invalid size."]}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .networks()
        .create_wan(&Context::background(), &Default::default())
        .await
        .unwrap_err();

    let api = err.api_response().expect("api error");
    assert_eq!(api.element.message, "The given data was invalid.");
    assert_eq!(api.element.validations.len(), 2);
    assert!(!api.element.partial);
    assert_eq!(err.error_code(), "API_ERROR");
}

#[tokio::test]
async fn timeout_context_stops_slow_service_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/service/kubernetes-talos/clusters"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let ctx = Context::background().with_timeout(Duration::from_millis(50));
    let err = client.kubernetes().list(&ctx).await.unwrap_err();
    assert!(matches!(err, Error::Context(_)));
}

#[tokio::test]
async fn argument_errors_never_reach_the_server() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    let ctx = Context::background();

    let err = client.isos().delete(&ctx, "").await.unwrap_err();
    assert!(err.is_argument_error());
    let err = client
        .load_balancer_clusters()
        .get_virtual_ip(&ctx, "lbc-1", "")
        .await
        .unwrap_err();
    assert!(err.is_argument_error());

    assert!(server.received_requests().await.unwrap().is_empty());
}
