//! 실제 HTTP(wiremock)로 게이트웨이 전체 흐름을 검증합니다.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use voucher_gateway::caching::MemoryCacheStore;
use voucher_gateway::config::ApiConfig;
use voucher_gateway::core::{GatewayError, SystemClock};
use voucher_gateway::domain::dto::{LoginRequest, VoucherListQuery};
use voucher_gateway::domain::models::{AuthToken, DeviceInfo, RequestContext};
use voucher_gateway::repositories::tokens::{MemoryTokenStore, TokenStore};
use voucher_gateway::services::api::{ApiClient, AuthApi, VoucherApi};
use voucher_gateway::services::gateway::GatewayContext;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Setup {
    api: ApiClient,
    tokens: Arc<MemoryTokenStore>,
}

fn setup(server: &MockServer, tokens: MemoryTokenStore, timeout: Duration) -> Setup {
    let tokens = Arc::new(tokens);
    let context = GatewayContext::new(
        tokens.clone(),
        Arc::new(MemoryCacheStore::new()),
        Arc::new(SystemClock),
    )
    .with_device(DeviceInfo::new("integration", "1920x1080", "Africa/Lagos", "en-NG", "linux"));
    let config = ApiConfig::new(format!("{}/api", server.uri())).with_timeout(timeout);

    Setup {
        api: ApiClient::from_config(config, context).unwrap(),
        tokens,
    }
}

fn logged_in(refresh: Option<&str>) -> MemoryTokenStore {
    MemoryTokenStore::with_token(AuthToken::new("stale", refresh.map(str::to_string)))
}

#[tokio::test]
async fn expired_token_is_refreshed_and_request_replayed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/vouchers"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "_id": "v1", "amount": 250.0, "type": "gift" }]
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/vouchers"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "success": false, "message": "jwt expired" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(body_json(json!({ "refreshToken": "r1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "accessToken": "fresh" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let s = setup(&server, logged_in(Some("r1")), Duration::from_secs(5));

    let result = s.api.vouchers.get_all(&VoucherListQuery::default()).await;

    assert!(result.success, "{:?}", result);
    assert_eq!(result.data.unwrap().vouchers[0].id, "v1");
    assert_eq!(s.tokens.access_token().await.unwrap().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn unrecoverable_401_clears_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/vouchers"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "success": false })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let s = setup(&server, logged_in(None), Duration::from_secs(5));

    let result = s.api.vouchers.get_all(&VoucherListQuery::default()).await;

    assert!(!result.success);
    assert!(result.error.unwrap().starts_with("Session expired"));
    assert!(s.tokens.load().await.unwrap().is_none());
}

#[tokio::test]
async fn balance_is_served_from_cache_within_ttl() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/vouchers/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "balance": 1200.5, "currency": "NGN" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let s = setup(&server, logged_in(None), Duration::from_secs(5));

    let first = s.api.vouchers.get_balance().await;
    let second = s.api.vouchers.get_balance().await;

    assert!(first.success && second.success);
    assert_eq!(first.data, second.data);
}

#[tokio::test]
async fn outbound_headers_carry_auth_and_device_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", "Bearer stale"))
        .and(header("x-requested-with", "XMLHttpRequest"))
        .and(header_exists("x-device-info"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "_id": "u1", "email": "ada@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let s = setup(&server, logged_in(None), Duration::from_secs(5));

    let result = s.api.auth.get_profile().await;
    assert!(result.success, "{:?}", result);

    let requests = server.received_requests().await.unwrap();
    let device = requests[0]
        .headers
        .get("x-device-info")
        .and_then(|value| value.to_str().ok())
        .and_then(DeviceInfo::from_header_value)
        .unwrap();
    assert_eq!(device.timezone, "Africa/Lagos");
    assert_eq!(device.fingerprint.len(), 64);
}

#[tokio::test]
async fn public_voucher_lookup_sends_no_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/public-vouchers/GIFT-2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "_id": "v9", "code": "GIFT-2024" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let s = setup(&server, logged_in(Some("r1")), Duration::from_secs(5));

    let result = s.api.vouchers.get_public("GIFT-2024").await;

    assert!(result.success);
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn login_persists_tokens_from_real_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "ada@example.com", "password": "secret" })))
        .and(header_exists("cache-control"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "accessToken": "a1", "refreshToken": "r1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let s = setup(&server, MemoryTokenStore::new(), Duration::from_secs(5));

    let result = s
        .api
        .auth
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await;

    assert!(result.success);
    assert_eq!(s.tokens.refresh_token().await.unwrap().as_deref(), Some("r1"));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rates/usd-to-ngn"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": { "rate": 1500.0 } }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let s = setup(&server, MemoryTokenStore::new(), Duration::from_millis(200));

    let error = s
        .api
        .gateway()
        .execute(RequestContext::get("/rates/usd-to-ngn"))
        .await
        .unwrap_err();

    assert!(matches!(error, GatewayError::Timeout(_)), "{:?}", error);
}
