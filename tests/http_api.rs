use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use payments_relay::gateways::mock::MockGateway;
use payments_relay::gateways::{GatewayCredentials, GatewayEndpoint};
use payments_relay::repo::billing_key_repo::InMemoryBillingKeyStore;
use payments_relay::service::payment_service::PaymentService;
use payments_relay::{build_router, AppState};
use secrecy::Secret;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> (Router, MockGateway) {
    let gateway = MockGateway::new();
    let payment_service = PaymentService::new(
        Arc::new(gateway.clone()),
        Arc::new(InMemoryBillingKeyStore::new()),
        Arc::new(GatewayCredentials::new(
            Secret::new("test_widget_sk".to_string()),
            Secret::new("live_api_sk".to_string()),
        )),
    );
    (build_router(AppState { payment_service }), gateway)
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), 1024 * 64).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn widget_route_uses_widget_key() {
    let (app, gateway) = app();
    let body = json!({"paymentKey": "pk", "orderId": "o-1", "amount": 50000});

    let resp = app
        .oneshot(post("/confirm/widget", &body.to_string()))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, body);
    assert_eq!(gateway.calls().await[0].secret_key, "test_widget_sk");
}

#[tokio::test]
async fn payment_route_uses_api_key() {
    let (app, gateway) = app();

    let resp = app
        .oneshot(post("/confirm/payment", r#"{"paymentKey":"pk","amount":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(gateway.calls().await[0].secret_key, "live_api_sk");
}

#[tokio::test]
async fn gateway_error_is_returned_verbatim_with_400() {
    let (app, gateway) = app();
    let error = json!({"error": {"code": "ALREADY_PROCESSED_PAYMENT", "message": "done"}});
    gateway
        .reply(
            GatewayEndpoint::ConfirmBrandpay,
            200,
            error.as_object().cloned().unwrap(),
        )
        .await;

    let resp = app
        .oneshot(post("/confirm/brandpay", r#"{"paymentKey":"pk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await, error);
}

#[tokio::test]
async fn malformed_body_gets_error_envelope() {
    let (app, gateway) = app();

    let resp = app
        .oneshot(post("/issue-billing-key", "customerKey=abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["code"], "INVALID_REQUEST_BODY");
    assert!(body.get("error").is_some());
    assert!(gateway.calls().await.is_empty());
}

#[tokio::test]
async fn billing_confirmation_for_unknown_customer_is_400() {
    let (app, _gateway) = app();

    let resp = app
        .oneshot(post("/confirm-billing", r#"{"customerKey":"nobody"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["code"], "UNKNOWN_CUSTOMER");
}

#[tokio::test]
async fn callback_auth_exchanges_code() {
    let (app, gateway) = app();
    let req = Request::builder()
        .method("GET")
        .uri("/callback-auth?customerKey=cust-7&code=abc123")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let calls = gateway.calls().await;
    assert_eq!(calls[0].endpoint, GatewayEndpoint::BrandpayAccessToken);
    assert_eq!(calls[0].body["customerKey"], "cust-7");
    assert_eq!(calls[0].body["code"], "abc123");
}

#[tokio::test]
async fn callback_auth_requires_both_params() {
    let (app, gateway) = app();
    let req = Request::builder()
        .method("GET")
        .uri("/callback-auth?customerKey=cust-7")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(gateway.calls().await.is_empty());
}

#[tokio::test]
async fn liveness_reports_gateway() {
    let (app, _gateway) = app();
    let req = Request::builder()
        .uri("/ops/liveness")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["alive"], true);
    assert_eq!(body["gateway"], "mock");
    assert_eq!(body["billing_keys"], 0);
}
