use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

pub async fn liveness(State(state): State<AppState>) -> impl IntoResponse {
    let billing_keys = state
        .payment_service
        .billing_keys
        .count()
        .await
        .unwrap_or_default();

    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "alive": true,
            "gateway": state.payment_service.gateway.name(),
            "billing_keys": billing_keys
        })),
    )
        .into_response()
}
