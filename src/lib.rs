pub mod config;
pub mod domain {
    pub mod outcome;
    pub mod payment;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod payments;
    }
}
pub mod repo {
    pub mod billing_key_repo;
}
pub mod service {
    pub mod payment_service;
}

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}

pub fn build_router(state: AppState) -> Router {
    use crate::http::handlers::{ops, payments};

    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/liveness", get(ops::liveness))
        .route("/confirm/widget", post(payments::confirm_widget))
        .route("/confirm/payment", post(payments::confirm_payment))
        .route("/confirm-billing", post(payments::confirm_billing))
        .route("/issue-billing-key", post(payments::issue_billing_key))
        .route("/callback-auth", get(payments::callback_auth))
        .route("/confirm/brandpay", post(payments::confirm_brandpay))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
