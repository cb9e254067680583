use crate::domain::outcome::RelayOutcome;
use crate::domain::payment::{CustomerAuthorizationQuery, PaymentMode};
use crate::AppState;
use axum::extract::{Query, State};

// Bodies are taken as raw text so malformed JSON gets the relay's own
// INVALID_REQUEST_BODY envelope instead of an extractor rejection.

pub async fn confirm_widget(State(state): State<AppState>, body: String) -> RelayOutcome {
    state
        .payment_service
        .confirm_payment(PaymentMode::Widget, &body)
        .await
}

pub async fn confirm_payment(State(state): State<AppState>, body: String) -> RelayOutcome {
    state
        .payment_service
        .confirm_payment(PaymentMode::Standard, &body)
        .await
}

pub async fn confirm_billing(State(state): State<AppState>, body: String) -> RelayOutcome {
    state.payment_service.confirm_billing(&body).await
}

pub async fn issue_billing_key(State(state): State<AppState>, body: String) -> RelayOutcome {
    state.payment_service.issue_billing_key(&body).await
}

pub async fn callback_auth(
    State(state): State<AppState>,
    Query(params): Query<CustomerAuthorizationQuery>,
) -> RelayOutcome {
    state
        .payment_service
        .customer_authorization(&params.customer_key, &params.code)
        .await
}

pub async fn confirm_brandpay(State(state): State<AppState>, body: String) -> RelayOutcome {
    state.payment_service.confirm_brandpay(&body).await
}
