use crate::domain::outcome::RelayOutcome;
use crate::domain::payment::{
    access_token_request, customer_key, parse_request_body, JsonObject, PaymentMode, SecretKind,
    BILLING_KEY,
};
use crate::error::RelayError;
use crate::gateways::{GatewayCredentials, GatewayEndpoint, GatewayReply, PaymentGateway};
use crate::repo::billing_key_repo::BillingKeyStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct PaymentService {
    pub gateway: Arc<dyn PaymentGateway>,
    pub billing_keys: Arc<dyn BillingKeyStore>,
    pub credentials: Arc<GatewayCredentials>,
}

impl PaymentService {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        billing_keys: Arc<dyn BillingKeyStore>,
        credentials: Arc<GatewayCredentials>,
    ) -> Self {
        Self {
            gateway,
            billing_keys,
            credentials,
        }
    }

    /// Confirms a one-off payment. `Standard` uses the API key, `Widget` the widget key.
    pub async fn confirm_payment(&self, mode: PaymentMode, raw_body: &str) -> RelayOutcome {
        let result = self
            .try_forward_raw(GatewayEndpoint::ConfirmPayment, mode.secret_kind(), raw_body)
            .await;
        finish("confirm_payment", result)
    }

    /// Charges the billing key previously issued for the body's `customerKey`.
    pub async fn confirm_billing(&self, raw_body: &str) -> RelayOutcome {
        finish("confirm_billing", self.try_confirm_billing(raw_body).await)
    }

    pub async fn issue_billing_key(&self, raw_body: &str) -> RelayOutcome {
        finish("issue_billing_key", self.try_issue_billing_key(raw_body).await)
    }

    /// Exchanges a brand-pay authorization code for customer access tokens.
    pub async fn customer_authorization(&self, customer_key: &str, code: &str) -> RelayOutcome {
        let body = access_token_request(customer_key, code);
        let result = self
            .forward(GatewayEndpoint::BrandpayAccessToken, SecretKind::Api, &body)
            .await;
        finish("customer_authorization", result)
    }

    pub async fn confirm_brandpay(&self, raw_body: &str) -> RelayOutcome {
        let result = self
            .try_forward_raw(GatewayEndpoint::ConfirmBrandpay, SecretKind::Api, raw_body)
            .await;
        finish("confirm_brandpay", result)
    }

    async fn try_forward_raw(
        &self,
        endpoint: GatewayEndpoint,
        kind: SecretKind,
        raw_body: &str,
    ) -> Result<GatewayReply, RelayError> {
        let body = parse_request_body(raw_body)?;
        self.forward(endpoint, kind, &body).await
    }

    async fn try_confirm_billing(&self, raw_body: &str) -> Result<GatewayReply, RelayError> {
        let body = parse_request_body(raw_body)?;
        let customer_key = customer_key(&body)?;
        let billing_key = self
            .billing_keys
            .get(customer_key)
            .await
            .map_err(RelayError::store)?
            .ok_or_else(|| RelayError::UnknownCustomer(customer_key.to_string()))?;

        self.forward(
            GatewayEndpoint::ConfirmBilling(billing_key),
            SecretKind::Api,
            &body,
        )
        .await
    }

    async fn try_issue_billing_key(&self, raw_body: &str) -> Result<GatewayReply, RelayError> {
        let body = parse_request_body(raw_body)?;
        let customer_key = customer_key(&body)?.to_string();
        let reply = self
            .forward(GatewayEndpoint::IssueBillingKey, SecretKind::Api, &body)
            .await?;

        if reply.is_success() {
            match reply.body.get(BILLING_KEY).and_then(Value::as_str) {
                Some(billing_key) => {
                    self.billing_keys
                        .put(&customer_key, billing_key)
                        .await
                        .map_err(RelayError::store)?;
                    info!(customer_key = %customer_key, "billing key stored");
                }
                None => {
                    warn!(customer_key = %customer_key, "issuance succeeded without a billingKey; nothing stored");
                }
            }
        }

        Ok(reply)
    }

    async fn forward(
        &self,
        endpoint: GatewayEndpoint,
        kind: SecretKind,
        body: &JsonObject,
    ) -> Result<GatewayReply, RelayError> {
        debug!(endpoint = endpoint.name(), ?body, "forwarding to gateway");
        let reply = self
            .gateway
            .send(&endpoint, self.credentials.select(kind), body)
            .await
            .map_err(|e| {
                error!(endpoint = endpoint.name(), gateway = self.gateway.name(), error = %e, "Error reading response");
                e
            })?;

        info!(
            endpoint = endpoint.name(),
            key = kind.as_str(),
            status = reply.status,
            success = reply.is_success(),
            "gateway replied"
        );
        debug!(endpoint = endpoint.name(), body = ?reply.body, "gateway response body");
        Ok(reply)
    }
}

fn finish(operation: &'static str, result: Result<GatewayReply, RelayError>) -> RelayOutcome {
    if let Err(e) = &result {
        warn!(operation, code = e.code(), error = %e, "operation failed");
    }
    RelayOutcome::from_result(result)
}
