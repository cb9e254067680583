use crate::domain::payment::{has_error, JsonObject, SecretKind};
use secrecy::SecretString;
use thiserror::Error;

pub mod mock;
pub mod toss;

pub const DEFAULT_BASE_URL: &str = "https://api.tosspayments.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEndpoint {
    ConfirmPayment,
    ConfirmBilling(String),
    IssueBillingKey,
    BrandpayAccessToken,
    ConfirmBrandpay,
}

impl GatewayEndpoint {
    pub fn path(&self) -> String {
        match self {
            GatewayEndpoint::ConfirmPayment => "/v1/payments/confirm".to_string(),
            GatewayEndpoint::ConfirmBilling(billing_key) => format!("/v1/billing/{billing_key}"),
            GatewayEndpoint::IssueBillingKey => "/v1/billing/authorizations/issue".to_string(),
            GatewayEndpoint::BrandpayAccessToken => {
                "/v1/brandpay/authorizations/access-token".to_string()
            }
            GatewayEndpoint::ConfirmBrandpay => "/v1/brandpay/payments/confirm".to_string(),
        }
    }

    /// Stable label for logs; never includes the billing key.
    pub fn name(&self) -> &'static str {
        match self {
            GatewayEndpoint::ConfirmPayment => "payments.confirm",
            GatewayEndpoint::ConfirmBilling(_) => "billing.confirm",
            GatewayEndpoint::IssueBillingKey => "billing.issue",
            GatewayEndpoint::BrandpayAccessToken => "brandpay.access_token",
            GatewayEndpoint::ConfirmBrandpay => "brandpay.confirm",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayReply {
    pub status: u16,
    pub body: JsonObject,
}

impl GatewayReply {
    pub fn is_success(&self) -> bool {
        self.status == 200 && !has_error(&self.body)
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway transport failure: {0}")]
    Transport(String),
    #[error("gateway response is not a JSON object: {0}")]
    Parse(String),
}

pub struct GatewayCredentials {
    widget: SecretString,
    api: SecretString,
}

impl GatewayCredentials {
    pub fn new(widget: SecretString, api: SecretString) -> Self {
        Self { widget, api }
    }

    pub fn select(&self, kind: SecretKind) -> &SecretString {
        match kind {
            SecretKind::Widget => &self.widget,
            SecretKind::Api => &self.api,
        }
    }
}

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(
        &self,
        endpoint: &GatewayEndpoint,
        secret_key: &SecretString,
        body: &JsonObject,
    ) -> Result<GatewayReply, GatewayError>;
}
