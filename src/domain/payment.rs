use crate::error::RelayError;
use serde::Deserialize;
use serde_json::{json, Map, Value};

pub type JsonObject = Map<String, Value>;

pub const CUSTOMER_KEY: &str = "customerKey";
pub const BILLING_KEY: &str = "billingKey";
pub const ERROR_KEY: &str = "error";

/// Which checkout flow a confirmation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    Standard,
    Widget,
}

impl PaymentMode {
    pub fn secret_kind(self) -> SecretKind {
        match self {
            PaymentMode::Standard => SecretKind::Api,
            PaymentMode::Widget => SecretKind::Widget,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    Widget,
    Api,
}

impl SecretKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SecretKind::Widget => "widget",
            SecretKind::Api => "api",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerAuthorizationQuery {
    #[serde(rename = "customerKey")]
    pub customer_key: String,
    pub code: String,
}

pub fn parse_request_body(raw: &str) -> Result<JsonObject, RelayError> {
    serde_json::from_str::<JsonObject>(raw).map_err(|e| RelayError::InvalidRequestBody(e.to_string()))
}

/// Raw string value of `customerKey`; numbers or nested values are rejected
/// rather than stringified.
pub fn customer_key(body: &JsonObject) -> Result<&str, RelayError> {
    body.get(CUSTOMER_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| RelayError::InvalidRequestBody(format!("{CUSTOMER_KEY} must be a string")))
}

pub fn has_error(body: &JsonObject) -> bool {
    body.contains_key(ERROR_KEY)
}

pub fn access_token_request(customer_key: &str, code: &str) -> JsonObject {
    let mut body = JsonObject::new();
    body.insert("grantType".to_string(), json!("AuthorizationCode"));
    body.insert(CUSTOMER_KEY.to_string(), json!(customer_key));
    body.insert("code".to_string(), json!(code));
    body
}
