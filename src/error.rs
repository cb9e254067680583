use crate::gateways::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Error reading response")]
    Gateway(#[from] GatewayError),
    #[error("no billing key on file for customer {0}")]
    UnknownCustomer(String),
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),
    #[error("billing key store failure: {0}")]
    Store(String),
}

impl RelayError {
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::Gateway(GatewayError::Transport(_)) => "GATEWAY_TRANSPORT_ERROR",
            RelayError::Gateway(GatewayError::Parse(_)) => "GATEWAY_PARSE_ERROR",
            RelayError::UnknownCustomer(_) => "UNKNOWN_CUSTOMER",
            RelayError::InvalidRequestBody(_) => "INVALID_REQUEST_BODY",
            RelayError::Store(_) => "INTERNAL_ERROR",
        }
    }

    pub fn store(e: anyhow::Error) -> Self {
        RelayError::Store(e.to_string())
    }
}
