use crate::domain::payment::{JsonObject, ERROR_KEY};
use crate::error::RelayError;
use crate::gateways::GatewayReply;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug)]
pub enum RelayOutcome {
    /// Gateway answered 200 without an `error` field; body is passed through.
    Approved(JsonObject),
    /// Gateway reported a failure; body is passed through verbatim.
    Rejected(JsonObject),
    Failed(RelayError),
}

impl RelayOutcome {
    pub fn from_result(result: Result<GatewayReply, RelayError>) -> Self {
        match result {
            Ok(reply) if reply.is_success() => RelayOutcome::Approved(reply.body),
            Ok(reply) => RelayOutcome::Rejected(reply.body),
            Err(e) => RelayOutcome::Failed(e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RelayOutcome::Approved(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayOutcome::Approved(_) => StatusCode::OK,
            RelayOutcome::Failed(RelayError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayOutcome::Rejected(_) | RelayOutcome::Failed(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            RelayOutcome::Failed(e) => Some(e.code()),
            _ => None,
        }
    }

    pub fn into_body(self) -> JsonObject {
        match self {
            RelayOutcome::Approved(body) | RelayOutcome::Rejected(body) => body,
            RelayOutcome::Failed(e) => {
                let mut body = JsonObject::new();
                body.insert(ERROR_KEY.to_string(), json!(e.to_string()));
                body.insert("code".to_string(), json!(e.code()));
                body
            }
        }
    }
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_body())).into_response()
    }
}
