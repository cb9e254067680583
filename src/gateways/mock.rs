use crate::domain::payment::JsonObject;
use crate::gateways::{GatewayEndpoint, GatewayError, GatewayReply, PaymentGateway};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: GatewayEndpoint,
    pub secret_key: String,
    pub body: JsonObject,
}

#[derive(Debug, Clone)]
enum Behavior {
    Reply(GatewayReply),
    TransportFailure,
    ParseFailure,
    Hang,
}

/// Scriptable in-process gateway. Endpoints without a script echo the
/// request body back with status 200.
#[derive(Clone, Default)]
pub struct MockGateway {
    behaviors: Arc<Mutex<HashMap<String, Behavior>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn reply(&self, endpoint: GatewayEndpoint, status: u16, body: JsonObject) {
        self.script(endpoint, Behavior::Reply(GatewayReply { status, body }))
            .await;
    }

    pub async fn fail_transport(&self, endpoint: GatewayEndpoint) {
        self.script(endpoint, Behavior::TransportFailure).await;
    }

    pub async fn fail_parse(&self, endpoint: GatewayEndpoint) {
        self.script(endpoint, Behavior::ParseFailure).await;
    }

    /// Calls to this endpoint never complete.
    pub async fn hang(&self, endpoint: GatewayEndpoint) {
        self.script(endpoint, Behavior::Hang).await;
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    async fn script(&self, endpoint: GatewayEndpoint, behavior: Behavior) {
        self.behaviors.lock().await.insert(endpoint.path(), behavior);
    }
}

#[async_trait::async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send(
        &self,
        endpoint: &GatewayEndpoint,
        secret_key: &SecretString,
        body: &JsonObject,
    ) -> Result<GatewayReply, GatewayError> {
        self.calls.lock().await.push(RecordedCall {
            endpoint: endpoint.clone(),
            secret_key: secret_key.expose_secret().clone(),
            body: body.clone(),
        });

        let behavior = self.behaviors.lock().await.get(&endpoint.path()).cloned();
        match behavior {
            Some(Behavior::Reply(reply)) => Ok(reply),
            Some(Behavior::TransportFailure) => {
                Err(GatewayError::Transport("mock connection refused".to_string()))
            }
            Some(Behavior::ParseFailure) => {
                Err(GatewayError::Parse("mock body is not JSON".to_string()))
            }
            Some(Behavior::Hang) => std::future::pending().await,
            None => Ok(GatewayReply {
                status: 200,
                body: body.clone(),
            }),
        }
    }
}
