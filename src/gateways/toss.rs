use crate::domain::payment::JsonObject;
use crate::gateways::{GatewayEndpoint, GatewayError, GatewayReply, PaymentGateway, DEFAULT_BASE_URL};
use secrecy::{ExposeSecret, SecretString};

pub struct TossGateway {
    pub base_url: String,
    pub timeout_ms: Option<u64>,
    pub client: reqwest::Client,
}

impl TossGateway {
    pub fn new(base_url: impl Into<String>, timeout_ms: Option<u64>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
            client: reqwest::Client::new(),
        }
    }
}

impl Default for TossGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[async_trait::async_trait]
impl PaymentGateway for TossGateway {
    fn name(&self) -> &'static str {
        "toss"
    }

    async fn send(
        &self,
        endpoint: &GatewayEndpoint,
        secret_key: &SecretString,
        body: &JsonObject,
    ) -> Result<GatewayReply, GatewayError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path());

        // Basic auth with an empty password: base64("<secret>:").
        let mut req = self
            .client
            .post(url)
            .basic_auth(secret_key.expose_secret(), None::<&str>)
            .json(body);
        if let Some(ms) = self.timeout_ms {
            req = req.timeout(std::time::Duration::from_millis(ms));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let body = serde_json::from_slice::<JsonObject>(&bytes)
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        Ok(GatewayReply { status, body })
    }
}
