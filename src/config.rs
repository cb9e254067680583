use anyhow::{Context, Result};
use secrecy::{Secret, SecretString};

use crate::gateways::DEFAULT_BASE_URL;

#[derive(Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub toss_base_url: String,
    pub widget_secret_key: SecretString,
    pub api_secret_key: SecretString,
    pub gateway_timeout_ms: Option<u64>,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let widget_secret_key = lookup("TOSS_WIDGET_SECRET_KEY")
            .filter(|v| !v.is_empty())
            .context("TOSS_WIDGET_SECRET_KEY must be set")?;
        let api_secret_key = lookup("TOSS_API_SECRET_KEY")
            .filter(|v| !v.is_empty())
            .context("TOSS_API_SECRET_KEY must be set")?;

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            toss_base_url: lookup("TOSS_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            widget_secret_key: Secret::new(widget_secret_key),
            api_secret_key: Secret::new(api_secret_key),
            gateway_timeout_ms: lookup("GATEWAY_TIMEOUT_MS").and_then(|s| s.parse::<u64>().ok()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}
