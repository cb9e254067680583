use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use payments_relay::config::AppConfig;
use payments_relay::gateways::toss::TossGateway;
use payments_relay::gateways::GatewayCredentials;
use payments_relay::repo::billing_key_repo::InMemoryBillingKeyStore;
use payments_relay::service::payment_service::PaymentService;
use payments_relay::{build_router, AppState};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    let gateway = Arc::new(TossGateway::new(
        cfg.toss_base_url.clone(),
        cfg.gateway_timeout_ms,
    ));
    let credentials = Arc::new(GatewayCredentials::new(
        cfg.widget_secret_key,
        cfg.api_secret_key,
    ));
    let payment_service = PaymentService::new(
        gateway,
        Arc::new(InMemoryBillingKeyStore::new()),
        credentials,
    );

    let app = build_router(AppState { payment_service }).layer(cors(&cfg.cors_allowed_origins));

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(gateway = %cfg.toss_base_url, "listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}
