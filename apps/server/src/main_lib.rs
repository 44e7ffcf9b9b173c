use std::sync::Arc;

use crate::config::Config;
use anyhow::Context;
use marketlens_market_data::{
    ClientConfig, ClobClient, DataApiClient, GammaClient, HttpTransport, ReqwestTransport,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub gamma: GammaClient,
    pub clob: ClobClient,
    pub data_api: DataApiClient,
}

pub fn init_tracing() {
    let log_format =
        std::env::var("MARKETLENS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// State backed by real HTTP clients.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let transport = ReqwestTransport::new().context("Failed to build HTTP client")?;
    Ok(build_state_with_transport(config, Arc::new(transport)))
}

/// State whose three clients share `transport`.
pub fn build_state_with_transport(
    config: &Config,
    transport: Arc<dyn HttpTransport>,
) -> Arc<AppState> {
    tracing::info!(
        gamma = %config.gamma_url,
        clob = %config.clob_url,
        data = %config.data_url,
        "Configuring market data clients"
    );
    let gamma_config = Arc::new(ClientConfig::new(config.gamma_url.clone()));
    let clob_config = Arc::new(ClientConfig::new(config.clob_url.clone()));
    let data_config = Arc::new(ClientConfig::new(config.data_url.clone()));

    Arc::new(AppState {
        gamma: GammaClient::new(gamma_config, Arc::clone(&transport)),
        clob: ClobClient::new(clob_config, Arc::clone(&transport)),
        data_api: DataApiClient::new(data_config, transport),
    })
}
