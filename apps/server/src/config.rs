use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use marketlens_market_data::{CLOB_BASE_URL, DATA_API_BASE_URL, GAMMA_BASE_URL};
use url::Url;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub gamma_url: Url,
    pub clob_url: Url,
    pub data_url: Url,
}

impl Config {
    /// Read `MARKETLENS_*` variables, loading `.env` first.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source. Missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("MARKETLENS_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid MARKETLENS_LISTEN_ADDR")?;
        let cors_allow = lookup("MARKETLENS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("MARKETLENS_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = lookup("MARKETLENS_STATIC_DIR").unwrap_or_else(|| "dist".into());

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            gamma_url: base_url(&lookup, "MARKETLENS_GAMMA_URL", GAMMA_BASE_URL)?,
            clob_url: base_url(&lookup, "MARKETLENS_CLOB_URL", CLOB_BASE_URL)?,
            data_url: base_url(&lookup, "MARKETLENS_DATA_URL", DATA_API_BASE_URL)?,
        })
    }
}

fn base_url<F>(lookup: &F, key: &str, default: &str) -> anyhow::Result<Url>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    Url::parse(&raw).with_context(|| format!("Invalid {}: {}", key, raw))
}
