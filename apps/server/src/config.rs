use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use stockviz_market_data::AlphaVantageConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub alpha_vantage: AlphaVantageConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("STOCKVIZ_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid STOCKVIZ_LISTEN_ADDR")?;
        let cors_allow = std::env::var("STOCKVIZ_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        // Must outlast the provider's 60s timeout.
        let timeout_ms: u64 = std::env::var("STOCKVIZ_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "90000".into())
            .parse()
            .unwrap_or(90000);
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            alpha_vantage: AlphaVantageConfig::from_env(),
        })
    }
}
