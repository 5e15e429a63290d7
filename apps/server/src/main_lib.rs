use std::sync::Arc;

use crate::config::Config;
use stockviz_core::{load_symbols, ChartService, SvgChartRenderer};
use stockviz_market_data::{AlphaVantageProvider, SymbolListing};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub chart_service: ChartService,
    /// Loaded once at startup; read-only afterwards.
    pub symbols: Arc<Vec<SymbolListing>>,
}

impl AppState {
    pub fn new(chart_service: ChartService, symbols: Vec<SymbolListing>) -> Arc<Self> {
        Arc::new(Self {
            chart_service,
            symbols: Arc::new(symbols),
        })
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("STOCKVIZ_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if config.alpha_vantage.api_key.is_none() {
        tracing::warn!("ALPHA_VANTAGE_API_KEY is not set; chart requests will fail until it is");
    }

    let provider = Arc::new(AlphaVantageProvider::new(config.alpha_vantage.clone()));
    let renderer = Arc::new(SvgChartRenderer::default());

    tracing::info!("Loading stock symbols...");
    let symbols = load_symbols(provider.as_ref()).await;
    tracing::info!("{} symbols available", symbols.len());

    Ok(AppState::new(ChartService::new(provider, renderer), symbols))
}
