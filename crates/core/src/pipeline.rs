//! Chart pipeline entry point.
//!
//! [`ChartService`] runs one request through every stage in order:
//!
//! ```text
//! fetch → parse_records → filter_by_date → aggregate → assemble → render
//! ```
//!
//! Each stage fails fast; the first error is returned unchanged.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use stockviz_market_data::{parse_records, Resolution, Symbol, TimeSeriesProvider};

use crate::charts::{
    assemble, chart_title, write_html_artifact, ChartKind, ChartRenderer, ChartSeriesModel,
};
use crate::errors::Result;
use crate::quotes::{aggregate, filter_by_date, parse_window};

/// One chart request, as entered by a user.
///
/// Resolution and chart type stay raw strings here; both are parsed
/// leniently when the request runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub symbol: String,
    pub time_series: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub chart_type: String,
    #[serde(default)]
    pub interval: Option<String>,
}

/// A drawn chart together with the data it was drawn from.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedChart {
    pub title: String,
    pub chart_type: ChartKind,
    pub series: ChartSeriesModel,
    pub svg: String,
}

struct PreparedSeries {
    symbol: Symbol,
    resolution: Resolution,
    series: ChartSeriesModel,
}

/// Runs chart requests against a provider and a renderer.
///
/// Holds only shared, immutable handles; one service can serve any number
/// of concurrent requests.
#[derive(Clone)]
pub struct ChartService {
    provider: Arc<dyn TimeSeriesProvider>,
    renderer: Arc<dyn ChartRenderer>,
}

impl ChartService {
    pub fn new(provider: Arc<dyn TimeSeriesProvider>, renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { provider, renderer }
    }

    /// Fetches, filters and aggregates; returns the chart data without drawing it.
    pub async fn build_series(&self, request: &ChartRequest) -> Result<ChartSeriesModel> {
        Ok(self.prepare(request).await?.series)
    }

    /// Full pipeline including the render step.
    pub async fn render(&self, request: &ChartRequest) -> Result<RenderedChart> {
        let prepared = self.prepare(request).await?;
        let kind = ChartKind::parse_lenient(&request.chart_type);
        let title = chart_title(&prepared.symbol, prepared.resolution);

        let svg = self.renderer.render(&title, kind, &prepared.series)?;

        Ok(RenderedChart {
            title,
            chart_type: kind,
            series: prepared.series,
            svg,
        })
    }

    /// Renders the chart into a standalone HTML file and returns its path.
    pub async fn render_to_file(&self, request: &ChartRequest) -> Result<PathBuf> {
        let chart = self.render(request).await?;
        let path = write_html_artifact(&chart.title, &chart.svg)?;
        info!("Chart '{}' saved to {}", chart.title, path.display());
        Ok(path)
    }

    async fn prepare(&self, request: &ChartRequest) -> Result<PreparedSeries> {
        // Local validation first, so bad input never costs a provider call.
        let symbol = Symbol::parse(&request.symbol)?;
        parse_window(&request.start_date, &request.end_date)?;
        let resolution = Resolution::parse_lenient(&request.time_series);

        info!(
            "Fetching {} {} data from {} ({} to {})",
            symbol,
            resolution,
            self.provider.id(),
            request.start_date,
            request.end_date
        );

        let payload = self
            .provider
            .fetch_time_series(&symbol, resolution, request.interval.as_deref())
            .await?;
        let records = parse_records(payload)?;
        let filtered = filter_by_date(records, &request.start_date, &request.end_date)?;
        let buckets = aggregate(filtered, resolution);

        debug!("{} {} buckets for {}", buckets.len(), resolution, symbol);

        Ok(PreparedSeries {
            symbol,
            resolution,
            series: assemble(&buckets),
        })
    }
}
