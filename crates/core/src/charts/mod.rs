//! Chart output: series model, rendering and the HTML artifact.

pub mod html;
pub mod render;
pub mod series;

pub use html::{build_html, write_html_artifact};
pub use render::{ChartKind, ChartRenderer, SvgChartRenderer};
pub use series::{assemble, ChartSeriesModel, NamedSeries};

use stockviz_market_data::{Resolution, Symbol};

/// Chart heading, e.g. `"IBM Stock Prices (Weekly)"`.
pub fn chart_title(symbol: &Symbol, resolution: Resolution) -> String {
    format!("{} Stock Prices ({})", symbol, resolution.title())
}
