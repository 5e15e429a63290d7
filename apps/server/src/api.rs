use std::sync::Arc;

use crate::{config::Config, error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use stockviz_core::{ChartRequest, ChartSeriesModel, RenderedChart};
use stockviz_market_data::SymbolListing;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub async fn healthz() -> &'static str {
    "ok"
}

async fn list_symbols(State(state): State<Arc<AppState>>) -> Json<Vec<SymbolListing>> {
    Json(state.symbols.as_ref().clone())
}

async fn chart_series(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChartRequest>,
) -> ApiResult<Json<ChartSeriesModel>> {
    let series = state.chart_service.build_series(&request).await?;
    Ok(Json(series))
}

async fn chart_svg(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChartRequest>,
) -> ApiResult<Json<RenderedChart>> {
    let chart = state.chart_service.render(&request).await?;
    Ok(Json(chart))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    }
    .allow_methods(Any)
    .allow_headers(Any);

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/symbols", get(list_symbols))
        .route("/charts/series", post(chart_series))
        .route("/charts/svg", post(chart_svg));

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        // Outermost layer runs first: the id is set before it is propagated.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
