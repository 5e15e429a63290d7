use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use stockviz_core::{ChartKind, ChartRenderer, ChartSeriesModel, ChartService};
use stockviz_market_data::{
    AlphaVantageConfig, MarketDataError, RawTimeSeriesPayload, Resolution, Symbol, SymbolListing,
    TimeSeriesProvider,
};
use stockviz_server::{api::app_router, config::Config, AppState};
use tower::ServiceExt;

enum Canned {
    Series(Value),
    Fail(fn() -> MarketDataError),
}

struct CannedProvider(Canned);

#[async_trait]
impl TimeSeriesProvider for CannedProvider {
    fn id(&self) -> &'static str {
        "CANNED"
    }

    async fn fetch_time_series(
        &self,
        _symbol: &Symbol,
        _resolution: Resolution,
        _interval: Option<&str>,
    ) -> Result<RawTimeSeriesPayload, MarketDataError> {
        match &self.0 {
            Canned::Series(body) => Ok(RawTimeSeriesPayload::new(
                "Time Series (Daily)",
                body.as_object().cloned().unwrap_or_default(),
            )),
            Canned::Fail(error) => Err(error()),
        }
    }
}

struct StubRenderer;

impl ChartRenderer for StubRenderer {
    fn render(
        &self,
        title: &str,
        kind: ChartKind,
        model: &ChartSeriesModel,
    ) -> stockviz_core::Result<String> {
        Ok(format!(
            "<svg data-kind=\"{}\" data-points=\"{}\">{}</svg>",
            kind,
            model.len(),
            title
        ))
    }
}

fn config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        alpha_vantage: AlphaVantageConfig::new(None),
    }
}

fn app(canned: Canned) -> Router {
    let service = ChartService::new(Arc::new(CannedProvider(canned)), Arc::new(StubRenderer));
    let symbols = vec![SymbolListing::new("IBM", "International Business Machines")];
    app_router(AppState::new(service, symbols), &config())
}

fn daily_body() -> Value {
    json!({
        "2024-01-02": {"1. open": "100.0", "2. high": "103.0", "3. low": "99.0", "4. close": "102.0"},
        "2024-01-03": {"1. open": "102.0", "2. high": "104.0", "3. low": "101.0", "4. close": "103.5"},
        "2024-02-01": {"1. open": "110.0", "2. high": "111.0", "3. low": "109.0", "4. close": "110.5"}
    })
}

fn chart_request(overrides: Value) -> Value {
    let mut body = json!({
        "symbol": "ibm",
        "timeSeries": "daily",
        "startDate": "2024-01-01",
        "endDate": "2024-01-31",
        "chartType": "line"
    });
    if let (Some(base), Some(extra)) = (body.as_object_mut(), overrides.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }
    body
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn healthz_works() {
    let response = app(Canned::Series(daily_body()))
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn client_request_id_is_echoed() {
    let response = app(Canned::Series(daily_body()))
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .header("x-request-id", "trace-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["x-request-id"], "trace-42");
}

#[tokio::test]
async fn error_responses_carry_request_id() {
    let response = app(Canned::Series(daily_body()))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/charts/series")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(chart_request(json!({"symbol": ""})).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn symbols_are_listed() {
    let response = app(Canned::Series(daily_body()))
        .oneshot(Request::builder().uri("/api/v1/symbols").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body[0]["symbol"], "IBM");
    assert_eq!(body[0]["name"], "International Business Machines");
}

#[tokio::test]
async fn series_route_returns_filtered_model() {
    let (status, body) = post_json(
        app(Canned::Series(daily_body())),
        "/api/v1/charts/series",
        chart_request(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["xLabels"], json!(["2024-01-02", "2024-01-03"]));
    assert_eq!(body["series"][0]["name"], "Open");
    assert_eq!(body["series"][3]["values"], json!([102.0, 103.5]));
}

#[tokio::test]
async fn svg_route_returns_rendered_chart() {
    let (status, body) = post_json(
        app(Canned::Series(daily_body())),
        "/api/v1/charts/svg",
        chart_request(json!({"timeSeries": "monthly", "chartType": "stacked-bar"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "IBM Stock Prices (Monthly)");
    assert_eq!(body["chartType"], "stacked_bar");
    assert_eq!(body["series"]["xLabels"], json!(["2024-01"]));
    assert!(body["svg"]
        .as_str()
        .unwrap()
        .contains("data-kind=\"stacked_bar\""));
}

#[tokio::test]
async fn empty_symbol_is_bad_request() {
    let (status, body) = post_json(
        app(Canned::Series(daily_body())),
        "/api/v1/charts/series",
        chart_request(json!({"symbol": "  "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn inverted_window_is_bad_request() {
    let (status, body) = post_json(
        app(Canned::Series(daily_body())),
        "/api/v1/charts/series",
        chart_request(json!({"startDate": "2024-03-01", "endDate": "2024-01-01"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Start date (2024-03-01) cannot be after end date (2024-01-01)"
    );
}

#[tokio::test]
async fn empty_window_is_not_found() {
    let (status, body) = post_json(
        app(Canned::Series(daily_body())),
        "/api/v1/charts/series",
        chart_request(json!({"startDate": "2023-01-01", "endDate": "2023-01-31"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "No data available between 2023-01-01 and 2023-01-31"
    );
}

#[tokio::test]
async fn unknown_symbol_is_bad_request() {
    let (status, _) = post_json(
        app(Canned::Fail(|| MarketDataError::SymbolNotFound("ZZZZZ".to_string()))),
        "/api/v1/charts/series",
        chart_request(json!({"symbol": "zzzzz"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rate_limit_is_too_many_requests() {
    let (status, body) = post_json(
        app(Canned::Fail(|| MarketDataError::RateLimited {
            provider: "CANNED".to_string(),
            message: "API call frequency exceeded".to_string(),
        })),
        "/api/v1/charts/series",
        chart_request(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], 429);
}

#[tokio::test]
async fn upstream_failures_are_bad_gateway() {
    let (status, body) = post_json(
        app(Canned::Fail(|| MarketDataError::UnexpectedResponse {
            message: "No time series in response".to_string(),
            keys: vec!["Meta Data".to_string()],
        })),
        "/api/v1/charts/series",
        chart_request(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"].as_str().unwrap().contains("Meta Data"));
}

#[tokio::test]
async fn missing_credential_is_internal_error() {
    let (status, body) = post_json(
        app(Canned::Fail(|| MarketDataError::ConfigurationMissing {
            variable: "ALPHA_VANTAGE_API_KEY".to_string(),
        })),
        "/api/v1/charts/series",
        chart_request(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("ALPHA_VANTAGE_API_KEY"));
}
