use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use stockviz_cli::{args::Args, prompt::Prompter, run};
use stockviz_core::{ChartKind, ChartRenderer, ChartSeriesModel, ChartService};
use stockviz_market_data::{
    MarketDataError, RawTimeSeriesPayload, Resolution, Symbol, TimeSeriesProvider,
};

#[derive(Default)]
struct ScriptedProvider {
    calls: Mutex<Vec<(String, Resolution)>>,
}

#[async_trait]
impl TimeSeriesProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "SCRIPTED"
    }

    async fn fetch_time_series(
        &self,
        symbol: &Symbol,
        resolution: Resolution,
        _interval: Option<&str>,
    ) -> Result<RawTimeSeriesPayload, MarketDataError> {
        self.calls
            .lock()
            .unwrap()
            .push((symbol.to_string(), resolution));
        if symbol.as_str() == "ZZZZZ" {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        let body = json!({
            "2024-01-02": {"1. open": "10", "2. high": "12", "3. low": "9", "4. close": "11"},
            "2024-01-03": {"1. open": "11", "2. high": "13", "3. low": "10", "4. close": "12"}
        });
        Ok(RawTimeSeriesPayload::new(
            "Time Series (Daily)",
            body.as_object().cloned().unwrap_or_default(),
        ))
    }
}

struct PlainRenderer;

impl ChartRenderer for PlainRenderer {
    fn render(
        &self,
        title: &str,
        _kind: ChartKind,
        _model: &ChartSeriesModel,
    ) -> stockviz_core::Result<String> {
        Ok(format!("<svg><text>{}</text></svg>", title))
    }
}

async fn session(input: &str, preset: Args) -> (bool, String, Arc<ScriptedProvider>) {
    let provider = Arc::new(ScriptedProvider::default());
    let service = ChartService::new(provider.clone(), Arc::new(PlainRenderer));
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::<u8>::new());

    let succeeded = run(&service, &mut prompter, preset).await.unwrap();
    let output = String::from_utf8(prompter.output().clone()).unwrap();
    (succeeded, output, provider)
}

fn chart_path(output: &str) -> std::path::PathBuf {
    let line = output
        .lines()
        .find_map(|l| l.trim().strip_prefix("Chart file: "))
        .expect("chart path printed");
    std::path::PathBuf::from(line)
}

#[tokio::test]
async fn interactive_session_writes_chart() {
    let (succeeded, output, provider) =
        session("ibm\n1\n2\n2024-01-01\n2024-01-31\nn\n", Args::default()).await;

    assert!(succeeded);
    assert!(output.contains("SUMMARY OF YOUR SELECTIONS"));
    assert!(output.contains("Goodbye!"));
    assert_eq!(
        *provider.calls.lock().unwrap(),
        vec![("IBM".to_string(), Resolution::Daily)]
    );

    let path = chart_path(&output);
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("IBM Stock Prices (Daily)"));
    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn failure_is_reported_and_user_can_continue() {
    let input = "zzzzz\n1\n2\n2024-01-01\n2024-01-31\ny\nibm\n2\n4\n2024-01-01\n2024-01-31\nn\n";
    let (succeeded, output, provider) = session(input, Args::default()).await;

    assert!(succeeded);
    assert!(output.contains("Stock Symbol Not Found"));
    assert!(output.contains("correct ticker symbol"));
    assert_eq!(provider.calls.lock().unwrap().len(), 2);

    std::fs::remove_file(chart_path(&output)).unwrap();
}

#[tokio::test]
async fn failure_then_exit_reports_failure() {
    let (succeeded, output, _) =
        session("zzzzz\n1\n2\n2024-01-01\n2024-01-31\nn\n", Args::default()).await;

    assert!(!succeeded);
    assert!(!output.contains("Goodbye!"));
}

#[tokio::test]
async fn flags_skip_first_round_prompts() {
    let preset = Args {
        symbol: Some("msft".to_string()),
        chart_type: Some("bar".to_string()),
        time_series: Some("weekly".to_string()),
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
        interval: None,
    };
    let (succeeded, output, provider) = session("n\n", preset).await;

    assert!(succeeded);
    assert!(!output.contains("Enter the stock symbol"));
    assert_eq!(
        *provider.calls.lock().unwrap(),
        vec![("MSFT".to_string(), Resolution::Weekly)]
    );

    std::fs::remove_file(chart_path(&output)).unwrap();
}

#[tokio::test]
async fn inverted_flag_window_never_reaches_provider() {
    let preset = Args {
        symbol: Some("ibm".to_string()),
        chart_type: Some("line".to_string()),
        time_series: Some("daily".to_string()),
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
        end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
        interval: None,
    };
    let (succeeded, output, provider) = session("n\n", preset).await;

    assert!(!succeeded);
    assert!(output.contains("Input Error"));
    assert!(provider.calls.lock().unwrap().is_empty());
}
