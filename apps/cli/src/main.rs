use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use stockviz_cli::{args::Args, init_tracing, prompt::Prompter, run};
use stockviz_core::{ChartService, SvgChartRenderer};
use stockviz_market_data::AlphaVantageProvider;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();
    let args = Args::parse();

    let service = ChartService::new(
        Arc::new(AlphaVantageProvider::from_env()),
        Arc::new(SvgChartRenderer::default()),
    );

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let succeeded = run(&service, &mut prompter, args).await?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
