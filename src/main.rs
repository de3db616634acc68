use anyhow::{Context, anyhow};
use clap::Parser;
use doc_analyzer::app::AnalyzerApp;
use doc_analyzer::backend::analyzer::{AnalysisClient, Analyze};
use doc_analyzer::cli::{Cli, run_headless};
use doc_analyzer::config::Config;
use doc_analyzer::constant;
use doc_analyzer::ui;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the headless result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::default();
    let endpoint = config.endpoint(cli.endpoint.as_deref());
    tracing::info!("Using analysis endpoint {}", endpoint);

    let analyzer: Arc<dyn Analyze> =
        Arc::new(AnalysisClient::new(endpoint).context("Failed to set up the HTTP client")?);

    if let Some(query) = cli.query.as_deref() {
        return Ok(match run_headless(analyzer, cli.file.as_deref(), query) {
            Ok(result) => {
                println!("{}", result);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                e.exit_code()
            }
        });
    }

    let options = ui::viewport::build_viewport();
    let initial_file = cli.file;
    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(AnalyzerApp::new(cc, config, analyzer, initial_file)))),
    )
    .map_err(|e| anyhow!("Failed to open the window: {}", e))?;

    Ok(ExitCode::SUCCESS)
}
