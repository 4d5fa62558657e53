//! DecisionForge command-line runner
//!
//! Usage: `forge-cli [decide|evaluate] [input.json]`. Input defaults to stdin.

use anyhow::{bail, Result};
use forge_cli::config::CliConfig;
use forge_cli::{engine, runner};
use forge_sdk::ExplainOptions;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "decide".to_string());

    // Load configuration
    let mut config = CliConfig::load()?;
    if let Some(input) = args.next() {
        config.input = Some(PathBuf::from(input));
    }
    info!("Loaded configuration: {:?}", config);

    let engine = engine::init_assisted(&config)?;
    let content = read_input(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command.as_str() {
        "decide" => {
            let records = runner::parse_records(&content)?;
            let mut options = if config.explain {
                ExplainOptions::default()
            } else {
                ExplainOptions::none()
            };
            options.recommendations = config.recommendations;

            let insights = engine
                .is_assisted()
                .then_some((config.time_period.as_str(), config.insights_min_decisions));
            runner::run_decide(&engine, &records, &options, insights, &mut out).await?;
        }
        "evaluate" => {
            let cases = runner::parse_cases(&content)?;
            runner::run_evaluate(&engine, &cases, &mut out)?;
        }
        other => bail!("Unknown command '{}'; expected 'decide' or 'evaluate'", other),
    }

    Ok(())
}

/// Initialize tracing subscriber. Logs go to stderr; stdout carries results.
fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "forge_cli=info,forge_sdk=info,forge_runtime=info,forge::audit=info".into()
    });
    let json = std::env::var("FORGE_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}

fn read_input(config: &CliConfig) -> Result<String> {
    match &config.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
