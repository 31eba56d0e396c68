use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::{debug, error};

use common::logger;
use common::models::alert_config::{DEFAULT_RULE_NAME, DEFAULT_THRESHOLD_PERCENT};
use common::models::{AlertRule, ErrorSummary};
use common::settings::{ConfigBackend, JobSettings};
use market_data::remote::YahooClient;
use market_data::services::BatchScheduler;
use market_data::universe::{dedup_symbols, default_universe};
use storage::{ConfigStore, EnvConfigStore, SqliteConfigStore, db};
use strategy::DropEvaluator;

use crate::services::alert_job::AlertJob;
use crate::services::slack_service::SlackNotifier;

mod services;

#[derive(Parser)]
#[command(name = "stock-alert", version, about = "Slack alerts for large daily stock drops")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the universe once and alert on qualifying drops
    Run {
        /// Run even when every alert rule is disabled
        #[arg(long)]
        force_run: bool,
    },
    /// Read or update the alert rules
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Set {
        #[arg(long, default_value = DEFAULT_RULE_NAME)]
        rule: String,
        /// Drop magnitude in percent
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_PERCENT)]
        threshold: f64,
        #[arg(long)]
        disabled: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    logger::setup_logger();
    debug!("Stock alert starting up...");

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            let summary = ErrorSummary {
                error: format!("{:#}", e),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).unwrap_or_else(|_| summary.error.clone())
            );
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> anyhow::Result<String> {
    let settings = JobSettings::from_env().context("Invalid settings")?;
    let store = open_store(&settings).await?;

    match cli.command {
        Command::Run { force_run } => run_job(&settings, store.as_ref(), force_run).await,
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let config = store.load().await?;
                Ok(serde_json::to_string_pretty(&config)?)
            }
            ConfigAction::Set {
                rule,
                threshold,
                disabled,
            } => {
                let rule = AlertRule::new(rule, !disabled, threshold)?;
                store.save(rule).await?;
                let config = store.load().await?;
                Ok(serde_json::to_string_pretty(&config)?)
            }
        },
    }
}

async fn open_store(settings: &JobSettings) -> anyhow::Result<Box<dyn ConfigStore>> {
    match settings.config_backend {
        ConfigBackend::Env => Ok(Box::new(EnvConfigStore::from_env())),
        ConfigBackend::Sqlite => {
            let pool = db::connect(&settings.database_url)
                .await
                .with_context(|| format!("Failed to open {}", settings.database_url))?;
            Ok(Box::new(SqliteConfigStore::new(pool)))
        }
    }
}

async fn run_job(
    settings: &JobSettings,
    store: &dyn ConfigStore,
    force_run: bool,
) -> anyhow::Result<String> {
    let config = store.load().await?;

    let source = YahooClient::new(&settings.chart_base_url, settings.request_timeout)?;
    let scheduler = BatchScheduler::new(source, settings.batch_size, settings.batch_delay);
    let evaluator = DropEvaluator::new().with_max_alerts(settings.max_alerts);
    let notifier = SlackNotifier::new(
        settings.webhook_url.clone(),
        settings.timezone,
        settings.universe_label.clone(),
        settings.request_timeout,
    )?;

    let symbols = settings
        .symbols
        .clone()
        .map(dedup_symbols)
        .unwrap_or_else(default_universe);
    debug!(
        "Universe: {} symbols, batch size {}, delay {:?}",
        symbols.len(),
        settings.batch_size,
        settings.batch_delay
    );

    let job = AlertJob::new(scheduler, evaluator, notifier, symbols);
    let outcome = job.run(&config, force_run).await?;

    Ok(serde_json::to_string_pretty(&outcome.summary())?)
}
