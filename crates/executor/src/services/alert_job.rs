use common::{
    AlertError,
    models::{AlertConfig, JobOutcome},
};
use market_data::{QuoteSource, services::BatchScheduler};
use strategy::DropEvaluator;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::services::slack_service::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Disabled,
    Evaluating,
}

impl JobState {
    /// Runs only start when a rule is enabled or a manual run was requested.
    pub fn gate(config: &AlertConfig, force_run: bool) -> Self {
        if config.is_enabled() || force_run {
            Self::Evaluating
        } else {
            Self::Disabled
        }
    }
}

pub struct AlertJob<S, N> {
    scheduler: BatchScheduler<S>,
    evaluator: DropEvaluator,
    notifier: N,
    symbols: Vec<String>,
}

impl<S: QuoteSource, N: Notifier> AlertJob<S, N> {
    pub fn new(
        scheduler: BatchScheduler<S>,
        evaluator: DropEvaluator,
        notifier: N,
        symbols: Vec<String>,
    ) -> Self {
        Self {
            scheduler,
            evaluator,
            notifier,
            symbols,
        }
    }

    pub async fn run(&self, config: &AlertConfig, force_run: bool) -> Result<JobOutcome, AlertError> {
        let run_id = Uuid::new_v4();
        self.run_inner(config, force_run)
            .instrument(info_span!("alert_job", %run_id))
            .await
    }

    async fn run_inner(&self, config: &AlertConfig, force_run: bool) -> Result<JobOutcome, AlertError> {
        info!(
            "Stock alert run triggered (enabled={}, force_run={})",
            config.is_enabled(),
            force_run
        );

        if JobState::gate(config, force_run) == JobState::Disabled {
            info!("Alerts are disabled. Exiting.");
            return Ok(JobOutcome::Disabled);
        }

        let effective = if config.is_enabled() {
            config.clone()
        } else {
            info!("Manual run triggered - bypassing enabled check");
            config.with_all_enabled()
        };

        info!("Fetching data for {} stocks...", self.symbols.len());
        let quotes = self.scheduler.fetch_all(&self.symbols).await;
        let fetched = quotes.len();

        let records = self.evaluator.evaluate(&quotes, &effective);
        if records.is_empty() {
            info!("No significant drops detected. No alert sent.");
            return Ok(JobOutcome::NoDrops { fetched });
        }

        if let Err(e) = self.notifier.notify(&records, &effective).await {
            let dropped: Vec<String> = records
                .iter()
                .map(|r| format!("{} {}", r.symbol(), r.drop_label()))
                .collect();
            error!("Alert not delivered for [{}]: {}", dropped.join(", "), e);
            return Err(e);
        }

        info!("Run finished: {} stocks alerted", records.len());
        Ok(JobOutcome::Alerted { fetched, records })
    }
}
