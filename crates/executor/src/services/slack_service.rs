use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use common::{
    AlertError,
    models::{AlertConfig, DropRecord},
};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{error, info};
use url::Url;

/// Slack rejects section text longer than this.
const SECTION_TEXT_LIMIT: usize = 3000;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one alert for `records`, which must not be empty.
    async fn notify(&self, records: &[DropRecord], config: &AlertConfig) -> Result<(), AlertError>;
}

#[derive(Debug, Serialize)]
pub struct SlackMessage {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: Text },
    Section { text: Text },
    Divider,
    Context { elements: Vec<Text> },
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    PlainText { text: String, emoji: bool },
    Mrkdwn { text: String },
}

pub struct SlackNotifier {
    client: Client,
    webhook_url: Option<String>,
    timezone: Tz,
    universe_label: String,
}

impl SlackNotifier {
    pub fn new(
        webhook_url: Option<String>,
        timezone: Tz,
        universe_label: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AlertError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AlertError::NotifierConfig(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            webhook_url,
            timezone,
            universe_label: universe_label.into(),
        })
    }

    fn webhook(&self) -> Result<Url, AlertError> {
        let raw = self
            .webhook_url
            .as_deref()
            .ok_or_else(|| AlertError::NotifierConfig("SLACK_WEBHOOK_URL is not set".into()))?;

        Url::parse(raw).map_err(|e| AlertError::NotifierConfig(format!("invalid URL: {}", e)))
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self, records: &[DropRecord], config: &AlertConfig) -> Result<(), AlertError> {
        if records.is_empty() {
            return Err(AlertError::EmptyNotification);
        }
        let url = self.webhook()?;

        let message = build_message(
            records,
            config,
            Utc::now(),
            self.timezone,
            &self.universe_label,
        );

        info!("Sending Slack alert for {} stocks", records.len());

        let response = self
            .client
            .post(url)
            .json(&message)
            .send()
            .await
            .map_err(|e| AlertError::Delivery {
                status: e.status().map(|s| s.as_u16()),
                detail: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Slack API error: {} - {}", status, body);
            return Err(AlertError::Delivery {
                status: Some(status.as_u16()),
                detail: body,
            });
        }

        info!("Slack alert sent");
        Ok(())
    }
}

pub fn build_message(
    records: &[DropRecord],
    config: &AlertConfig,
    now: DateTime<Utc>,
    timezone: Tz,
    universe_label: &str,
) -> SlackMessage {
    let count = records.len();
    let threshold = config
        .headline_threshold()
        .or_else(|| {
            records
                .iter()
                .map(|r| r.threshold_percent)
                .min_by(f64::total_cmp)
        })
        .unwrap_or_default();
    let show_rule = config.rules().len() > 1;

    let lines: Vec<String> = records.iter().map(|r| stock_line(r, show_rule)).collect();

    let mut blocks = vec![
        Block::Header {
            text: Text::PlainText {
                text: format!(
                    "📉 Stock Drop Alert ({} stock{})",
                    count,
                    if count == 1 { "" } else { "s" }
                ),
                emoji: true,
            },
        },
        Block::Section {
            text: Text::Mrkdwn {
                text: format!(
                    "The following stocks dropped more than *{}%* today:",
                    threshold
                ),
            },
        },
        Block::Divider,
    ];

    blocks.extend(
        chunk_lines(&lines, SECTION_TEXT_LIMIT)
            .into_iter()
            .map(|text| Block::Section {
                text: Text::Mrkdwn { text },
            }),
    );

    let local = now.with_timezone(&timezone);
    blocks.push(Block::Divider);
    blocks.push(Block::Context {
        elements: vec![Text::Mrkdwn {
            text: format!(
                "🕙 {} | {}",
                local.format("%-m/%-d/%Y, %-I:%M:%S %p %Z"),
                universe_label
            ),
        }],
    });

    SlackMessage { blocks }
}

fn stock_line(record: &DropRecord, show_rule: bool) -> String {
    let quote = &record.quote;
    let mut line = format!(
        "• *{}* ({}): ${:.2} → *{}*",
        quote.symbol(),
        quote.name(),
        quote.price(),
        record.drop_label()
    );
    if show_rule {
        line.push_str(&format!(" _{}_", record.rule_name));
    }
    line
}

/// Joins lines with newlines into chunks of at most `limit` characters.
/// A single line longer than `limit` gets a chunk of its own.
fn chunk_lines(lines: &[String], limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in lines {
        let line_len = line.chars().count();
        if !current.is_empty() && current_len + 1 + line_len > limit {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
