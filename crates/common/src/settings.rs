use std::env;
use std::time::Duration;

use chrono_tz::Tz;
use thiserror::Error;

pub const DEFAULT_CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
pub const DEFAULT_BATCH_SIZE: usize = 15;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;
pub const DEFAULT_UNIVERSE_LABEL: &str = "S&P 500 + Growth Stocks";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:stock_alert.db";

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigBackend {
    Env,
    Sqlite,
}

/// Deployment settings, read once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSettings {
    pub chart_base_url: String,
    pub batch_size: usize,
    pub batch_delay: Duration,
    pub request_timeout: Duration,
    pub webhook_url: Option<String>,
    pub timezone: Tz,
    pub max_alerts: Option<usize>,
    pub symbols: Option<Vec<String>>,
    pub universe_label: String,
    pub config_backend: ConfigBackend,
    pub database_url: String,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            chart_base_url: DEFAULT_CHART_BASE_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            webhook_url: None,
            timezone: DEFAULT_TIMEZONE,
            max_alerts: None,
            symbols: None,
            universe_label: DEFAULT_UNIVERSE_LABEL.to_string(),
            config_backend: ConfigBackend::Env,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl JobSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let batch_size = match get("BATCH_SIZE") {
            Some(raw) => parse_positive("BATCH_SIZE", &raw)?,
            None => defaults.batch_size,
        };

        let batch_delay = match get("BATCH_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_u64("BATCH_DELAY_MS", &raw)?),
            None => defaults.batch_delay,
        };

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                Duration::from_secs(parse_positive("REQUEST_TIMEOUT_SECS", &raw)? as u64)
            }
            None => defaults.request_timeout,
        };

        let timezone = match get("ALERT_TIMEZONE") {
            Some(raw) => raw.parse::<Tz>().map_err(|_| SettingsError::Invalid {
                key: "ALERT_TIMEZONE",
                expected: "an IANA timezone name",
                value: raw.clone(),
            })?,
            None => defaults.timezone,
        };

        let max_alerts = get("ALERT_MAX_STOCKS")
            .map(|raw| parse_positive("ALERT_MAX_STOCKS", &raw))
            .transpose()?;

        let symbols = get("STOCK_SYMBOLS").map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        });

        let config_backend = match get("CONFIG_BACKEND").as_deref() {
            None | Some("env") => ConfigBackend::Env,
            Some("sqlite") => ConfigBackend::Sqlite,
            Some(other) => {
                return Err(SettingsError::Invalid {
                    key: "CONFIG_BACKEND",
                    expected: "'env' or 'sqlite'",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            chart_base_url: get("CHART_BASE_URL").unwrap_or(defaults.chart_base_url),
            batch_size,
            batch_delay,
            request_timeout,
            webhook_url: get("SLACK_WEBHOOK_URL"),
            timezone,
            max_alerts,
            symbols: symbols.filter(|s| !s.is_empty()),
            universe_label: get("UNIVERSE_LABEL").unwrap_or(defaults.universe_label),
            config_backend,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
        })
    }
}

fn parse_u64(key: &'static str, raw: &str) -> Result<u64, SettingsError> {
    raw.parse::<u64>().map_err(|_| SettingsError::Invalid {
        key,
        expected: "a non-negative integer",
        value: raw.to_string(),
    })
}

fn parse_positive(key: &'static str, raw: &str) -> Result<usize, SettingsError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SettingsError::Invalid {
            key,
            expected: "a positive integer",
            value: raw.to_string(),
        }),
    }
}
