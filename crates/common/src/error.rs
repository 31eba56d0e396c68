use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("{field} must be a positive finite price, got {value}")]
    InvalidPrice { field: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    #[error("Rule name must not be empty")]
    EmptyName,
    #[error("Threshold for rule '{name}' must be a finite number >= 0, got {value}")]
    InvalidThreshold { name: String, value: f64 },
}

/// Run-level failures. Per-symbol fetch failures never end up here.
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Alert configuration missing: {0}")]
    ConfigMissing(String),
    #[error("Invalid alert rule: {0}")]
    InvalidRule(#[from] RuleError),
    #[error("Configuration store is read-only; use the sqlite backend to update rules")]
    ReadOnlyConfig,
    #[error("Configuration store failure: {0}")]
    Storage(String),
    #[error("Slack webhook not configured: {0}")]
    NotifierConfig(String),
    #[error("Refusing to send an alert without any stocks")]
    EmptyNotification,
    #[error("Slack delivery failed (status {status:?}): {detail}")]
    Delivery { status: Option<u16>, detail: String },
}
