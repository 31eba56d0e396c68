use serde::Serialize;

use crate::error::{AlertError, RuleError};

pub const DEFAULT_RULE_NAME: &str = "drop";
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 5.0;

/// A named drop rule. `threshold_percent` is the drop magnitude, so a rule of
/// 15 matches quotes whose change is -15% or lower.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRule {
    pub name: String,
    pub enabled: bool,
    pub threshold_percent: f64,
}

impl AlertRule {
    pub fn new(
        name: impl Into<String>,
        enabled: bool,
        threshold_percent: f64,
    ) -> Result<Self, RuleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RuleError::EmptyName);
        }
        if !threshold_percent.is_finite() || threshold_percent < 0.0 {
            return Err(RuleError::InvalidThreshold {
                name,
                value: threshold_percent,
            });
        }

        Ok(Self {
            name,
            enabled,
            threshold_percent,
        })
    }

    pub fn matches(&self, change_percent: f64) -> bool {
        self.enabled && change_percent <= -self.threshold_percent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertConfig {
    rules: Vec<AlertRule>,
}

impl AlertConfig {
    pub fn new(rules: Vec<AlertRule>) -> Result<Self, AlertError> {
        if rules.is_empty() {
            return Err(AlertError::ConfigMissing("no alert rules defined".into()));
        }
        Ok(Self { rules })
    }

    pub fn single(enabled: bool, threshold_percent: f64) -> Result<Self, AlertError> {
        let rule = AlertRule::new(DEFAULT_RULE_NAME, enabled, threshold_percent)?;
        Self::new(vec![rule])
    }

    pub fn rules(&self) -> &[AlertRule] {
        &self.rules
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = &AlertRule> {
        self.rules.iter().filter(|r| r.enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.rules.iter().any(|r| r.enabled)
    }

    /// Copy with every rule switched on. Used for manual runs against a
    /// configuration whose rules are all disabled.
    pub fn with_all_enabled(&self) -> Self {
        Self {
            rules: self
                .rules
                .iter()
                .map(|r| AlertRule {
                    enabled: true,
                    ..r.clone()
                })
                .collect(),
        }
    }

    /// Smallest enabled threshold, i.e. the entry bar for showing up in an alert.
    pub fn headline_threshold(&self) -> Option<f64> {
        self.enabled_rules()
            .map(|r| r.threshold_percent)
            .min_by(f64::total_cmp)
    }
}
