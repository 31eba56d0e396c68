use std::env;

use async_trait::async_trait;
use common::{
    AlertError,
    models::{AlertConfig, AlertRule, alert_config::DEFAULT_RULE_NAME},
};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::repositories::AlertRuleRepository;

/// Where the alert rules live. Read once at job start; written only by the
/// administrative path.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn load(&self) -> Result<AlertConfig, AlertError>;

    async fn save(&self, rule: AlertRule) -> Result<(), AlertError>;
}

/// Single `drop` rule from `ALERT_ENABLED` / `DROP_THRESHOLD`.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigStore {
    enabled: Option<String>,
    threshold: Option<String>,
}

impl EnvConfigStore {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            enabled: lookup("ALERT_ENABLED"),
            threshold: lookup("DROP_THRESHOLD"),
        }
    }
}

#[async_trait]
impl ConfigStore for EnvConfigStore {
    async fn load(&self) -> Result<AlertConfig, AlertError> {
        let raw = self
            .threshold
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AlertError::ConfigMissing("DROP_THRESHOLD is not set".into()))?;

        let threshold = raw.parse::<f64>().map_err(|_| {
            AlertError::ConfigMissing(format!("DROP_THRESHOLD is not a number: '{}'", raw))
        })?;

        let enabled = self.enabled.as_deref().map(str::trim) == Some("true");
        debug!("Env config: enabled={} threshold={}", enabled, threshold);

        let rule = AlertRule::new(DEFAULT_RULE_NAME, enabled, threshold)?;
        AlertConfig::new(vec![rule])
    }

    async fn save(&self, _rule: AlertRule) -> Result<(), AlertError> {
        Err(AlertError::ReadOnlyConfig)
    }
}

pub struct SqliteConfigStore {
    pool: SqlitePool,
}

impl SqliteConfigStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfigStore for SqliteConfigStore {
    async fn load(&self) -> Result<AlertConfig, AlertError> {
        let rows = AlertRuleRepository::list(&self.pool)
            .await
            .map_err(|e| AlertError::Storage(e.to_string()))?;

        if rows.is_empty() {
            return Err(AlertError::ConfigMissing(
                "no rules stored; run `stock-alert config set` first".into(),
            ));
        }

        let rules = rows
            .into_iter()
            .map(|row| AlertRule::new(row.name, row.enabled, row.threshold_percent))
            .collect::<Result<Vec<_>, _>>()?;

        AlertConfig::new(rules)
    }

    async fn save(&self, rule: AlertRule) -> Result<(), AlertError> {
        AlertRuleRepository::upsert(&self.pool, &rule)
            .await
            .map_err(|e| AlertError::Storage(e.to_string()))?;

        info!(
            "Saved rule '{}' (enabled={}, threshold={}%)",
            rule.name, rule.enabled, rule.threshold_percent
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn memory_store() -> SqliteConfigStore {
        let pool = db::connect("sqlite::memory:").await.unwrap();
        SqliteConfigStore::new(pool)
    }

    fn env_store(enabled: Option<&str>, threshold: Option<&str>) -> EnvConfigStore {
        EnvConfigStore::from_lookup(|key| match key {
            "ALERT_ENABLED" => enabled.map(String::from),
            "DROP_THRESHOLD" => threshold.map(String::from),
            _ => None,
        })
    }

    #[tokio::test]
    async fn env_store_reads_single_rule() {
        let config = env_store(Some("true"), Some("15")).load().await.unwrap();

        assert_eq!(
            config.rules(),
            &[AlertRule::new("drop", true, 15.0).unwrap()]
        );
    }

    #[tokio::test]
    async fn env_store_only_enables_on_literal_true() {
        for flag in [None, Some("false"), Some("1"), Some("TRUE")] {
            let config = env_store(flag, Some("7.5")).load().await.unwrap();
            assert!(!config.is_enabled(), "flag {flag:?}");
        }
    }

    #[tokio::test]
    async fn env_store_without_threshold_is_missing_config() {
        for threshold in [None, Some(""), Some("abc")] {
            let result = env_store(Some("true"), threshold).load().await;
            assert!(matches!(result, Err(AlertError::ConfigMissing(_))));
        }
    }

    #[tokio::test]
    async fn env_store_is_read_only() {
        let rule = AlertRule::new("drop", true, 5.0).unwrap();
        assert!(matches!(
            env_store(Some("true"), Some("5")).save(rule).await,
            Err(AlertError::ReadOnlyConfig)
        ));
    }

    #[tokio::test]
    async fn sqlite_store_starts_empty() {
        let store = memory_store().await;
        assert!(matches!(
            store.load().await,
            Err(AlertError::ConfigMissing(_))
        ));
    }

    #[tokio::test]
    async fn sqlite_store_upserts_by_name() {
        let store = memory_store().await;

        store
            .save(AlertRule::new("drop", true, 15.0).unwrap())
            .await
            .unwrap();
        store
            .save(AlertRule::new("crash", false, 30.0).unwrap())
            .await
            .unwrap();
        store
            .save(AlertRule::new("drop", false, 8.0).unwrap())
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(
            config.rules(),
            &[
                AlertRule::new("crash", false, 30.0).unwrap(),
                AlertRule::new("drop", false, 8.0).unwrap(),
            ]
        );
        assert!(!config.is_enabled());
    }
}
