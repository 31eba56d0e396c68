use chrono::Utc;
use common::models::AlertRule;
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AlertRuleRow {
    pub name: String,
    pub enabled: bool,
    pub threshold_percent: f64,
}

pub struct AlertRuleRepository;

impl AlertRuleRepository {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<AlertRuleRow>, sqlx::Error> {
        sqlx::query_as::<_, AlertRuleRow>(
            r#"
                SELECT name, enabled, threshold_percent
                FROM alert_rules
                ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn upsert(pool: &SqlitePool, rule: &AlertRule) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
                INSERT INTO alert_rules (name, enabled, threshold_percent, updated_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(name) DO UPDATE SET
                    enabled = excluded.enabled,
                    threshold_percent = excluded.threshold_percent,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&rule.name)
        .bind(rule.enabled)
        .bind(rule.threshold_percent)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        Ok(())
    }
}
