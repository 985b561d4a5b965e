//! Structural rules a typed configuration can still break

use crate::models::{CompleteConfig, DatabaseConnectionConfig};
use regex::Regex;
use std::sync::OnceLock;

/// One cron field: `*`, a number or range, optional step, comma lists
const CRON_FIELD_PATTERN: &str = r"^(\*|\d+(-\d+)?)(/\d+)?(,(\*|\d+(-\d+)?)(/\d+)?)*$";

fn cron_field_regex() -> Option<&'static Regex> {
    static CRON_FIELD: OnceLock<Option<Regex>> = OnceLock::new();
    CRON_FIELD.get_or_init(|| Regex::new(CRON_FIELD_PATTERN).ok()).as_ref()
}

/// Collect every schema violation; empty means the configuration is well-formed
pub fn validate_schema(config: &CompleteConfig) -> Vec<String> {
    let mut violations = Vec::new();

    if config.facility.name.trim().is_empty() {
        violations.push("facility.name must not be empty".to_string());
    }

    validate_connection("system.database.primary", &config.system.database.primary, &mut violations);
    if let Some(analytics) = &config.system.database.analytics {
        validate_connection("system.database.analytics", analytics, &mut violations);
    }

    let thresholds = &config.system.performance.monitoring.alert_thresholds;
    for (name, value) in [("cpu", thresholds.cpu), ("memory", thresholds.memory), ("disk", thresholds.disk)] {
        if !(0.0..=100.0).contains(&value) {
            violations.push(format!(
                "system.performance.monitoring.alertThresholds.{} must be between 0 and 100, got {}",
                name, value
            ));
        }
    }

    if !config.deployment.has_descriptor() {
        violations.push(format!(
            "deployment type '{}' requires a matching descriptor",
            config.deployment.deployment_type.as_str()
        ));
    }

    if let Some(flags) = &config.feature_flags {
        for (name, flag) in flags {
            if flag.rollout_percentage > 100 {
                violations.push(format!(
                    "featureFlags.{}.rolloutPercentage must be between 0 and 100, got {}",
                    name, flag.rollout_percentage
                ));
            }
        }
    }

    if let Err(e) = semver::Version::parse(&config.metadata.version) {
        violations.push(format!("metadata.version '{}' is not a semantic version: {}", config.metadata.version, e));
    }

    if config.metadata.updated_at < config.metadata.created_at {
        violations.push("metadata.updatedAt precedes metadata.createdAt".to_string());
    }

    violations
}

fn validate_connection(path: &str, connection: &DatabaseConnectionConfig, violations: &mut Vec<String>) {
    if connection.database.trim().is_empty() {
        violations.push(format!("{}.database must not be empty", path));
    }

    if connection.pool.max == 0 {
        violations.push(format!("{}.pool.max must be at least 1", path));
    }

    if connection.pool.min > connection.pool.max {
        violations.push(format!(
            "{}.pool.min ({}) exceeds pool.max ({})",
            path, connection.pool.min, connection.pool.max
        ));
    }

    if let Some(backup) = &connection.backup {
        if !is_valid_cron(&backup.schedule) {
            violations.push(format!("{}.backup.schedule '{}' is not a five-field cron expression", path, backup.schedule));
        }
    }
}

/// Five whitespace-separated cron fields
pub fn is_valid_cron(schedule: &str) -> bool {
    let fields: Vec<&str> = schedule.split_whitespace().collect();
    if fields.len() != 5 {
        return false;
    }

    match cron_field_regex() {
        Some(pattern) => fields.iter().all(|field| pattern.is_match(field)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BackupConfig, FeatureFlag};
    use std::collections::BTreeMap;

    fn base_config() -> CompleteConfig {
        CompleteConfig::from_json_str(include_str!("../../tests/fixtures/base_config.json")).unwrap()
    }

    #[test]
    fn test_fixture_has_no_violations() {
        assert!(validate_schema(&base_config()).is_empty());
    }

    #[test]
    fn test_cron_expressions() {
        assert!(is_valid_cron("0 2 * * *"));
        assert!(is_valid_cron("*/15 0-6 1,15 * 1-5"));
        assert!(!is_valid_cron("0 2 * *"));
        assert!(!is_valid_cron("daily"));
        assert!(!is_valid_cron("0 2 * * MON?"));
    }

    #[test]
    fn test_pool_bounds_violation() {
        let mut config = base_config();
        config.system.database.primary.pool.min = 30;
        config.system.database.primary.pool.max = 10;

        let violations = validate_schema(&config);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("pool.min (30) exceeds pool.max (10)"));
    }

    #[test]
    fn test_bad_backup_schedule() {
        let mut config = base_config();
        config.system.database.primary.backup = Some(BackupConfig {
            enabled: true,
            schedule: "every night".to_string(),
            retention: 30,
        });

        let violations = validate_schema(&config);
        assert!(violations.iter().any(|v| v.contains("backup.schedule")));
    }

    #[test]
    fn test_version_and_rollout_violations() {
        let mut config = base_config();
        config.metadata.version = "v2".to_string();
        let mut flags = BTreeMap::new();
        flags.insert(
            "fallPrediction".to_string(),
            FeatureFlag {
                enabled: true,
                rollout_percentage: 150,
                conditions: Vec::new(),
                description: None,
            },
        );
        config.feature_flags = Some(flags);

        let violations = validate_schema(&config);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.contains("metadata.version")));
        assert!(violations.iter().any(|v| v.contains("featureFlags.fallPrediction")));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let mut config = base_config();
        config.system.performance.monitoring.alert_thresholds.disk = 120.0;

        let violations = validate_schema(&config);
        assert!(violations.iter().any(|v| v.contains("alertThresholds.disk")));
    }

    #[test]
    fn test_missing_deployment_descriptor() {
        let mut config = base_config();
        config.deployment.cloud = None;

        let violations = validate_schema(&config);
        assert!(violations.iter().any(|v| v.contains("deployment type 'cloud'")));
    }
}
