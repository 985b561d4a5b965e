//! Pre-deployment checks over a resolved configuration

use crate::config::database::{DatabaseConnector, StubConnector};
use crate::config::schema::validate_schema;
use crate::error::Result;
use crate::logging::{LogLevel, Logger};
use crate::models::{CompleteConfig, DatabaseConnectionConfig, TestResult};
use std::sync::Arc;

const MIN_PASSWORD_LENGTH: u32 = 8;

/// Probe issued once the connection is open
const CONNECTIVITY_QUERY: &str = "SELECT 1";

/// Runs the fixed check battery and tallies a [`TestResult`].
///
/// Checks run in this order: schema validation, database connectivity,
/// authentication provider, performance configuration, GuardianProtect
/// configuration (only when the module is enabled) and finally the security
/// policy checks. The first four always record exactly one entry. The
/// security checks record an entry only when they find a problem.
pub struct ConfigurationTester {
    connector: Arc<dyn DatabaseConnector>,
    logger: Option<Logger>,
}

impl Default for ConfigurationTester {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationTester {
    /// Tester backed by the always-succeeding [`StubConnector`]
    pub fn new() -> Self {
        Self::with_connector(Arc::new(StubConnector))
    }

    pub fn with_connector(connector: Arc<dyn DatabaseConnector>) -> Self {
        Self { connector, logger: None }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Run every check. Never fails; problems become `failed` or `warning` entries.
    pub async fn test_configuration(&self, config: &CompleteConfig) -> TestResult {
        let mut result = TestResult::new();
        let operation = match &self.logger {
            Some(logger) => Some(logger.start_operation("test_configuration").await),
            None => None,
        };

        self.test_schema(config, &mut result);
        self.test_database_connectivity(&config.system.database.primary, &mut result).await;
        self.test_auth_provider(config, &mut result);
        self.test_performance(config, &mut result);

        if config.facility.modules.guardian_protect {
            self.test_guardian_protect(config, &mut result);
        }

        self.test_security(config, &mut result);

        if let (Some(logger), Some(id)) = (&self.logger, operation) {
            if logger.would_log(LogLevel::Debug) {
                for detail in &result.details {
                    logger.debug("Configuration check complete").correlation_id(&id).check(detail).log().await;
                }
            }
            logger
                .info(&format!("Configuration test finished: {}", result.summary()))
                .correlation_id(&id)
                .field("environment", &config.metadata.environment)
                .log()
                .await;
            logger.end_operation(&id, "test_configuration", result.is_deployable()).await;
        }

        result
    }

    fn test_schema(&self, config: &CompleteConfig, result: &mut TestResult) {
        let violations = validate_schema(config);
        if violations.is_empty() {
            result.pass("Schema Validation", "Configuration schema is valid");
        } else {
            result.fail("Schema Validation", violations.join("; "));
        }
    }

    async fn test_database_connectivity(&self, primary: &DatabaseConnectionConfig, result: &mut TestResult) {
        match self.probe_database(primary).await {
            Ok(()) => result.pass("Database Connectivity", "Database connection successful"),
            Err(e) => result.fail("Database Connectivity", format!("Database connection failed: {}", e)),
        }
    }

    async fn probe_database(&self, primary: &DatabaseConnectionConfig) -> Result<()> {
        let mut connection = self.connector.connect(primary).await?;
        connection.query(CONNECTIVITY_QUERY).await?;
        connection.close().await
    }

    fn test_auth_provider(&self, config: &CompleteConfig, result: &mut TestResult) {
        match config.system.auth.provider {
            Some(provider) => result.pass(
                "Authentication Provider",
                format!("Authentication provider configured: {}", provider.as_str()),
            ),
            None => result.fail("Authentication Provider", "Authentication provider not configured"),
        }
    }

    fn test_performance(&self, config: &CompleteConfig, result: &mut TestResult) {
        match config.system.performance.max_connections {
            Some(max) if max > 0 => result.pass("Performance Configuration", "Performance configuration is valid"),
            _ => result.fail(
                "Performance Configuration",
                "Invalid performance configuration: maxConnections must be a positive number",
            ),
        }
    }

    fn test_guardian_protect(&self, config: &CompleteConfig, result: &mut TestResult) {
        if config.functional.guardian_protect.is_some() {
            result.pass("GuardianProtect Configuration", "GuardianProtect configuration is valid");
        } else {
            result.fail("GuardianProtect Configuration", "GuardianProtect module is enabled but not configured");
        }
    }

    fn test_security(&self, config: &CompleteConfig, result: &mut TestResult) {
        let auth = &config.system.auth;

        if auth.password_policy.min_length < MIN_PASSWORD_LENGTH {
            result.warn("Password Policy", "Password minimum length is less than 8 characters");
        }

        if !auth.mfa.enabled {
            result.warn("Multi-Factor Authentication", "MFA is not enabled");
        }

        if !auth.audit.enabled {
            result.fail(
                "Audit Logging",
                "Audit logging is disabled; it is required for healthcare compliance",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::DatabaseConnection;
    use crate::error::AppError;
    use crate::models::TestStatus;
    use async_trait::async_trait;

    fn base_config() -> CompleteConfig {
        CompleteConfig::from_json_str(include_str!("../../tests/fixtures/base_config.json")).unwrap()
    }

    struct RefusingConnector;

    #[async_trait]
    impl DatabaseConnector for RefusingConnector {
        async fn connect(&self, config: &DatabaseConnectionConfig) -> Result<Box<dyn DatabaseConnection>> {
            Err(AppError::database(format!("connection refused by {}", config.display_target())))
        }
    }

    struct FailingQueryConnector;

    struct FailingQueryConnection;

    #[async_trait]
    impl DatabaseConnector for FailingQueryConnector {
        async fn connect(&self, _config: &DatabaseConnectionConfig) -> Result<Box<dyn DatabaseConnection>> {
            Ok(Box::new(FailingQueryConnection))
        }
    }

    #[async_trait]
    impl DatabaseConnection for FailingQueryConnection {
        async fn query(&mut self, sql: &str) -> Result<()> {
            Err(AppError::database(format!("relation missing while running {}", sql)))
        }

        async fn close(self: Box<Self>) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_clean_config_passes_everything() {
        let result = ConfigurationTester::new().test_configuration(&base_config()).await;

        assert_eq!(result.passed, 5);
        assert_eq!(result.failed, 0);
        assert_eq!(result.warnings, 0);
        let names: Vec<&str> = result.details.iter().map(|d| d.test.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Schema Validation",
                "Database Connectivity",
                "Authentication Provider",
                "Performance Configuration",
                "GuardianProtect Configuration",
            ]
        );
        assert_eq!(
            result.detail("Authentication Provider").unwrap().message,
            "Authentication provider configured: local"
        );
    }

    #[tokio::test]
    async fn test_guardian_protect_skipped_when_module_disabled() {
        let mut config = base_config();
        config.facility.modules.guardian_protect = false;
        config.functional.guardian_protect = None;

        let result = ConfigurationTester::new().test_configuration(&config).await;
        assert_eq!(result.total(), 4);
        assert!(result.detail("GuardianProtect Configuration").is_none());
    }

    #[tokio::test]
    async fn test_guardian_protect_enabled_but_missing() {
        let mut config = base_config();
        config.functional.guardian_protect = None;

        let result = ConfigurationTester::new().test_configuration(&config).await;
        let detail = result.detail("GuardianProtect Configuration").unwrap();
        assert_eq!(detail.status, TestStatus::Failed);
        assert_eq!(detail.message, "GuardianProtect module is enabled but not configured");
    }

    #[tokio::test]
    async fn test_refused_connection_is_recorded() {
        let tester = ConfigurationTester::with_connector(Arc::new(RefusingConnector));
        let result = tester.test_configuration(&base_config()).await;

        let detail = result.detail("Database Connectivity").unwrap();
        assert_eq!(detail.status, TestStatus::Failed);
        assert!(detail.message.starts_with("Database connection failed: "));
        assert!(detail.message.contains("connection refused by postgresql://db.maplegrove.internal:5432/eversight"));
        assert_eq!(result.failed, 1);
        assert!(!result.is_deployable());
    }

    #[tokio::test]
    async fn test_failing_query_is_recorded() {
        let tester = ConfigurationTester::with_connector(Arc::new(FailingQueryConnector));
        let result = tester.test_configuration(&base_config()).await;

        let detail = result.detail("Database Connectivity").unwrap();
        assert_eq!(detail.status, TestStatus::Failed);
        assert!(detail.message.contains("relation missing while running SELECT 1"));
    }

    #[tokio::test]
    async fn test_missing_provider_and_max_connections() {
        let mut config = base_config();
        config.system.auth.provider = None;
        config.system.performance.max_connections = Some(0);

        let result = ConfigurationTester::new().test_configuration(&config).await;
        assert_eq!(result.failed, 2);
        assert_eq!(
            result.detail("Authentication Provider").unwrap().message,
            "Authentication provider not configured"
        );
        assert_eq!(
            result.detail("Performance Configuration").unwrap().message,
            "Invalid performance configuration: maxConnections must be a positive number"
        );

        config.system.performance.max_connections = None;
        let result = ConfigurationTester::new().test_configuration(&config).await;
        assert_eq!(result.detail("Performance Configuration").unwrap().status, TestStatus::Failed);
    }

    #[tokio::test]
    async fn test_security_entries_only_on_problems() {
        let mut config = base_config();
        config.system.auth.password_policy.min_length = 6;
        config.system.auth.mfa.enabled = false;
        config.system.auth.audit.enabled = false;

        let result = ConfigurationTester::new().test_configuration(&config).await;
        assert_eq!(result.total(), 8);
        assert_eq!(result.warnings, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.detail("Password Policy").unwrap().status, TestStatus::Warning);
        assert_eq!(result.detail("Multi-Factor Authentication").unwrap().message, "MFA is not enabled");
        assert!(result
            .detail("Audit Logging")
            .unwrap()
            .message
            .contains("required for healthcare compliance"));
    }

    #[tokio::test]
    async fn test_min_length_boundary() {
        let mut config = base_config();
        config.system.auth.password_policy.min_length = 8;
        let result = ConfigurationTester::new().test_configuration(&config).await;
        assert!(result.detail("Password Policy").is_none());

        config.system.auth.password_policy.min_length = 7;
        let result = ConfigurationTester::new().test_configuration(&config).await;
        assert!(result.detail("Password Policy").is_some());
    }

    #[tokio::test]
    async fn test_schema_violations_joined() {
        let mut config = base_config();
        config.metadata.version = "latest".to_string();
        config.system.database.primary.pool.max = 0;

        let result = ConfigurationTester::new().test_configuration(&config).await;
        let detail = result.detail("Schema Validation").unwrap();
        assert_eq!(detail.status, TestStatus::Failed);
        assert!(detail.message.contains("; "));
        assert!(detail.message.contains("metadata.version"));
        assert!(detail.message.contains("pool.max must be at least 1"));
    }

    #[tokio::test]
    async fn test_with_logger_does_not_change_result() {
        let mut logger = Logger::new("TESTER");
        logger.set_level(crate::logging::LogLevel::Fatal);

        let tester = ConfigurationTester::new().with_logger(logger);
        let result = tester.test_configuration(&base_config()).await;
        assert_eq!(result.passed, 5);
    }
}
