//! EverSight Configuration Resolver
//!
//! Resolves a facility's base configuration against a deployment environment
//! (development, testing, staging, production) by deep-merging a fixed
//! override table, then runs a battery of pre-deployment checks that yield a
//! pass/fail/warning report.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use config::{
    deep_merge, ConfigurationTester, DatabaseConnection, DatabaseConnector, Environment,
    EnvironmentConfigManager, StubConnector, TimeoutConnector, SUPPORTED_ENVIRONMENTS,
};
pub use error::{AppError, Result};
pub use models::{CompleteConfig, TestDetail, TestResult, TestStatus};
pub use output::{OutputFormat, OutputFormatter, OutputFormatterFactory};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Values stamped in by the build script
pub mod build_info {
    pub const BUILD_TIME: &str = env!("BUILD_TIME");
    pub const GIT_COMMIT: &str = env!("GIT_COMMIT");
    pub const TARGET_TRIPLE: &str = env!("TARGET_TRIPLE");

    /// One-line description for `--debug` output
    pub fn describe() -> String {
        format!(
            "{} v{} ({} {}, built {})",
            super::PKG_NAME,
            super::VERSION,
            GIT_COMMIT,
            TARGET_TRIPLE,
            BUILD_TIME
        )
    }
}
