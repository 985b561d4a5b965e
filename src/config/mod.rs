//! Configuration resolution and testing

pub mod database;
pub mod env;
pub mod environment;
pub mod merge;
pub mod overrides;
pub mod parser;
pub mod schema;
pub mod tester;

// Re-export main functionality
pub use database::{DatabaseConnection, DatabaseConnector, StubConnector, TimeoutConnector};
pub use env::EnvManager;
pub use environment::{Environment, EnvironmentConfigManager, SUPPORTED_ENVIRONMENTS};
pub use merge::deep_merge;
pub use overrides::environment_overrides;
pub use parser::{display_config_summary, load_base_config, load_resolved_config, write_config};
pub use schema::validate_schema;
pub use tester::ConfigurationTester;
