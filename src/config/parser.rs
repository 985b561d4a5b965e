//! Loading base configuration documents and writing resolved ones

use crate::{
    config::environment::{Environment, EnvironmentConfigManager},
    error::{AppError, ErrorContext, Result},
    models::CompleteConfig,
};
use std::path::Path;

/// Read and deserialize a JSON `CompleteConfig` from disk
pub fn load_base_config(path: &Path) -> Result<CompleteConfig> {
    if !path.exists() {
        return Err(AppError::config(format!("Configuration file not found: {}", path.display())));
    }

    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    CompleteConfig::from_json_str(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
}

/// Load `path` and resolve it against `environment`
pub fn load_resolved_config(path: &Path, environment: Environment) -> Result<CompleteConfig> {
    let base = load_base_config(path)?;
    EnvironmentConfigManager::new().merge_environment_config(&base, environment.as_str())
}

/// Write a configuration as pretty JSON
pub fn write_config(path: &Path, config: &CompleteConfig) -> Result<()> {
    let json = config.to_json_pretty()?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &CompleteConfig) -> String {
    let mut summary = Vec::new();

    summary.push(format!(
        "Facility: {} ({}, {:?})",
        config.facility.name,
        config.facility.facility_type.as_str(),
        config.facility.size
    ));
    summary.push(format!("Modules: {}", config.facility.modules.enabled().join(", ")));
    summary.push(format!("Environment: {}", config.metadata.environment));
    summary.push(format!("Primary Database: {}", config.system.database.primary.display_target()));
    summary.push(format!(
        "Auth Provider: {}",
        config.system.auth.provider.map(|p| p.as_str()).unwrap_or("none")
    ));
    summary.push(format!("Deployment: {}", config.deployment.deployment_type.as_str()));
    summary.push(format!("Version: {}", config.metadata.version));

    summary.join("\n")
}
