//! Environment variable handling and .env file management

use crate::config::environment::Environment;
use crate::error::{AppError, Result};
use std::path::Path;

/// Deployment environment to resolve against
pub const ENV_ENVIRONMENT: &str = "EVERSIGHT_ENV";
/// Path of the base configuration document
pub const ENV_CONFIG_PATH: &str = "EVERSIGHT_CONFIG";
/// Connect timeout for the database connectivity check
pub const ENV_DB_TIMEOUT_MS: &str = "EVERSIGHT_DB_TIMEOUT_MS";
pub const ENV_ENABLE_COLOR: &str = "ENABLE_COLOR";

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        Self::load_env_file_from(Path::new(".env"), debug)
    }

    pub fn load_env_file_from(path: &Path, debug: bool) -> Result<()> {
        if path.exists() {
            dotenv::from_path(path)
                .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;

            if debug {
                println!("Loaded configuration from {}", path.display());
            }
        } else if debug {
            println!("No {} file found, using defaults and CLI arguments", path.display());
        }

        Ok(())
    }

    /// Resolve the deployment environment.
    ///
    /// Priority: explicit argument, then `EVERSIGHT_ENV`, then `development`.
    pub fn resolve_environment(explicit: Option<&str>) -> Result<Environment> {
        let from_process = std::env::var(ENV_ENVIRONMENT).ok();
        Self::resolve_environment_from(explicit, from_process.as_deref())
    }

    /// Same as [`resolve_environment`](Self::resolve_environment) with the process value supplied
    pub fn resolve_environment_from(explicit: Option<&str>, from_process: Option<&str>) -> Result<Environment> {
        match explicit.or(from_process).map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => name.parse(),
            None => Ok(Environment::Development),
        }
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            ENV_ENVIRONMENT => {
                value.trim().parse::<Environment>()?;
            }
            ENV_CONFIG_PATH => {
                let path = value.trim();
                if path.is_empty() {
                    return Err(AppError::config("EVERSIGHT_CONFIG must not be empty"));
                }
                if Path::new(path).extension().and_then(|ext| ext.to_str()) != Some("json") {
                    return Err(AppError::config(format!("EVERSIGHT_CONFIG must point to a .json file, got: {}", path)));
                }
            }
            ENV_DB_TIMEOUT_MS => {
                let timeout: u64 = value.trim().parse().map_err(|e| {
                    AppError::config(format!("Invalid EVERSIGHT_DB_TIMEOUT_MS value '{}': {}", value, e))
                })?;
                if timeout == 0 || timeout > 60_000 {
                    return Err(AppError::config(format!(
                        "EVERSIGHT_DB_TIMEOUT_MS must be between 1 and 60000, got: {}",
                        timeout
                    )));
                }
            }
            ENV_ENABLE_COLOR => {
                value
                    .trim()
                    .parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", value, e)))?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            (ENV_ENVIRONMENT, "Deployment environment to resolve against", "production"),
            (ENV_CONFIG_PATH, "Path to the base facility configuration", "./config/facility.json"),
            (ENV_DB_TIMEOUT_MS, "Database connect timeout in ms (1-60000)", "5000"),
            (ENV_ENABLE_COLOR, "Enable colored output", "true"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<24} {}\n", var, description));
            help.push_str(&format!("  {:<24} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values (environment: development)\n");

        help
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Vec<String> {
        Self::get_supported_env_vars()
            .into_iter()
            .filter_map(|(name, _, _)| {
                let value = std::env::var(name).ok()?;
                Self::validate_env_var(name, &value).err().map(|e| format!("Warning: {}", e))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolution_priority() {
        assert_eq!(
            EnvManager::resolve_environment_from(Some("staging"), Some("production")).unwrap(),
            Environment::Staging
        );
        assert_eq!(
            EnvManager::resolve_environment_from(None, Some("production")).unwrap(),
            Environment::Production
        );
        assert_eq!(EnvManager::resolve_environment_from(None, None).unwrap(), Environment::Development);
        assert_eq!(EnvManager::resolve_environment_from(None, Some("  ")).unwrap(), Environment::Development);
    }

    #[test]
    fn test_resolution_rejects_unknown() {
        let error = EnvManager::resolve_environment_from(Some("qa"), None).unwrap_err();
        assert!(matches!(error, AppError::UnsupportedEnvironment(_)));
        assert_eq!(error.to_string(), "Unsupported environment: qa");
    }

    #[test]
    fn test_env_manager_validate_env_var() {
        assert!(EnvManager::validate_env_var("EVERSIGHT_ENV", "testing").is_ok());
        assert!(EnvManager::validate_env_var("EVERSIGHT_CONFIG", "./facility.json").is_ok());
        assert!(EnvManager::validate_env_var("EVERSIGHT_DB_TIMEOUT_MS", "2500").is_ok());
        assert!(EnvManager::validate_env_var("ENABLE_COLOR", "false").is_ok());
        assert!(EnvManager::validate_env_var("UNRELATED", "anything").is_ok());

        assert!(EnvManager::validate_env_var("EVERSIGHT_ENV", "prod").is_err());
        assert!(EnvManager::validate_env_var("EVERSIGHT_CONFIG", "").is_err());
        assert!(EnvManager::validate_env_var("EVERSIGHT_CONFIG", "facility.yaml").is_err());
        assert!(EnvManager::validate_env_var("EVERSIGHT_DB_TIMEOUT_MS", "0").is_err());
        assert!(EnvManager::validate_env_var("EVERSIGHT_DB_TIMEOUT_MS", "60001").is_err());
        assert!(EnvManager::validate_env_var("EVERSIGHT_DB_TIMEOUT_MS", "soon").is_err());
        assert!(EnvManager::validate_env_var("ENABLE_COLOR", "maybe").is_err());
    }

    #[test]
    fn test_load_env_file_from() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# local overrides").unwrap();
        writeln!(file, "EVERSIGHT_DOTENV_LOAD_MARKER=loaded").unwrap();

        EnvManager::load_env_file_from(file.path(), false).unwrap();
        assert_eq!(std::env::var("EVERSIGHT_DOTENV_LOAD_MARKER").unwrap(), "loaded");

        assert!(EnvManager::load_env_file_from(Path::new("/nonexistent/.env"), false).is_ok());
    }

    #[test]
    fn test_display_env_help() {
        let help = EnvManager::display_env_help();
        assert!(help.contains("Supported Environment Variables:"));
        assert!(help.contains("EVERSIGHT_ENV"));
        assert!(help.contains("Configuration Priority"));
    }
}
