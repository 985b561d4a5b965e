//! Environment-aware configuration resolution

use crate::config::merge::deep_merge;
use crate::config::overrides::environment_overrides;
use crate::error::{AppError, Result};
use crate::models::CompleteConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Known deployment environments, in tier order
pub const SUPPORTED_ENVIRONMENTS: [&str; 4] = ["development", "testing", "staging", "production"];

/// Deployment tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Testing,
        Environment::Staging,
        Environment::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = AppError;

    /// Exact lowercase names only; no aliases
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| AppError::unsupported_environment(s))
    }
}

/// Resolves a base configuration against a named environment.
///
/// Stateless; construct one wherever it is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentConfigManager;

impl EnvironmentConfigManager {
    pub fn new() -> Self {
        Self
    }

    /// Merge the environment's override table onto `base`.
    ///
    /// An unrecognised environment merges an empty override, so the result
    /// equals `base`. Errors only if the merged tree no longer fits the schema.
    pub fn merge_environment_config(&self, base: &CompleteConfig, environment: &str) -> Result<CompleteConfig> {
        let merged = self.merge_environment_value(&base.to_value()?, environment);
        CompleteConfig::from_value(merged).map_err(|e| {
            AppError::schema(format!("Merged '{}' configuration is invalid: {}", environment, e))
        })
    }

    /// Untyped variant of [`merge_environment_config`](Self::merge_environment_config); never fails
    pub fn merge_environment_value(&self, base: &Value, environment: &str) -> Value {
        deep_merge(base, &environment_overrides(environment))
    }

    pub fn is_valid_environment(&self, environment: &str) -> bool {
        SUPPORTED_ENVIRONMENTS.contains(&environment)
    }

    /// Fresh copy of the known environment names
    pub fn get_supported_environments(&self) -> Vec<String> {
        SUPPORTED_ENVIRONMENTS.iter().map(|env| env.to_string()).collect()
    }

    /// Override partial for `environment`, without merging
    pub fn get_environment_specific_config(&self, environment: &str) -> Result<Value> {
        if !self.is_valid_environment(environment) {
            return Err(AppError::unsupported_environment(environment));
        }
        Ok(environment_overrides(environment))
    }
}
