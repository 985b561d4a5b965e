//! Root configuration model for a deployable facility

use crate::error::{AppError, Result};
use crate::models::{
    DeploymentConfig, FacilityConfig, FeatureFlag, FunctionalConfig, MobileConfig, SecurityConfig,
    SystemConfig,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Complete facility configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteConfig {
    pub facility: FacilityConfig,

    pub system: SystemConfig,

    #[serde(default)]
    pub functional: FunctionalConfig,

    pub deployment: DeploymentConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<MobileConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_flags: Option<BTreeMap<String, FeatureFlag>>,

    /// Site-specific keys the schema does not model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<BTreeMap<String, Value>>,

    pub metadata: ConfigMetadata,
}

/// Provenance of a configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMetadata {
    /// Semantic version of the document
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// User id of the author
    pub created_by: String,
    pub environment: String,
}

impl CompleteConfig {
    /// Convert to the dynamic JSON tree used by the merge step
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| AppError::internal(format!("Failed to serialize configuration: {}", e)))
    }

    /// Rebuild a typed configuration from a JSON tree
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| AppError::schema(format!("Configuration does not match schema: {}", e)))
    }

    /// Parse a configuration document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::parse(format!("Invalid configuration document: {}", e)))
    }

    /// Pretty JSON rendering of the configuration
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::internal(format!("Failed to serialize configuration: {}", e)))
    }
}
