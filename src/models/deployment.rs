//! Deployment target descriptor

use serde::{Deserialize, Serialize};

/// Where the system runs. `type` selects which nested descriptor applies;
/// the others are normally absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    #[serde(rename = "type")]
    pub deployment_type: DeploymentType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudDeployment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_premise: Option<OnPremiseDeployment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid: Option<HybridDeployment>,
}

impl DeploymentConfig {
    /// Whether the descriptor for the selected type is present
    pub fn has_descriptor(&self) -> bool {
        match self.deployment_type {
            DeploymentType::Cloud => self.cloud.is_some(),
            DeploymentType::OnPremise => self.on_premise.is_some(),
            DeploymentType::Hybrid => self.hybrid.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentType {
    Cloud,
    OnPremise,
    Hybrid,
}

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::OnPremise => "on-premise",
            Self::Hybrid => "hybrid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudDeployment {
    pub provider: CloudProvider,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<AutoScaling>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaling {
    pub enabled: bool,
    pub min_instances: u32,
    pub max_instances: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPremiseDeployment {
    /// Host names of the application servers
    pub servers: Vec<String>,
    #[serde(default)]
    pub load_balancer: bool,
    #[serde(default)]
    pub high_availability: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridDeployment {
    pub cloud: CloudDeployment,
    pub on_premise: OnPremiseDeployment,
    /// Where patient data must physically live, e.g. `on-premise`
    pub data_residency: String,
}
