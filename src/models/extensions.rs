//! Optional sections: security policy, mobile app settings and feature flags

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityConfig {
    pub encryption: EncryptionPolicy,
    pub network: NetworkPolicy,
    pub compliance: CompliancePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionPolicy {
    pub at_rest: bool,
    pub in_transit: bool,
    /// Cipher name, e.g. `AES-256-GCM`
    pub algorithm: String,
    pub key_management: KeyManagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyManagement {
    Local,
    Kms,
    Hsm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPolicy {
    pub firewall: bool,
    pub intrusion_detection: bool,
    #[serde(default)]
    pub intrusion_prevention: bool,
    pub vpn: VpnPolicy,
    /// CIDR blocks allowed through the firewall
    #[serde(default)]
    pub allowed_ips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnPolicy {
    pub required: bool,
    #[serde(rename = "type")]
    pub vpn_type: VpnType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VpnType {
    Ssl,
    Ipsec,
    Wireguard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompliancePolicy {
    #[serde(default)]
    pub hipaa: bool,
    #[serde(default)]
    pub hitech: bool,
    #[serde(default)]
    pub gdpr: bool,
    #[serde(default)]
    pub pipeda: bool,
    /// Days
    pub data_retention: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileConfig {
    pub platforms: Vec<MobilePlatform>,
    pub features: MobileFeatures,
    /// Minutes
    pub session_timeout: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobilePlatform {
    Ios,
    Android,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileFeatures {
    pub push_notifications: bool,
    pub offline_mode: bool,
    pub biometric_login: bool,
}

/// A named feature flag with staged rollout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub enabled: bool,
    /// 0 to 100
    pub rollout_percentage: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<FlagCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Targeting rule: `attribute <operator> value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagCondition {
    pub attribute: String,
    pub operator: ConditionOperator,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    In,
    NotIn,
}
