//! Module-specific settings for the Guardian product family
//!
//! Every block fills missing fields from its `Default`, so an environment
//! override that only tunes a few timings still produces a complete block.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_protect: Option<GuardianProtectConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_insight: Option<GuardianInsightConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_care_pro: Option<GuardianCareProConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_care_track: Option<GuardianCareTrackConfig>,
}

/// Guardian Protect: device fleet and alert handling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardianProtectConfig {
    pub devices: DeviceSettings,
    pub alerts: AlertSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceSettings {
    pub max_devices: u32,
    /// Seconds between device heartbeats
    pub heartbeat_interval: u32,
    /// Seconds without a heartbeat before a device is considered offline
    pub offline_threshold: u32,
    pub auto_discovery: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            max_devices: 100,
            heartbeat_interval: 30,
            offline_threshold: 120,
            auto_discovery: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertSettings {
    /// Days
    pub retention_period: u32,
    pub auto_escalate: bool,
    pub escalation_rules: Vec<EscalationRule>,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            retention_period: 30,
            auto_escalate: true,
            escalation_rules: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationRule {
    pub severity: AlertSeverity,
    /// Minutes an alert may stay unacknowledged before escalating
    pub delay_minutes: u32,
    /// Roles notified on escalation
    pub notify: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Guardian Insight: AI analytics pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardianInsightConfig {
    pub analytics: AnalyticsSettings,
    pub models: InsightModels,
    /// 0.0 to 1.0; insights below this confidence are suppressed
    pub confidence_threshold: f64,
}

impl Default for GuardianInsightConfig {
    fn default() -> Self {
        Self {
            analytics: AnalyticsSettings::default(),
            models: InsightModels::default(),
            confidence_threshold: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSettings {
    pub batch_size: u32,
    /// Minutes
    pub processing_interval: u32,
    /// Days
    pub retention_days: u32,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            batch_size: 500,
            processing_interval: 15,
            retention_days: 365,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightModels {
    pub fall_detection: bool,
    pub behavior_analysis: bool,
    pub predictive_health: bool,
}

/// Guardian CarePro: staffing and care plans
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardianCareProConfig {
    pub staffing: StaffingSettings,
    pub care_plans: CarePlanSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffingSettings {
    /// Minimum staff per resident
    pub minimum_ratio: f64,
    /// Hours
    pub shift_duration: u32,
}

impl Default for StaffingSettings {
    fn default() -> Self {
        Self {
            minimum_ratio: 0.125,
            shift_duration: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarePlanSettings {
    /// Days
    pub review_interval: u32,
    pub require_signoff: bool,
}

impl Default for CarePlanSettings {
    fn default() -> Self {
        Self {
            review_interval: 90,
            require_signoff: true,
        }
    }
}

/// Guardian CareTrack: vitals monitoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardianCareTrackConfig {
    pub vitals: VitalsThresholds,
    /// Minutes between scheduled vitals checks
    pub check_interval: u32,
}

impl Default for GuardianCareTrackConfig {
    fn default() -> Self {
        Self {
            vitals: VitalsThresholds::default(),
            check_interval: 240,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VitalsThresholds {
    /// Beats per minute
    pub heart_rate: Range,
    /// mmHg
    pub blood_pressure_systolic: Range,
    /// Degrees Celsius
    pub temperature: Range,
    /// Percent SpO2 below which an alert fires
    pub oxygen_saturation_min: f64,
}

impl Default for VitalsThresholds {
    fn default() -> Self {
        Self {
            heart_rate: Range { min: 50.0, max: 110.0 },
            blood_pressure_systolic: Range { min: 90.0, max: 160.0 },
            temperature: Range { min: 35.5, max: 38.0 },
            oxygen_saturation_min: 92.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
