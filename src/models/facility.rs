//! Facility metadata: what kind of site this is and which Guardian modules it runs

use serde::{Deserialize, Serialize};

/// Facility description and module enablement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityConfig {
    /// Display name of the facility
    pub name: String,

    #[serde(rename = "type")]
    pub facility_type: FacilityType,

    pub size: FacilitySize,

    #[serde(default)]
    pub specialties: Vec<String>,

    /// Regulatory regimes the facility operates under
    #[serde(default)]
    pub compliance: Vec<ComplianceRegime>,

    #[serde(default)]
    pub modules: ModuleFlags,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<FacilityLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<FacilityContact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    Hospital,
    Clinic,
    AssistedLiving,
    NursingHome,
    Rehabilitation,
}

impl FacilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Clinic => "clinic",
            Self::AssistedLiving => "assisted_living",
            Self::NursingHome => "nursing_home",
            Self::Rehabilitation => "rehabilitation",
        }
    }
}

/// Size class of the facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilitySize {
    Small,
    Medium,
    Large,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceRegime {
    Hipaa,
    Hitech,
    Gdpr,
    Pipeda,
}

/// Per-module enable flags. Each flag implies the matching `functional` block
/// should be present; only Guardian Protect is checked by the tester.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleFlags {
    pub guardian_protect: bool,
    pub guardian_insight: bool,
    pub guardian_care_pro: bool,
    pub guardian_care_track: bool,
}

impl ModuleFlags {
    /// Names of the enabled modules, in wire spelling
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            (self.guardian_protect, "guardianProtect"),
            (self.guardian_insight, "guardianInsight"),
            (self.guardian_care_pro, "guardianCarePro"),
            (self.guardian_care_track, "guardianCareTrack"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityLocation {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// IANA zone name, e.g. `America/New_York`
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityContact {
    pub administrator: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_phone: Option<String>,
}
