//! Configuration schema and report models

pub mod config;
pub mod deployment;
pub mod extensions;
pub mod facility;
pub mod functional;
pub mod report;
pub mod system;

// Re-export main model types
pub use config::{CompleteConfig, ConfigMetadata};
pub use deployment::{
    AutoScaling, CloudDeployment, CloudProvider, DeploymentConfig, DeploymentType,
    HybridDeployment, OnPremiseDeployment,
};
pub use extensions::{
    CompliancePolicy, ConditionOperator, EncryptionPolicy, FeatureFlag, FlagCondition,
    KeyManagement, MobileConfig, MobileFeatures, MobilePlatform, NetworkPolicy, SecurityConfig,
    VpnPolicy, VpnType,
};
pub use facility::{
    ComplianceRegime, FacilityConfig, FacilityContact, FacilityLocation, FacilitySize,
    FacilityType, ModuleFlags,
};
pub use functional::{
    AlertSettings, AlertSeverity, AnalyticsSettings, CarePlanSettings, DeviceSettings,
    EscalationRule, FunctionalConfig, GuardianCareProConfig, GuardianCareTrackConfig,
    GuardianInsightConfig, GuardianProtectConfig, InsightModels, Range, StaffingSettings,
    VitalsThresholds,
};
pub use report::{TestDetail, TestResult, TestStatus};
pub use system::{
    AlertThresholds, AuditLevel, AuditPolicy, AuthConfig, AuthProvider, BackupConfig,
    CacheProvider, CachingConfig, CompressionConfig, DatabaseConfig, DatabaseConnectionConfig,
    DatabaseEngine, MfaMethod, MfaPolicy, MonitoringConfig, PasswordPolicy, PerformanceConfig,
    PoolConfig, RateLimitConfig, SessionPolicy, SystemConfig,
};
