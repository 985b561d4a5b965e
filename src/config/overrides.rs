//! Fixed per-environment override partials
//!
//! Each branch is a partial `CompleteConfig` in wire (camelCase) form. The
//! values here are contractual; change them only together with the tests.

use serde_json::{json, Value};

/// Override partial for `environment`; anything unrecognised yields `{}`
pub fn environment_overrides(environment: &str) -> Value {
    match environment {
        "development" => development(),
        "testing" => testing(),
        "staging" => staging(),
        "production" => production(),
        _ => json!({}),
    }
}

fn development() -> Value {
    json!({
        "system": {
            "database": {
                "primary": {
                    "type": "sqlite",
                    "database": "./data/eversight_dev.db",
                    "pool": { "min": 1, "max": 5, "idle": 10000 }
                }
            },
            "auth": {
                "session": { "duration": 480, "refreshToken": true, "multiSession": true },
                "passwordPolicy": {
                    "minLength": 6,
                    "requireUppercase": false,
                    "requireLowercase": true,
                    "requireNumbers": false,
                    "requireSymbols": false,
                    "preventReuse": 0,
                    "expirationDays": 0
                },
                "mfa": { "enabled": false, "methods": [], "required": false },
                "audit": { "enabled": true, "logLevel": "basic", "retention": 30 }
            },
            "performance": {
                "caching": { "enabled": false, "provider": "memory", "ttl": 60, "maxSize": 100 },
                "monitoring": {
                    "enabled": true,
                    "metrics": ["cpu", "memory"],
                    "alertThresholds": { "cpu": 90, "memory": 90, "disk": 95 }
                }
            }
        },
        "functional": {
            "guardianProtect": {
                "devices": { "heartbeatInterval": 60, "offlineThreshold": 600, "autoDiscovery": true },
                "alerts": { "retentionPeriod": 7, "autoEscalate": false }
            }
        }
    })
}

fn testing() -> Value {
    json!({
        "system": {
            "database": {
                "primary": {
                    "type": "sqlite",
                    "database": ":memory:",
                    "pool": { "min": 1, "max": 1, "idle": 1000 }
                }
            },
            "auth": {
                "session": { "duration": 5, "refreshToken": false, "multiSession": true },
                "passwordPolicy": {
                    "minLength": 1,
                    "requireUppercase": false,
                    "requireLowercase": false,
                    "requireNumbers": false,
                    "requireSymbols": false,
                    "preventReuse": 0,
                    "expirationDays": 0
                },
                "mfa": { "enabled": false, "methods": [], "required": false },
                "audit": { "enabled": false, "logLevel": "basic", "retention": 1 }
            },
            "performance": {
                "caching": { "enabled": false, "provider": "memory", "ttl": 1, "maxSize": 10 },
                "monitoring": {
                    "enabled": false,
                    "metrics": [],
                    "alertThresholds": { "cpu": 100, "memory": 100, "disk": 100 }
                }
            }
        }
    })
}

fn staging() -> Value {
    json!({
        "system": {
            "database": {
                "primary": {
                    "type": "postgresql",
                    "ssl": true,
                    "pool": { "min": 5, "max": 20, "idle": 30000 }
                }
            },
            "auth": {
                "session": { "duration": 60, "refreshToken": true, "multiSession": false },
                "passwordPolicy": {
                    "minLength": 8,
                    "requireUppercase": true,
                    "requireLowercase": true,
                    "requireNumbers": true,
                    "requireSymbols": false,
                    "preventReuse": 3,
                    "expirationDays": 90
                },
                "mfa": { "enabled": true, "methods": ["totp"], "required": false },
                "audit": { "enabled": true, "logLevel": "detailed", "retention": 90 }
            },
            "performance": {
                "caching": { "enabled": true, "provider": "memory", "ttl": 1800, "maxSize": 500 },
                "rateLimit": { "windowMs": 900000, "max": 200, "skipSuccessfulRequests": false },
                "monitoring": {
                    "enabled": true,
                    "metrics": ["cpu", "memory", "disk", "response_time"],
                    "alertThresholds": { "cpu": 80, "memory": 85, "disk": 90 }
                }
            }
        }
    })
}

fn production() -> Value {
    json!({
        "system": {
            "database": {
                "primary": {
                    "type": "postgresql",
                    "ssl": true,
                    "pool": { "min": 10, "max": 50, "idle": 60000 },
                    "backup": { "enabled": true, "schedule": "0 2 * * *", "retention": 365 }
                }
            },
            "auth": {
                "session": { "duration": 30, "refreshToken": true, "multiSession": false },
                "passwordPolicy": {
                    "minLength": 12,
                    "requireUppercase": true,
                    "requireLowercase": true,
                    "requireNumbers": true,
                    "requireSymbols": true,
                    "preventReuse": 12,
                    "expirationDays": 60
                },
                "mfa": { "enabled": true, "methods": ["totp", "sms"], "required": true },
                // 7 years, HIPAA documentation retention
                "audit": { "enabled": true, "logLevel": "comprehensive", "retention": 2555 }
            },
            "performance": {
                "caching": { "enabled": true, "provider": "redis", "ttl": 3600, "maxSize": 2048 },
                "rateLimit": { "windowMs": 900000, "max": 100, "skipSuccessfulRequests": false },
                "compression": { "level": 6, "threshold": 1024 },
                "monitoring": {
                    "enabled": true,
                    "metrics": ["cpu", "memory", "disk", "response_time", "error_rate", "throughput"],
                    "alertThresholds": { "cpu": 70, "memory": 75, "disk": 80 }
                }
            }
        },
        "security": {
            "encryption": {
                "atRest": true,
                "inTransit": true,
                "algorithm": "AES-256-GCM",
                "keyManagement": "hsm"
            },
            "network": {
                "firewall": true,
                "intrusionDetection": true,
                "intrusionPrevention": true,
                "vpn": { "required": true, "type": "ssl" }
            },
            "compliance": { "hipaa": true, "gdpr": true, "dataRetention": 2555 }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_environment_is_empty() {
        assert_eq!(environment_overrides("qa"), json!({}));
        assert_eq!(environment_overrides("Production"), json!({}));
        assert_eq!(environment_overrides(""), json!({}));
    }

    #[test]
    fn test_production_contract_values() {
        let production = environment_overrides("production");
        let auth = &production["system"]["auth"];

        assert_eq!(auth["passwordPolicy"]["minLength"], 12);
        assert_eq!(auth["audit"]["retention"], 2555);
        assert_eq!(auth["mfa"]["methods"], json!(["totp", "sms"]));
        assert_eq!(production["system"]["database"]["primary"]["backup"]["schedule"], "0 2 * * *");
        assert_eq!(production["system"]["database"]["primary"]["backup"]["retention"], 365);
        assert_eq!(production["security"]["encryption"]["algorithm"], "AES-256-GCM");
        assert_eq!(production["security"]["compliance"]["dataRetention"], 2555);
    }

    #[test]
    fn test_staging_contract_values() {
        let staging = environment_overrides("staging");
        let policy = &staging["system"]["auth"]["passwordPolicy"];

        assert_eq!(policy["minLength"], 8);
        assert_eq!(policy["requireSymbols"], false);
        assert_eq!(policy["expirationDays"], 90);
        assert_eq!(policy["preventReuse"], 3);
        assert_eq!(staging["system"]["auth"]["mfa"]["required"], false);
        assert_eq!(staging["system"]["performance"]["caching"]["ttl"], 1800);
        assert_eq!(staging["system"]["performance"]["rateLimit"]["max"], 200);
    }

    #[test]
    fn test_testing_is_minimal() {
        let testing = environment_overrides("testing");
        assert_eq!(testing["system"]["database"]["primary"]["database"], ":memory:");
        assert_eq!(testing["system"]["auth"]["audit"]["enabled"], false);
        assert_eq!(testing["system"]["performance"]["monitoring"]["enabled"], false);
    }

    #[test]
    fn test_development_is_relaxed() {
        let development = environment_overrides("development");
        assert_eq!(development["system"]["auth"]["passwordPolicy"]["minLength"], 6);
        assert_eq!(development["system"]["auth"]["mfa"]["enabled"], false);
        assert_eq!(development["system"]["performance"]["caching"]["enabled"], false);
        assert!(development["functional"]["guardianProtect"].is_object());
    }
}
