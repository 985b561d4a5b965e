//! Environment resolution integration tests
//!
//! Exercises the public resolution API against the reference facility
//! configuration in `tests/fixtures`.

use eversight_config::{
    config::{load_base_config, validate_schema},
    deep_merge, AppError, CompleteConfig, EnvironmentConfigManager, SUPPORTED_ENVIRONMENTS,
};
use serde_json::json;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/base_config.json")
}

fn base_config() -> CompleteConfig {
    load_base_config(&fixture_path()).unwrap()
}

#[test]
fn test_merge_purity() {
    let manager = EnvironmentConfigManager::new();
    let base = base_config();
    let before = base.clone();

    for environment in SUPPORTED_ENVIRONMENTS {
        let merged = manager.merge_environment_config(&base, environment).unwrap();
        assert_eq!(base, before, "{} mutated the base", environment);
        assert_ne!(merged.facility.name.as_ptr(), base.facility.name.as_ptr());
        assert_ne!(
            merged.system.database.primary.database.as_ptr(),
            base.system.database.primary.database.as_ptr()
        );
    }
}

#[test]
fn test_known_environment_completeness() {
    let manager = EnvironmentConfigManager::new();
    let supported = manager.get_supported_environments();

    assert_eq!(supported, vec!["development", "testing", "staging", "production"]);
    for candidate in ["development", "testing", "staging", "production", "prod", "dev", "", "Staging"] {
        assert_eq!(
            manager.is_valid_environment(candidate),
            supported.iter().any(|env| env == candidate),
            "membership mismatch for {:?}",
            candidate
        );
    }
}

#[test]
fn test_merge_identity_on_unknown_environment() {
    let base = base_config();
    let merged = EnvironmentConfigManager::new().merge_environment_config(&base, "unknown-env").unwrap();
    assert_eq!(merged, base);
}

#[test]
fn test_unsupported_environment_error() {
    let error = EnvironmentConfigManager::new().get_environment_specific_config("bogus").unwrap_err();

    assert!(matches!(error, AppError::UnsupportedEnvironment(_)));
    assert_eq!(error.to_string(), "Unsupported environment: bogus");
}

#[test]
fn test_deep_merge_array_replacement() {
    let merged = deep_merge(&json!({ "a": { "b": [1, 2, 3] } }), &json!({ "a": { "b": [9] } }));
    assert_eq!(merged, json!({ "a": { "b": [9] } }));
}

#[test]
fn test_deep_merge_nested_object_recursion() {
    let merged = deep_merge(&json!({ "a": { "x": 1, "y": 2 } }), &json!({ "a": { "y": 3, "z": 4 } }));
    assert_eq!(merged, json!({ "a": { "x": 1, "y": 3, "z": 4 } }));
}

#[test]
fn test_production_override_exact_values() {
    let production = EnvironmentConfigManager::new().get_environment_specific_config("production").unwrap();

    assert_eq!(production["system"]["auth"]["passwordPolicy"]["minLength"], 12);
    assert_eq!(production["system"]["auth"]["audit"]["retention"], 2555);
    assert_eq!(production["system"]["database"]["primary"]["backup"]["schedule"], "0 2 * * *");
}

#[test]
fn test_lookup_returns_fresh_partials() {
    let manager = EnvironmentConfigManager::new();
    let mut first = manager.get_environment_specific_config("staging").unwrap();
    first["system"]["auth"]["passwordPolicy"]["minLength"] = json!(1);

    let second = manager.get_environment_specific_config("staging").unwrap();
    assert_eq!(second["system"]["auth"]["passwordPolicy"]["minLength"], 8);
}

#[test]
fn test_resolved_environments_stay_schema_valid() {
    let manager = EnvironmentConfigManager::new();
    let base = base_config();

    for environment in SUPPORTED_ENVIRONMENTS {
        let merged = manager.merge_environment_config(&base, environment).unwrap();
        assert_eq!(validate_schema(&merged), Vec::<String>::new(), "{}", environment);
    }
}

#[test]
fn test_tiers_tighten_towards_production() {
    let manager = EnvironmentConfigManager::new();
    let base = base_config();

    let min_lengths: Vec<u32> = SUPPORTED_ENVIRONMENTS
        .iter()
        .map(|env| manager.merge_environment_config(&base, env).unwrap().system.auth.password_policy.min_length)
        .collect();

    // development, testing, staging, production
    assert_eq!(min_lengths, vec![6, 1, 8, 12]);
}
