//! JSON formatter for CI gates and other machine consumers

use super::formatter::OutputFormatter;
use crate::{
    error::Result,
    models::{TestDetail, TestResult},
};
use serde_json::{json, Value};

/// Emits pretty JSON; every method yields a standalone document
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn message(level: &str, text: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({ "level": level, "message": text }))?)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({ "title": title }))?)
    }

    fn format_detail(&self, detail: &TestDetail) -> Result<String> {
        Ok(serde_json::to_string_pretty(detail)?)
    }

    fn format_summary(&self, result: &TestResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({
            "passed": result.passed,
            "failed": result.failed,
            "warnings": result.warnings,
            "deployable": result.is_deployable(),
        }))?)
    }

    /// The bare `TestResult` shape: `{passed, failed, warnings, details}`
    fn format_report(&self, _environment: &str, result: &TestResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn format_environments(&self, environments: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(environments)?)
    }

    fn format_overrides(&self, _environment: &str, overrides: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(overrides)?)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Self::message("error", error)
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Self::message("warning", warning)
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Self::message("success", message)
    }
}
