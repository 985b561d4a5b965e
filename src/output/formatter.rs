//! Core formatting traits and implementations
//!
//! This module defines the output formatting interface and provides
//! a plain text implementation.

use crate::{
    error::{AppError, Result},
    models::{TestDetail, TestResult, TestStatus},
};
use serde_json::Value;
use std::fmt::Write as _;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format a single check outcome
    fn format_detail(&self, detail: &TestDetail) -> Result<String>;

    /// Format the counters footer
    fn format_summary(&self, result: &TestResult) -> Result<String>;

    /// Format a whole test report for one environment
    fn format_report(&self, environment: &str, result: &TestResult) -> Result<String>;

    /// Format the list of supported environments
    fn format_environments(&self, environments: &[String]) -> Result<String>;

    /// Format the override partial of an environment
    fn format_overrides(&self, environment: &str, overrides: &Value) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;

    /// Format success messages
    fn format_success(&self, message: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Show passed checks as well as problems
    pub verbose_mode: bool,
    /// Width of header borders
    pub max_width: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
            max_width: 80,
        }
    }
}

pub(crate) fn fmt_err(context: &str) -> impl Fn(std::fmt::Error) -> AppError + '_ {
    move |e| AppError::io(format!("Failed to format {}: {}", context, e))
}

pub(crate) fn status_label(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Passed => "PASS",
        TestStatus::Failed => "FAIL",
        TestStatus::Warning => "WARN",
    }
}

/// Problems always show; passed checks only in verbose mode
pub(crate) fn visible_details<'a>(result: &'a TestResult, verbose: bool) -> impl Iterator<Item = &'a TestDetail> {
    result
        .details
        .iter()
        .filter(move |detail| verbose || detail.status != TestStatus::Passed)
}

/// Plain text formatter for logs, pipes and `--no-color`
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "=".repeat((title.len() + 4).min(self.options.max_width));

        writeln!(output, "{}", border).map_err(fmt_err("header"))?;
        writeln!(output, "  {}  ", title).map_err(fmt_err("header"))?;
        write!(output, "{}", border).map_err(fmt_err("header"))?;

        Ok(output)
    }

    fn format_detail(&self, detail: &TestDetail) -> Result<String> {
        Ok(format!("[{}] {}: {}", status_label(detail.status), detail.test, detail.message))
    }

    fn format_summary(&self, result: &TestResult) -> Result<String> {
        let verdict = if result.is_deployable() { "READY TO DEPLOY" } else { "NOT DEPLOYABLE" };
        Ok(format!("Summary: {} - {}", result.summary(), verdict))
    }

    fn format_report(&self, environment: &str, result: &TestResult) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.format_header(&format!("Configuration Test Report ({})", environment))?)
            .map_err(fmt_err("report"))?;

        let mut shown = 0;
        for detail in visible_details(result, self.options.verbose_mode) {
            writeln!(output, "{}", self.format_detail(detail)?).map_err(fmt_err("report"))?;
            shown += 1;
        }
        if shown == 0 {
            writeln!(output, "All {} checks passed.", result.total()).map_err(fmt_err("report"))?;
        }

        writeln!(output).map_err(fmt_err("report"))?;
        write!(output, "{}", self.format_summary(result)?).map_err(fmt_err("report"))?;

        Ok(output)
    }

    fn format_environments(&self, environments: &[String]) -> Result<String> {
        let mut output = String::from("Supported environments:");
        for environment in environments {
            write!(output, "\n  {}", environment).map_err(fmt_err("environments"))?;
        }
        Ok(output)
    }

    fn format_overrides(&self, environment: &str, overrides: &Value) -> Result<String> {
        let json = serde_json::to_string_pretty(overrides)?;
        Ok(format!("Overrides for {}:\n{}", environment, json))
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("ERROR: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("SUCCESS: {}", message))
    }
}
