//! Colored formatter implementation with terminal color support

use super::formatter::{fmt_err, status_label, visible_details, FormattingOptions, OutputFormatter};
use crate::{
    error::Result,
    models::{TestDetail, TestResult, TestStatus},
};
use colored::*;
use serde_json::Value;
use std::fmt::Write as _;

/// Visual treatment of a check outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusStyle {
    pub color: Color,
    pub symbol: &'static str,
}

impl StatusStyle {
    pub fn for_status(status: TestStatus, scheme: &ColorScheme) -> Self {
        match status {
            TestStatus::Passed => Self { color: scheme.success, symbol: "✔" },
            TestStatus::Warning => Self { color: scheme.warning, symbol: "⚠" },
            TestStatus::Failed => Self { color: scheme.error, symbol: "✘" },
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            muted: Color::BrightBlack,
            border: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self::with_color_scheme(options, ColorScheme::default())
    }

    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        Self { options, color_scheme }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }

    fn border(&self) -> ColoredString {
        self.colorize(&"─".repeat(self.options.max_width.min(60)), self.color_scheme.border)
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "{}", self.border()).map_err(fmt_err("header"))?;
        writeln!(output, "  {}", self.bold(title).color(self.color_scheme.header)).map_err(fmt_err("header"))?;
        write!(output, "{}", self.border()).map_err(fmt_err("header"))?;
        Ok(output)
    }

    fn format_detail(&self, detail: &TestDetail) -> Result<String> {
        let style = StatusStyle::for_status(detail.status, &self.color_scheme);
        let label = format!("{} {}", style.symbol, status_label(detail.status));

        Ok(format!(
            "{} {} {}",
            self.colorize(&label, style.color).bold(),
            self.bold(&detail.test),
            self.colorize(&detail.message, self.color_scheme.muted)
        ))
    }

    fn format_summary(&self, result: &TestResult) -> Result<String> {
        let verdict = if result.is_deployable() {
            self.colorize("READY TO DEPLOY", self.color_scheme.success).bold()
        } else {
            self.colorize("NOT DEPLOYABLE", self.color_scheme.error).bold()
        };

        Ok(format!(
            "{} {}, {}, {}  {}",
            self.bold("Summary:"),
            self.colorize(&format!("{} passed", result.passed), self.color_scheme.success),
            self.colorize(&format!("{} failed", result.failed), self.color_scheme.error),
            self.colorize(&format!("{} warning(s)", result.warnings), self.color_scheme.warning),
            verdict
        ))
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
            let all_passed = format!("All {} checks passed.", result.total());
            writeln!(output, "{}", self.colorize(&all_passed, self.color_scheme.success)).map_err(fmt_err("report"))?;
        }

        writeln!(output, "{}", self.border()).map_err(fmt_err("report"))?;
        write!(output, "{}", self.format_summary(result)?).map_err(fmt_err("report"))?;

        Ok(output)
    }

    fn format_environments(&self, environments: &[String]) -> Result<String> {
        let mut output = self.bold("Supported environments:").to_string();
        for environment in environments {
            write!(output, "\n  {}", self.colorize(environment, self.color_scheme.info)).map_err(fmt_err("environments"))?;
        }
        Ok(output)
    }

    fn format_overrides(&self, environment: &str, overrides: &Value) -> Result<String> {
        let json = serde_json::to_string_pretty(overrides)?;
        Ok(format!(
            "{} {}\n{}",
            self.bold("Overrides for"),
            self.colorize(environment, self.color_scheme.info).bold(),
            json
        ))
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("{} {}", self.colorize("✘ ERROR:", self.color_scheme.error).bold(), error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", self.colorize("⚠ WARNING:", self.color_scheme.warning).bold(), warning))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("{} {}", self.colorize("✔ SUCCESS:", self.color_scheme.success).bold(), message))
    }
}
