//! Command-line interface module

pub mod help;

pub use help::HelpSystem;

use crate::config::env::{ENV_CONFIG_PATH, ENV_DB_TIMEOUT_MS, ENV_ENABLE_COLOR, ENV_ENVIRONMENT};
use crate::logging::LogSettings;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DB_TIMEOUT_MS: u64 = 5000;

/// EverSight - resolve facility configuration per environment and gate deployments
#[derive(Parser, Debug, Clone)]
#[command(name = "eversight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (JSON)
    #[arg(short, long, value_name = "FILE", env = ENV_CONFIG_PATH)]
    pub config: Option<PathBuf>,

    /// Deployment environment: development, testing, staging or production
    #[arg(short, long, value_name = "NAME", env = ENV_ENVIRONMENT)]
    pub env: Option<String>,

    /// Run the configuration checks against the resolved configuration
    #[arg(short, long)]
    pub test: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the resolved configuration to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the override partial for the environment and exit
    #[arg(long)]
    pub show_overrides: bool,

    /// List supported environments and exit
    #[arg(long)]
    pub list_environments: bool,

    /// Database connect timeout for the connectivity check, in milliseconds
    #[arg(long, value_name = "MS", env = ENV_DB_TIMEOUT_MS, value_parser = parse_timeout_ms, default_value_t = DEFAULT_DB_TIMEOUT_MS)]
    pub db_timeout_ms: u64,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Show help for a specific topic (environments, checks, config, examples)
    #[arg(long, value_name = "TOPIC")]
    pub help_topic: Option<String>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.is_informational() {
            return Ok(());
        }

        if self.config.is_none() {
            return Err(format!(
                "Must specify a base configuration via --config or {}",
                ENV_CONFIG_PATH
            ));
        }

        Ok(())
    }

    /// Modes that need no base configuration file
    pub fn is_informational(&self) -> bool {
        self.list_environments || self.show_overrides || self.help_topic.is_some()
    }

    pub fn get_help_topic(&self) -> Option<&str> {
        self.help_topic.as_deref()
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else if let Some(enabled) = std::env::var(ENV_ENABLE_COLOR).ok().and_then(|v| v.trim().parse().ok()) {
            enabled
        } else {
            supports_color()
        }
    }

    pub fn db_timeout(&self) -> Duration {
        Duration::from_millis(self.db_timeout_ms)
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            verbose: self.verbose,
            debug: self.debug,
            enable_color: self.use_colors(),
            machine_output: self.format == OutputFormat::Json,
        }
    }

    /// Display help for the specified topic or main help
    pub fn display_help(&self) -> String {
        let help_system = HelpSystem::new();
        let use_colors = self.use_colors();

        match &self.help_topic {
            Some(topic) => help_system.display_topic_help(topic, use_colors).unwrap_or_else(|| {
                format!(
                    "Unknown help topic: '{}'\n\nAvailable topics: {}\n\n{}",
                    topic,
                    HelpSystem::topics().join(", "),
                    help_system.display_main_help(use_colors)
                )
            }),
            None => help_system.display_main_help(use_colors),
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Configuration Summary:\n");
        if let Some(config) = &self.config {
            summary.push_str(&format!("  Base config: {}\n", config.display()));
        }
        summary.push_str(&format!("  Environment: {}\n", self.env.as_deref().unwrap_or("development (default)")));
        summary.push_str(&format!("  Run checks: {}\n", self.test));
        summary.push_str(&format!("  Report format: {:?}\n", self.format));
        summary.push_str(&format!("  DB timeout: {}ms\n", self.db_timeout_ms));
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        if let Some(output) = &self.output {
            summary.push_str(&format!("  Output file: {}\n", output.display()));
        }

        summary
    }
}

/// Parse a connect timeout in milliseconds
fn parse_timeout_ms(s: &str) -> Result<u64, String> {
    if s.starts_with('+') || s.starts_with("0x") || s.starts_with("0X") {
        return Err(format!("Invalid timeout: {}", s));
    }

    s.parse::<u64>()
        .map_err(|_| format!("Invalid timeout: {}", s))
        .and_then(|ms| {
            if ms == 0 {
                Err("Timeout must be greater than 0".to_string())
            } else if ms > 60_000 {
                Err("Timeout cannot exceed 60000 ms".to_string())
            } else {
                Ok(ms)
            }
        })
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_basic() {
        let cli = Cli::parse_from(["eversight", "--config", "facility.json", "--env", "staging", "--test"]);

        assert_eq!(cli.config, Some(PathBuf::from("facility.json")));
        assert_eq!(cli.env.as_deref(), Some("staging"));
        assert!(cli.test);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_parsing_all_options() {
        let cli = Cli::parse_from([
            "eversight",
            "-c", "facility.json",
            "-e", "production",
            "--test",
            "--format", "json",
            "--output", "resolved.json",
            "--db-timeout-ms", "250",
            "--no-color",
            "--verbose",
            "--debug",
        ]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.output, Some(PathBuf::from("resolved.json")));
        assert_eq!(cli.db_timeout(), Duration::from_millis(250));
        assert!(!cli.use_colors());

        let settings = cli.log_settings();
        assert!(settings.verbose && settings.debug && !settings.enable_color);
        assert!(settings.machine_output);
    }

    #[test]
    fn test_validate_requires_config() {
        let cli = Cli::parse_from(["eversight", "--test"]);
        if cli.config.is_none() {
            assert!(cli.validate().unwrap_err().contains("--config"));
        }

        let cli = Cli::parse_from(["eversight", "--list-environments"]);
        assert!(cli.is_informational());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_conflicting_color_flags() {
        let cli = Cli::parse_from(["eversight", "--list-environments", "--color", "--no-color"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_help_topic_methods() {
        let cli = Cli::parse_from(["eversight", "--help-topic", "checks"]);
        assert_eq!(cli.get_help_topic(), Some("checks"));
        assert!(cli.display_help().contains("CHECKS:"));

        let cli = Cli::parse_from(["eversight", "--help-topic", "dns", "--no-color"]);
        assert!(cli.display_help().starts_with("Unknown help topic: 'dns'"));
    }

    #[test]
    fn test_timeout_parsing() {
        assert_eq!(parse_timeout_ms("5000").unwrap(), 5000);
        assert_eq!(parse_timeout_ms("1").unwrap(), 1);
        assert_eq!(parse_timeout_ms("60000").unwrap(), 60000);

        assert!(parse_timeout_ms("0").is_err());
        assert!(parse_timeout_ms("60001").is_err());
        assert!(parse_timeout_ms("+5").is_err());
        assert!(parse_timeout_ms("fast").is_err());
    }

    #[test]
    fn test_config_summary() {
        let cli = Cli::parse_from(["eversight", "--config", "facility.json", "--no-color"]);
        let summary = cli.get_config_summary();

        assert!(summary.contains("Base config: facility.json"));
        assert!(summary.contains("DB timeout: 5000ms") || std::env::var(ENV_DB_TIMEOUT_MS).is_ok());
    }
}
