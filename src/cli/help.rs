//! Topic help: environments, checks, configuration files and examples

use crate::config::{env::EnvManager, EnvironmentConfigManager};
use colored::*;

/// What each environment's override table changes
const ENVIRONMENT_SUMMARIES: [(&str, &str); 4] = [
    ("development", "SQLite file database, relaxed passwords (6 chars), MFA off, caching off"),
    ("testing", "In-memory SQLite, minimal policies, audit and monitoring disabled"),
    ("staging", "PostgreSQL over SSL, 8-char passwords, optional TOTP MFA, 90-day audit"),
    ("production", "PostgreSQL over SSL with backups, 12-char passwords, required MFA, HSM encryption"),
];

/// Checks run by `--test`, in order
const CHECKS: [(&str, &str); 7] = [
    ("Schema Validation", "Pool bounds, cron schedules, thresholds, semver version"),
    ("Database Connectivity", "Connects to the primary database and runs SELECT 1"),
    ("Authentication Provider", "system.auth.provider must be set"),
    ("Performance Configuration", "system.performance.maxConnections must be positive"),
    ("GuardianProtect Configuration", "Only when the module is enabled: functional.guardianProtect present"),
    ("Password Policy / MFA", "Warnings when minLength < 8 or MFA is disabled"),
    ("Audit Logging", "Fails when audit logging is disabled"),
];

/// Help system for the CLI application
pub struct HelpSystem {
    environments: Vec<String>,
}

impl HelpSystem {
    pub fn new() -> Self {
        Self {
            environments: EnvironmentConfigManager::new().get_supported_environments(),
        }
    }

    /// Topics accepted by [`display_topic_help`](Self::display_topic_help)
    pub fn topics() -> &'static [&'static str] {
        &["environments", "checks", "config", "examples"]
    }

    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();
        help.push_str(&self.format_header(use_colors));
        help.push('\n');
        help.push_str(&self.format_usage_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_examples_section(use_colors));
        help.push('\n');
        help.push_str(&format!(
            "Topics: {}  (use --help-topic <TOPIC>)\n",
            Self::topics().join(", ")
        ));
        help
    }

    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.to_lowercase().as_str() {
            "env" | "environment" | "environments" => Some(self.format_environment_help(use_colors)),
            "checks" | "test" => Some(self.format_checks_help(use_colors)),
            "config" | "configuration" => Some(self.format_configuration_help(use_colors)),
            "examples" => Some(self.format_examples_section(use_colors)),
            _ => None,
        }
    }

    fn section(&self, title: &str, use_colors: bool) -> String {
        if use_colors {
            title.bright_green().bold().to_string()
        } else {
            title.to_string()
        }
    }

    fn format_header(&self, use_colors: bool) -> String {
        let title = "EverSight Configuration Resolver";
        let subtitle = "Resolve facility configuration per environment and gate deployments";
        let version = env!("CARGO_PKG_VERSION");

        if use_colors {
            format!("{}\n{}\nVersion: {}\n", title.bright_cyan().bold(), subtitle.bright_blue(), version.green())
        } else {
            format!("{}\n{}\nVersion: {}\n", title, subtitle, version)
        }
    }

    fn format_usage_section(&self, use_colors: bool) -> String {
        let mut usage = format!("{}\n", self.section("USAGE:", use_colors));
        for pattern in [
            "eversight --config <FILE> [--env <NAME>] [--test] [--format text|json]",
            "eversight --config <FILE> --env <NAME> --output <FILE>",
            "eversight --show-overrides --env <NAME>",
            "eversight --list-environments",
        ] {
            usage.push_str(&format!("  {}\n", pattern));
        }
        usage
    }

    fn format_examples_section(&self, use_colors: bool) -> String {
        let examples = [
            ExampleHelp {
                title: "Gate a production rollout",
                command: "eversight --config facility.json --env production --test",
                description: "Exits with code 1 when any check fails",
            },
            ExampleHelp {
                title: "Write the resolved staging configuration",
                command: "eversight --config facility.json --env staging --output staging.json",
                description: "Base file merged with the staging overrides",
            },
            ExampleHelp {
                title: "Machine-readable report",
                command: "eversight --config facility.json --test --format json",
                description: "Prints {passed, failed, warnings, details}",
            },
        ];

        let mut output = format!("{}\n", self.section("EXAMPLES:", use_colors));
        for example in &examples {
            output.push_str(&example.format(use_colors));
        }
        output
    }

    fn format_environment_help(&self, use_colors: bool) -> String {
        let mut output = format!("{}\n", self.section("ENVIRONMENTS:", use_colors));
        for name in &self.environments {
            let summary = ENVIRONMENT_SUMMARIES
                .iter()
                .find(|(env, _)| *env == name.as_str())
                .map(|(_, summary)| *summary)
                .unwrap_or("");
            let padded = format!("{:<12}", name);
            let label = if use_colors { padded.bright_cyan().to_string() } else { padded };
            output.push_str(&format!("  {} {}\n", label, summary));
        }
        output.push_str("\nAn unknown name is rejected by --env and --show-overrides.\n");
        output
    }

    fn format_checks_help(&self, use_colors: bool) -> String {
        let mut output = format!("{}\n", self.section("CHECKS:", use_colors));
        for (index, (name, description)) in CHECKS.iter().enumerate() {
            output.push_str(&format!("  {}. {:<30} {}\n", index + 1, name, description));
        }
        output.push_str("\nSecurity checks only report problems; a clean policy adds no lines.\n");
        output
    }

    fn format_configuration_help(&self, use_colors: bool) -> String {
        let mut output = format!("{}\n", self.section("CONFIGURATION:", use_colors));
        output.push_str("  The base file is a JSON CompleteConfig with camelCase keys:\n");
        output.push_str("  facility, system, functional, deployment, metadata and the optional\n");
        output.push_str("  security, mobile, featureFlags and customizations blocks.\n\n");
        output.push_str(&EnvManager::display_env_help());
        output
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for formatting examples
struct ExampleHelp {
    title: &'static str,
    command: &'static str,
    description: &'static str,
}

impl ExampleHelp {
    fn format(&self, use_colors: bool) -> String {
        if use_colors {
            format!(
                "  {}:\n    {}\n    {}\n",
                self.title.bright_yellow().bold(),
                self.command.bright_white(),
                self.description.bright_blue().italic()
            )
        } else {
            format!("  {}:\n    {}\n    {}\n", self.title, self.command, self.description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_help_display() {
        let help = HelpSystem::new().display_main_help(false);

        assert!(help.contains("EverSight Configuration Resolver"));
        assert!(help.contains("USAGE:"));
        assert!(help.contains("EXAMPLES:"));
        assert!(help.contains("environments, checks, config, examples"));
    }

    #[test]
    fn test_environment_help_lists_all() {
        let help = HelpSystem::new().display_topic_help("environments", false).unwrap();
        for env in ["development", "testing", "staging", "production"] {
            assert!(help.contains(env));
        }
        assert!(help.contains("required MFA"));
    }

    #[test]
    fn test_checks_help_in_order() {
        let help = HelpSystem::new().display_topic_help("checks", false).unwrap();
        let schema = help.find("Schema Validation").unwrap();
        let audit = help.find("Audit Logging").unwrap();
        assert!(schema < audit);
    }

    #[test]
    fn test_config_help_includes_env_vars() {
        let help = HelpSystem::new().display_topic_help("CONFIG", false).unwrap();
        assert!(help.contains("EVERSIGHT_ENV"));
        assert!(help.contains("camelCase"));
    }

    #[test]
    fn test_unknown_topic() {
        assert!(HelpSystem::new().display_topic_help("dns", false).is_none());
    }
}
