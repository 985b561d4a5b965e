//! EverSight - configuration resolution CLI
//!
//! Resolves a facility configuration against a deployment environment and
//! optionally runs the pre-deployment checks, exiting non-zero when any
//! check fails.

use clap::Parser;
use eversight_config::{
    build_info,
    cli::Cli,
    config::{
        display_config_summary, env::EnvManager, load_resolved_config, write_config, ConfigurationTester,
        EnvironmentConfigManager, StubConnector, TimeoutConnector,
    },
    error::{AppError, Result},
    logging::Logger,
    output::{OutputFormat, OutputFormatter, OutputFormatterFactory},
};
use std::path::Path;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    // .env values must be in the process environment before clap reads `env` attributes
    if let Err(e) = EnvManager::load_env_file(false) {
        eprintln!("{}", e.format_for_console(false));
        process::exit(e.exit_code());
    }

    let cli = Cli::parse();

    if let Err(e) = run_application(cli.clone()).await {
        eprintln!("{}", e.format_for_console(cli.use_colors()));

        if cli.verbose || cli.debug {
            eprintln!();
            eprintln!("{}", e.user_friendly_message());
        }

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    cli.validate().map_err(AppError::config)?;

    if cli.help_topic.is_some() {
        println!("{}", cli.display_help());
        return Ok(());
    }

    let use_colors = cli.use_colors();
    colored::control::set_override(use_colors);

    let logger = Logger::with_settings("EVERSIGHT", &cli.log_settings());
    if cli.debug {
        let banner = format!("{}\n{}", build_info::describe(), cli.get_config_summary());
        // JSON mode reserves stdout for the document
        if cli.format == OutputFormat::Json {
            eprintln!("{}", banner);
        } else {
            println!("{}", banner);
        }
    }
    for warning in EnvManager::validate_current_env() {
        logger.warn(&warning).log().await;
    }

    let formatter = OutputFormatterFactory::create_formatter(cli.format, use_colors, cli.verbose);
    let manager = EnvironmentConfigManager::new();

    if cli.list_environments {
        println!("{}", formatter.format_environments(&manager.get_supported_environments())?);
        return Ok(());
    }

    let environment = EnvManager::resolve_environment(cli.env.as_deref())?;
    logger.add_context_field("environment".to_string(), environment.as_str()).await;

    if cli.show_overrides {
        let overrides = manager.get_environment_specific_config(environment.as_str())?;
        println!("{}", formatter.format_overrides(environment.as_str(), &overrides)?);
        return Ok(());
    }

    let config_path = cli
        .config
        .as_deref()
        .ok_or_else(|| AppError::config("No base configuration given"))?;

    let resolved = load_resolved_config(config_path, environment)?;
    logger
        .info(&format!("Resolved {} against {}", config_path.display(), environment))
        .field("facility", &resolved.facility.name)
        .log()
        .await;

    if cli.verbose && cli.format == OutputFormat::Text {
        println!("{}", display_config_summary(&resolved));
        println!();
    }

    if let Some(output) = &cli.output {
        write_config(output, &resolved)?;
        if cli.format == OutputFormat::Text && !cli.test {
            println!("{}", formatter.format_success(&format!("Resolved configuration written to {}", output.display()))?);
        }
    }

    if cli.test {
        return run_checks(&cli, &logger, formatter.as_ref(), &resolved, environment.as_str()).await;
    }

    if cli.output.is_none() {
        println!("{}", resolved.to_json_pretty()?);
    }

    Ok(())
}

/// Run the check battery, print the report and apply the deployment gate
async fn run_checks(
    cli: &Cli,
    logger: &Logger,
    formatter: &dyn OutputFormatter,
    resolved: &eversight_config::CompleteConfig,
    environment: &str,
) -> Result<()> {
    let connector = TimeoutConnector::new(StubConnector, cli.db_timeout());
    let tester = ConfigurationTester::with_connector(Arc::new(connector)).with_logger(logger.clone());

    let result = tester.test_configuration(resolved).await;
    println!("{}", formatter.format_report(environment, &result)?);

    if result.is_deployable() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{} check(s) failed for {}; deployment blocked",
            result.failed,
            display_target(cli.config.as_deref())
        )))
    }
}

fn display_target(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_else(|| "configuration".to_string())
}
