//! Output formatting and display system
//!
//! Renders configuration test reports, environment lists and override
//! partials as colored text, plain text or JSON.

mod colored;
mod formatter;
mod json;

pub use colored::{ColorScheme, ColoredFormatter, StatusStyle};
pub use formatter::{FormattingOptions, OutputFormatter, PlainFormatter};
pub use json::JsonFormatter;

/// Report rendering selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text, colored when the terminal allows
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter for the requested format and color preference
    pub fn create_formatter(format: OutputFormat, enable_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
            ..Default::default()
        };

        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text if enable_color => Box::new(ColoredFormatter::new(options)),
            OutputFormat::Text => Box::new(PlainFormatter::new(options)),
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(OutputFormat::Text, false, true)
    }
}
