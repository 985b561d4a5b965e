//! Error handling for EverSight configuration resolution

use thiserror::Error;

/// Custom error types for configuration resolution and testing
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading or resolution errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Environment name outside the supported set
    #[error("Unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    /// A configuration tree that does not match the `CompleteConfig` schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Database collaborator errors (connect, query, close)
    #[error("Database error: {0}")]
    Database(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (JSON, versions, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new unsupported-environment error for the given name
    pub fn unsupported_environment<S: Into<String>>(environment: S) -> Self {
        Self::UnsupportedEnvironment(environment.into())
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::Schema(message.into())
    }

    /// Create a new database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database(message.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::UnsupportedEnvironment(_) => "ENVIRONMENT",
            Self::Schema(_) => "SCHEMA",
            Self::Database(_) => "DATABASE",
            Self::Timeout(_) => "TIMEOUT",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check if error is transient (a rerun may succeed)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Timeout(_))
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check the base configuration file and your .env file.", msg)
            }
            Self::UnsupportedEnvironment(name) => {
                format!(
                    "Unknown deployment environment '{}'.\n\nSuggestion: Use one of: {}.",
                    name,
                    crate::config::SUPPORTED_ENVIRONMENTS.join(", ")
                )
            }
            Self::Schema(msg) => {
                format!("Configuration does not match the expected schema: {}\n\nSuggestion: Compare the file against a known-good facility configuration.", msg)
            }
            Self::Database(msg) => {
                format!("Database check failed: {}\n\nSuggestion: Verify host, port, credentials and that the database accepts connections.", msg)
            }
            Self::Timeout(msg) => {
                format!("Operation timed out: {}\n\nSuggestion: The database may be unreachable from this host.", msg)
            }
            Self::Validation(msg) => {
                format!("Configuration did not pass validation: {}\n\nSuggestion: Review the failed checks in the report above.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check file paths and permissions.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Check that the configuration file is valid JSON.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::UnsupportedEnvironment(_) | Self::Schema(_) | Self::Parse(_) => 1,
            Self::Validation(_) => 1,  // Deployment gate: at least one check failed
            Self::Database(_) => 2,
            Self::Timeout(_) => 3,
            Self::Io(_) => 5,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::UnsupportedEnvironment(_) | Self::Schema(_) | Self::Parse(_) | Self::Validation(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Database(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Timeout(_) => {
                    format!("[{}] {}", category.blue().bold(), message.blue())
                }
                Self::Io(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

impl From<semver::Error> for AppError {
    fn from(error: semver::Error) -> Self {
        Self::parse(format!("Version parse error: {}", error))
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(error: tokio::time::error::Elapsed) -> Self {
        Self::timeout(error.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Custom Result type for the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error, keeping the original error category
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                AppError::Config(msg) => AppError::Config(format!("{}: {}", context, msg)),
                AppError::Schema(msg) => AppError::Schema(format!("{}: {}", context, msg)),
                AppError::Database(msg) => AppError::Database(format!("{}: {}", context, msg)),
                AppError::Timeout(msg) => AppError::Timeout(format!("{}: {}", context, msg)),
                AppError::Validation(msg) => AppError::Validation(format!("{}: {}", context, msg)),
                AppError::Io(msg) => AppError::Io(format!("{}: {}", context, msg)),
                AppError::Parse(msg) => AppError::Parse(format!("{}: {}", context, msg)),
                AppError::Internal(msg) => AppError::Internal(format!("{}: {}", context, msg)),
                // The environment name is the whole payload; context would corrupt the message
                unsupported @ AppError::UnsupportedEnvironment(_) => unsupported,
            }
        })
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_error = AppError::config("Invalid configuration");
        assert_eq!(config_error.category(), "CONFIG");
        assert!(!config_error.is_recoverable());
        assert_eq!(config_error.exit_code(), 1);

        let database_error = AppError::database("Connection refused");
        assert_eq!(database_error.category(), "DATABASE");
        assert!(database_error.is_recoverable());
        assert_eq!(database_error.exit_code(), 2);
    }

    #[test]
    fn test_unsupported_environment_display() {
        let error = AppError::unsupported_environment("bogus");
        assert_eq!(error.to_string(), "Unsupported environment: bogus");
        assert!(error.user_friendly_message().contains("development, testing, staging, production"));
    }

    #[test]
    fn test_error_categories() {
        let errors = [
            AppError::config("config"),
            AppError::unsupported_environment("env"),
            AppError::schema("schema"),
            AppError::database("db"),
            AppError::timeout("timeout"),
            AppError::validation("validation"),
            AppError::io("io"),
            AppError::parse("parse"),
            AppError::internal("internal"),
        ];

        let expected_categories = [
            "CONFIG", "ENVIRONMENT", "SCHEMA", "DATABASE", "TIMEOUT",
            "VALIDATION", "IO", "PARSE", "INTERNAL",
        ];

        for (error, expected) in errors.iter().zip(expected_categories.iter()) {
            assert_eq!(error.category(), *expected);
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::schema("test").exit_code(), 1);
        assert_eq!(AppError::validation("test").exit_code(), 1);
        assert_eq!(AppError::timeout("test").exit_code(), 3);
        assert_eq!(AppError::io("test").exit_code(), 5);
        assert_eq!(AppError::internal("test").exit_code(), 99);
    }

    #[test]
    fn test_format_for_console_plain() {
        let formatted = AppError::schema("missing field `system`").format_for_console(false);
        assert_eq!(formatted, "[SCHEMA] Schema error: missing field `system`");
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert!(matches!(AppError::from(io_error), AppError::Io(_)));

        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        assert!(matches!(AppError::from(json_error), AppError::Parse(_)));

        let version_error = semver::Version::parse("not-a-version").unwrap_err();
        assert!(matches!(AppError::from(version_error), AppError::Parse(_)));
    }

    #[test]
    fn test_converted_errors_carry_cause_in_message() {
        use std::error::Error;

        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let error = AppError::from(io_error);

        assert!(error.source().is_none());
        assert_eq!(error.format_for_console(false), "[IO] I/O error: permission denied");
    }

    #[test]
    fn test_error_context_keeps_category() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let error = result.with_context(|| "Failed to read base.json".to_string()).unwrap_err();

        assert!(matches!(error, AppError::Io(_)));
        assert!(error.to_string().contains("Failed to read base.json: gone"));

        let result: std::result::Result<(), AppError> = Err(AppError::unsupported_environment("qa"));
        let error = result.context("Resolving environment").unwrap_err();
        assert_eq!(error.to_string(), "Unsupported environment: qa");
    }
}
