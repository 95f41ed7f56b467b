use console::style;
use radisense_core::config::API_URL_ENV;
use radisense_core::RadisenseError;
use std::fmt;

/// Error presented to the user with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), context: None, suggestions: Vec::new(), help_command: None }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// The analysis service could not be reached
pub fn service_unreachable(url: &str, reason: &str) -> CliError {
    CliError::new("Cannot reach the analysis service")
        .with_context(format!(
            "The request did not get a response.\n\nURL: {}\nError: {}",
            url, reason
        ))
        .with_suggestion("Start the analysis service and try again")
        .with_suggestion(format!("Point at another service: --api-url <URL> or {}", API_URL_ENV))
        .with_help("Run: radisense health")
}

/// The service answered with a non-success status
pub fn analysis_failed(status: u16) -> CliError {
    CliError::new(format!("Analysis failed (HTTP {})", status))
        .with_context("The analysis service rejected the request or could not complete it.")
        .with_suggestion("Check the service logs for details")
        .with_suggestion("Try a shorter date range or another location")
        .with_help("Run: radisense health")
}

/// The service answered 2xx with a body that is not an analysis result
pub fn unexpected_response(reason: &str) -> CliError {
    CliError::new("Unexpected response from the analysis service")
        .with_context(format!("Expected {{ risk_score, risk_level }}.\n\nError: {}", reason))
        .with_suggestion("Check that --api-url points at a RadiSense analysis service")
        .with_help("Run: radisense config")
}

/// Coordinates were missing or not numbers
pub fn invalid_coordinates(lat: &str, lon: &str) -> CliError {
    CliError::new("Nothing to analyze")
        .with_context(format!(
            "Latitude and longitude must both be numbers.\n\nLatitude: '{}'\nLongitude: '{}'",
            lat, lon
        ))
        .with_suggestion("Example: radisense run --lat 20.0 --lon 80.0")
        .with_help("Run: radisense run --help")
}

/// Start date after end date
pub fn invalid_date_range(reason: &str) -> CliError {
    CliError::new("Invalid date range")
        .with_context(reason.to_string())
        .with_suggestion("Use --start and --end with start on or before end (YYYY-MM-DD)")
        .with_help("Run: radisense run --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check radisense.toml for syntax errors")
        .with_suggestion(format!("Check the {} environment variable", API_URL_ENV))
        .with_help("Run: radisense config")
}

/// Present a core error
pub fn from_core(error: &RadisenseError) -> CliError {
    match error {
        RadisenseError::Transport { url, reason } => service_unreachable(url, reason),
        RadisenseError::AnalysisFailed { status } => analysis_failed(*status),
        RadisenseError::Decode(reason) => unexpected_response(reason),
        RadisenseError::ConfigInvalid { key, reason } => invalid_config(key, reason),
        RadisenseError::InvalidDateRange { .. } => invalid_date_range(&error.to_string()),
        other => CliError::new(other.to_string()),
    }
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let error = match error.downcast::<CliError>() {
        Ok(cli_error) => return cli_error,
        Err(error) => error,
    };

    let error = match error.downcast::<RadisenseError>() {
        Ok(core_error) => return from_core(&core_error),
        Err(error) => error,
    };

    let message = error.to_string();
    if message.contains("No such file or directory") {
        CliError::new("File not found")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check the file path and try again")
    } else if message.contains("permission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check file permissions")
    } else {
        CliError::new(message)
    }
}
