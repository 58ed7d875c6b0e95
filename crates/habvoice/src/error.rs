//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use habvoice_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to server at {url}")]
    #[diagnostic(
        code(habvoice::connection_failed),
        help(
            "Check that the openHAB server is running and accessible.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(habvoice::timeout),
        help("The server did not answer in time. Raise --timeout or check the network.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(habvoice::auth_failed),
        help(
            "Verify your API token.\n\
             Generate one on the server under Settings > API Security,\n\
             then set HABVOICE_API_TOKEN or add it to your profile."
        )
    )]
    AuthFailed { message: String },

    #[error("No API token configured for profile '{profile}'")]
    #[diagnostic(
        code(habvoice::no_credentials),
        help("Set HABVOICE_API_TOKEN or add api_token to the profile.")
    )]
    NoCredentials { profile: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No server configured (looked for config at {path})")]
    #[diagnostic(
        code(habvoice::no_config),
        help("Pass --server/-s, set HABVOICE_SERVER, or create a profile in the config file.")
    )]
    NoConfig { path: String },

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(habvoice::validation))]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(habvoice::config))]
    Config { message: String },

    // ── Everything else ──────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(habvoice::api))]
    Api { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(habvoice::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(habvoice::internal))]
    Internal(String),
}

impl CliError {
    /// Map the error to its process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NoConfig { .. } | Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },
            CoreError::Timeout => Self::Timeout,
            CoreError::Api { message, .. } => Self::Api { message },
            CoreError::Config { message } => Self::Config { message },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

impl From<habvoice_config::ConfigError> for CliError {
    fn from(err: habvoice_config::ConfigError) -> Self {
        match err {
            habvoice_config::ConfigError::NoCredentials { profile } => {
                Self::NoCredentials { profile }
            }
            habvoice_config::ConfigError::Validation { field, reason } => {
                Self::Validation { field, reason }
            }
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}
