//! Error types and handling for connect-doctor
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Missing installations and unreadable bundle metadata are not errors: they
//! are ordinary diagnostic findings carried by
//! [`ProbeOutcome`](crate::probe::ProbeOutcome). This type covers failures of
//! the tool itself (bad configuration, broken terminal, output errors).

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for connect-doctor
#[derive(Error, Diagnostic, Debug)]
pub enum DoctorError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(connect_doctor::config::not_found),
        help("Check the --config flag or the CONNECT_DOCTOR_CONFIG environment variable")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(connect_doctor::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(connect_doctor::config::parse_failed),
        help("Quote version values, e.g. threshold: \"2.45.1\"")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid threshold version: '{value}'")]
    #[diagnostic(
        code(connect_doctor::config::invalid_threshold),
        help("Use a dotted numeric version such as 2.45.1")
    )]
    InvalidThreshold { value: String },

    #[error("Root directory does not exist: {path}")]
    #[diagnostic(
        code(connect_doctor::config::invalid_root),
        help("Point --root at a mounted volume or an extracted machine image")
    )]
    InvalidRoot { path: String },

    // Terminal errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(connect_doctor::ui::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("Interactive prompt failed: {message}")]
    #[diagnostic(code(connect_doctor::ui::prompt_failed))]
    PromptFailed { message: String },

    #[error("Failed to serialize report: {reason}")]
    #[diagnostic(code(connect_doctor::ui::serialization_failed))]
    SerializationFailed { reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(connect_doctor::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DoctorError {
    fn from(err: std::io::Error) -> Self {
        DoctorError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DoctorError {
    fn from(err: serde_yaml::Error) -> Self {
        DoctorError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DoctorError {
    fn from(err: serde_json::Error) -> Self {
        DoctorError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for DoctorError {
    fn from(err: inquire::InquireError) -> Self {
        DoctorError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DoctorError>;
