//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use pal_core::PalError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for a core error.
pub fn core_exit_code(err: &PalError) -> i32 {
    match err {
        PalError::NotFound(_) => exit_codes::NOT_FOUND,
        PalError::Validation(_) => exit_codes::INVALID_INPUT,
        PalError::Storage(_) | PalError::DuplicateIdentity(_) => exit_codes::STORAGE_FAILED,
    }
}

/// Pick the exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<PalError>() {
        return core_exit_code(core_err);
    }
    exit_codes::GENERAL
}

/// Contextual hint for common failures.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<PalError>()? {
        PalError::Validation(_) => {
            Some("Hint: Entries need non-empty text, author and project.")
        }
        PalError::DuplicateIdentity(_) => {
            Some("Hint: The store file was edited by hand; remove the repeated id.")
        }
        PalError::NotFound(_) | PalError::Storage(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let not_found = anyhow::Error::new(PalError::NotFound(4));
        let invalid = anyhow::Error::new(PalError::Validation("empty".to_string()));
        let storage = anyhow::Error::new(PalError::Storage("io".to_string()));

        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);
        assert_eq!(exit_code_for(&storage), exit_codes::STORAGE_FAILED);
    }

    #[test]
    fn test_cli_errors_keep_their_code() {
        let err = anyhow::Error::new(CliError::invalid_input("bad"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
        assert_eq!(exit_code_for(&anyhow::anyhow!("other")), exit_codes::GENERAL);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("No config", "Run pal init");
        assert_eq!(err.to_string(), "No config\nRun pal init");
    }
}
