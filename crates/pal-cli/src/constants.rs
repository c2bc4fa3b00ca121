//! Constants used throughout the CLI.

/// Project used when neither a flag, the environment nor the config names one.
pub const DEFAULT_PROJECT: &str = "default";

/// Environment variables consulted during default resolution.
pub mod env_vars {
    pub const CONFIG: &str = "PAL_CONFIG";
    pub const AUTHOR: &str = "PAL_AUTHOR";
    pub const PROJECT: &str = "PAL_PROJECT";
    pub const LOG: &str = "PAL_LOG";
}

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Entry not found by identity.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Storage could not be read or written.
    pub const STORAGE_FAILED: i32 = 5;
}
