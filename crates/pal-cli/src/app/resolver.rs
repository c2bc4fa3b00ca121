//! Default resolution for config path, store location, author and project.

use std::path::PathBuf;

use pal_core::Backend;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, PalConfig};
use crate::constants::{env_vars, DEFAULT_PROJECT};
use crate::errors::CliError;

/// Resolve the config file path, checking PAL_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Some(value) = env_value(env_vars::CONFIG) {
        return Ok(PathBuf::from(value));
    }
    default_config_path()
}

/// Resolve backend and store file from CLI args, then config, then XDG defaults.
pub fn resolve_store_location(cli: &Cli, config: &PalConfig) -> anyhow::Result<(Backend, PathBuf)> {
    let backend = cli.backend.unwrap_or(config.storage.backend);
    let configured = first_non_blank([cli.path.clone(), config.storage.path.clone()]);
    let path = match configured {
        Some(path) => PathBuf::from(path),
        None => default_store_path(backend)?,
    };
    Ok((backend, path))
}

/// Resolve the author: flag, PAL_AUTHOR, config, then the OS user.
pub fn resolve_author(explicit: Option<&str>, config: &PalConfig) -> anyhow::Result<String> {
    first_non_blank([
        explicit.map(str::to_string),
        env_value(env_vars::AUTHOR),
        config.defaults.author.clone(),
        current_user(),
    ])
    .ok_or_else(|| {
        CliError::invalid_input(
            "Could not determine the author.\nHint: Pass --author or set PAL_AUTHOR.",
        )
        .into()
    })
}

/// Resolve the project: flag, PAL_PROJECT, config, then the literal default.
pub fn resolve_project(explicit: Option<&str>, config: &PalConfig) -> String {
    first_non_blank([
        explicit.map(str::to_string),
        env_value(env_vars::PROJECT),
        config.defaults.project.clone(),
    ])
    .unwrap_or_else(|| DEFAULT_PROJECT.to_string())
}

/// Login name of the user running the process.
fn current_user() -> Option<String> {
    env_value("USER").or_else(|| env_value("USERNAME"))
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// First candidate that is non-empty after trimming, trimmed.
fn first_non_blank<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
