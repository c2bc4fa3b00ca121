//! Application context for the pal CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::{Path, PathBuf};

use log::debug;
use once_cell::unsync::OnceCell;

use pal_core::{Backend, EntryStore};

use crate::cli::Cli;
use crate::config::{read_config, PalConfig};
use crate::errors::CliError;

use super::resolver::{resolve_author, resolve_config_path, resolve_project, resolve_store_location};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<PalConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, loading it on first use. A missing file means defaults.
    pub fn config(&self) -> anyhow::Result<&PalConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                debug!("loading config from {}", path.display());
                read_config(&path)
            } else {
                debug!("no config at {}, using defaults", path.display());
                Ok(PalConfig::default())
            }
        })
    }

    /// Backend and file the store lives in.
    pub fn store_location(&self) -> anyhow::Result<(Backend, PathBuf)> {
        resolve_store_location(self.cli, self.config()?)
    }

    /// Open the configured store.
    pub fn open_store(&self) -> anyhow::Result<Box<dyn EntryStore>> {
        let (backend, path) = self.store_location()?;
        open_store_at(backend, &path)
    }

    /// Open the configured store, refusing to create one that is missing.
    pub fn open_existing_store(&self) -> anyhow::Result<Box<dyn EntryStore>> {
        let (backend, path) = self.store_location()?;
        if !path.exists() {
            return Err(CliError::not_found(
                format!("No {} store at {}", backend, path.display()),
                "Hint: Run `pal init` or `pal add` to create it.",
            )
            .into());
        }
        debug!("opening {} store at {}", backend, path.display());
        Ok(backend.open(&path)?)
    }

    pub fn author(&self, explicit: Option<&str>) -> anyhow::Result<String> {
        resolve_author(explicit, self.config()?)
    }

    pub fn project(&self, explicit: Option<&str>) -> anyhow::Result<String> {
        Ok(resolve_project(explicit, self.config()?))
    }
}

/// Open a store of `backend` at `path`, creating its directory if needed.
pub fn open_store_at(backend: Backend, path: &Path) -> anyhow::Result<Box<dyn EntryStore>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create store directory {}: {}", parent.display(), e)
        })?;
    }
    debug!("opening {} store at {}", backend, path.display());
    Ok(backend.open(path)?)
}
