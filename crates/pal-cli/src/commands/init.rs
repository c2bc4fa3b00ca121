use std::path::PathBuf;

use log::info;

use crate::app::{open_store_at, resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, PalConfig};
use crate::errors::CliError;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let (backend, configured_path) = ctx.store_location()?;
    let store_path = match args.target {
        Some(ref path) => PathBuf::from(path),
        None => configured_path,
    };
    let store_path = if store_path.is_relative() {
        std::env::current_dir()?.join(store_path)
    } else {
        store_path
    };

    open_store_at(backend, &store_path)?;

    let config = PalConfig::new(
        &store_path,
        backend,
        args.author.clone(),
        args.project.clone(),
    );
    write_config(&config_path, &config)?;
    info!("wrote config {}", config_path.display());

    if !ctx.quiet() {
        println!("Initialized {} store at {}", backend, store_path.display());
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
