//! pal CLI - a personal activity log
//!
//! This is the command-line interface for pal. It resolves author, project
//! and store defaults, then hands off to the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;

use clap::Parser;
use env_logger::Env;
use pal_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, misc};
use crate::constants::env_vars;
use crate::errors::{exit_code_for, hint_for};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        if let Some(hint) = hint_for(&e) {
            eprintln!("{}", hint);
        }
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr, filtered by PAL_LOG (default `warn`, `debug` with --verbose).
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().filter_or(env_vars::LOG, default_level))
        .format_timestamp(None)
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            entries::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            entries::handle_show(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            entries::handle_delete(ctx, args)?;
        }
        Some(Commands::Completions { shell }) => {
            misc::handle_completions(*shell)?;
        }
        None => {
            println!("pal v{}", VERSION);
            println!("\nQuickstart:");
            println!("  pal add \"fixed the login bug\" --project pal");
            println!("  pal list --project pal");
            println!("  pal show <id>");
            println!("  pal delete --project pal");
            println!("\nRun `pal --help` for full usage.");
        }
    }

    Ok(())
}
