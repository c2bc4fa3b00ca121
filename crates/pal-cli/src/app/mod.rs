//! Application-level utilities for the pal CLI.
//!
//! This module provides:
//! - Default resolution for config, store, author and project
//! - The `AppContext` handed to every command handler

mod context;
mod resolver;

pub use context::{open_store_at, AppContext};
pub use resolver::resolve_config_path;
