//! # pal core
//!
//! Core library for pal - a personal activity log that records short
//! timestamped entries tagged by author and project.
//!
//! This crate owns the entry record and its persistence, independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `EntryStore` trait with SQLite and JSONL backends
//! - **time**: offset-aware timestamp parsing and formatting
//! - **fs**: atomic file replacement

pub mod error;
pub mod fs;
pub mod storage;
pub mod time;

pub use error::{PalError, Result};
pub use storage::{Backend, Entry, EntryStore, JsonlStore, NewEntry, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
