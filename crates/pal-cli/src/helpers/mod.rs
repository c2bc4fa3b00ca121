//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Entry text assembly and delete confirmation (`input`)
//! - Output format parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm_delete, read_entry_text};
pub use parsing::{parse_output_format, OutputFormat};
