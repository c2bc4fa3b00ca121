//! Input handling helpers for entry text and confirmation prompts.

use std::io::{self, IsTerminal, Read};

use dialoguer::Confirm;

use crate::errors::CliError;

/// Join a header and optional body into entry text, separated by a blank line.
pub fn compose_entry_text(header: &str, body: Option<&str>) -> String {
    let header = header.trim();
    match body.map(str::trim).filter(|b| !b.is_empty()) {
        Some(body) if header.is_empty() => body.to_string(),
        Some(body) => format!("{}\n\n{}", header, body),
        None => header.to_string(),
    }
}

/// Read entry text from positional words, falling back to piped stdin.
pub fn read_entry_text(words: &[String], body: Option<&str>) -> anyhow::Result<String> {
    let header = words.join(" ");
    if !header.trim().is_empty() || body.is_some() {
        return Ok(compose_entry_text(&header, body));
    }

    if io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "No entry text given.\nHint: Run `pal add \"what you did\"` or pipe text on stdin.",
        )
        .into());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer.trim_end().to_string())
}

/// Ask before deleting. Without a TTY or with `no_input` the caller must pass `--force`.
pub fn confirm_delete(prompt: &str, no_input: bool) -> anyhow::Result<bool> {
    if no_input || !io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "Refusing to delete without confirmation.\nHint: Pass --force to skip the prompt.",
        )
        .into());
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
