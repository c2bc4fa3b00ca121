//! Text and table output formatting for entries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use pal_core::time::format_timestamp;
use pal_core::Entry;

use crate::errors::CliError;
use crate::helpers::OutputFormat;

use super::json::{entries_json, entry_json};

const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// First line of the entry text, used as its one-line summary.
fn summary(entry: &Entry) -> &str {
    entry.text.lines().next().unwrap_or("")
}

fn entry_table(entries: &[Entry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "WHEN", "PROJECT", "TEXT"]);
    for entry in entries {
        table.add_row(vec![
            entry.id.to_string(),
            entry.timestamp.format(DISPLAY_TIME_FORMAT).to_string(),
            entry.project.clone(),
            summary(entry).to_string(),
        ]);
    }
    table
}

/// Print a list of entries in the requested format.
pub fn print_entry_list(
    entries: &[Entry],
    json: bool,
    format: Option<OutputFormat>,
    quiet: bool,
) -> anyhow::Result<()> {
    if json {
        if format.is_some() {
            return Err(CliError::invalid_input("--format cannot be used with --json").into());
        }
        println!("{}", serde_json::to_string_pretty(&entries_json(entries))?);
        return Ok(());
    }

    match format.unwrap_or(OutputFormat::Table) {
        OutputFormat::Table => {
            if entries.is_empty() {
                if !quiet {
                    println!("No entries.");
                }
            } else {
                println!("{}", entry_table(entries));
            }
        }
        OutputFormat::Plain => {
            for entry in entries {
                println!(
                    "{}\t{}\t{}",
                    entry.id,
                    format_timestamp(&entry.timestamp),
                    summary(entry)
                );
            }
        }
    }
    Ok(())
}

/// Print a single entry with all of its fields.
pub fn print_entry(entry: &Entry, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&entry_json(entry))?);
        return Ok(());
    }

    println!("id:         {}", entry.id);
    println!("author:     {}", entry.author);
    println!("project:    {}", entry.project);
    println!("timestamp:  {}", format_timestamp(&entry.timestamp));
    println!("created_at: {}", format_timestamp(&entry.created_at));
    println!("updated_at: {}", format_timestamp(&entry.updated_at));
    println!();
    println!("{}", entry.text);
    Ok(())
}
