//! Entry row type for database queries.

use chrono::{DateTime, FixedOffset};

use crate::error::{PalError, Result};
use crate::storage::types::Entry;

/// Column list shared by every entry query, in `EntryRow` field order.
pub const ENTRY_COLUMNS: &str = "id, text, author, project, timestamp, created_at, updated_at";

/// Raw row data from the entry table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub project: String,
    pub timestamp: String,
    pub created_at: String,
    pub updated_at: String,
}

impl EntryRow {
    /// Read the columns selected with `ENTRY_COLUMNS`.
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            text: row.get(1)?,
            author: row.get(2)?,
            project: row.get(3)?,
            timestamp: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}

fn parse_instant(column: &str, value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| PalError::Storage(format!("Invalid {} timestamp {:?}: {}", column, value, e)))
}

impl TryFrom<EntryRow> for Entry {
    type Error = PalError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let entry = Entry {
            id: row.id,
            text: row.text,
            author: row.author,
            project: row.project,
            timestamp: parse_instant("timestamp", &row.timestamp)?,
            created_at: parse_instant("created_at", &row.created_at)?,
            updated_at: parse_instant("updated_at", &row.updated_at)?,
        };
        entry.check_persisted()?;
        Ok(entry)
    }
}
