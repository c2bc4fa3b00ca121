//! SQLite storage backend.
//!
//! Entries live in a single `entry` table. Identities come from SQLite's
//! `AUTOINCREMENT` counter, so a deleted identity is never handed out again.
//! The connection is owned by the store and released when it is dropped or
//! closed.

mod row;

use std::path::Path;

use log::debug;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{PalError, Result};
use crate::storage::traits::EntryStore;
use crate::storage::types::{Entry, NewEntry};
use crate::time::{format_timestamp, now};

use row::{EntryRow, ENTRY_COLUMNS};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entry (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        author TEXT NOT NULL,
        project TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS entry_author_project ON entry (author, project);
"#;

/// SQLite-backed entry store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    #[cfg(test)]
    fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Close the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| PalError::from(err))
    }

    fn select_by_id(conn: &Connection, id: i64) -> Result<Option<Entry>> {
        let row = conn
            .query_row(
                &format!("SELECT {} FROM entry WHERE id = ?", ENTRY_COLUMNS),
                [id],
                EntryRow::from_row,
            )
            .optional()?;
        row.map(Entry::try_from).transpose()
    }
}

impl EntryStore for SqliteStore {
    fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        debug!("opened sqlite store at {}", path.display());
        Ok(Self { conn })
    }

    fn create(&mut self, entry: &NewEntry) -> Result<Entry> {
        entry.validate()?;

        let now = now();
        let timestamp = entry.timestamp.unwrap_or(now);
        let now_str = format_timestamp(&now);

        let tx = self.conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO entry (text, author, project, timestamp, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            (
                &entry.text,
                &entry.author,
                &entry.project,
                format_timestamp(&timestamp),
                &now_str,
                &now_str,
            ),
        )?;
        let id = tx.last_insert_rowid();
        let created = Self::select_by_id(&tx, id)?
            .ok_or_else(|| PalError::Storage(format!("Inserted entry {} vanished", id)))?;
        tx.commit()?;

        debug!("created entry {} for {}/{}", id, created.author, created.project);
        Ok(created)
    }

    fn find_by_author_and_project(
        &self,
        author: &str,
        project: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>> {
        let mut query = format!(
            "SELECT {} FROM entry WHERE author = ? AND project = ? ORDER BY id",
            ENTRY_COLUMNS
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(author.to_string()), Box::new(project.to_string())];
        if let Some(limit) = limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(i64::try_from(limit).unwrap_or(i64::MAX)));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter()),
            EntryRow::from_row,
        )?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(Entry::try_from(row?)?);
        }
        Ok(entries)
    }

    fn find_by_id(&self, id: i64) -> Result<Entry> {
        Self::select_by_id(&self.conn, id)?.ok_or(PalError::NotFound(id))
    }

    fn delete_by_author_and_project(
        &mut self,
        author: &str,
        project: Option<&str>,
    ) -> Result<usize> {
        let removed = match project {
            Some(project) => self.conn.execute(
                "DELETE FROM entry WHERE author = ? AND project = ?",
                (author, project),
            )?,
            None => self
                .conn
                .execute("DELETE FROM entry WHERE author = ?", [author])?,
        };
        debug!(
            "deleted {} entries for {}/{}",
            removed,
            author,
            project.unwrap_or("*")
        );
        Ok(removed)
    }
}
