//! Line-delimited JSON storage backend.
//!
//! One entry per line, in creation order. The first line may be a header
//! `{"next_id": N}` holding the identity high-water mark, so deleting the
//! newest entry never frees its identity for reuse. Files without the header
//! fall back to `max(id) + 1`. The header holds `null` once `i64::MAX` has
//! been handed out.
//!
//! The store keeps no state besides its path: every operation re-reads the
//! file, and every mutation rewrites it atomically.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PalError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::EntryStore;
use crate::storage::types::{Entry, NewEntry};
use crate::time::now;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Header {
    /// `null` once the identity range is used up
    next_id: Option<i64>,
}

/// In-memory image of the file for the duration of one operation.
#[derive(Debug)]
struct Journal {
    /// `None` once the `i64` identity range is used up
    next_id: Option<i64>,
    entries: Vec<Entry>,
}

impl Journal {
    fn parse(contents: &str) -> Result<Self> {
        let mut header: Option<Header> = None;
        let mut entries: Vec<Entry> = Vec::new();
        let mut seen = HashSet::new();

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if entries.is_empty() && header.is_none() {
                if let Ok(parsed) = serde_json::from_str::<Header>(line) {
                    header = Some(parsed);
                    continue;
                }
            }
            let entry: Entry = serde_json::from_str(line).map_err(|e| {
                PalError::Storage(format!("Invalid record on line {}: {}", index + 1, e))
            })?;
            entry.check_persisted()?;
            if !seen.insert(entry.id) {
                return Err(PalError::DuplicateIdentity(entry.id));
            }
            entries.push(entry);
        }

        let after_max = match entries.iter().map(|entry| entry.id).max() {
            Some(max_id) => max_id.checked_add(1),
            None => Some(1),
        };
        let next_id = match header {
            Some(Header { next_id: None }) => None,
            Some(Header {
                next_id: Some(high_water),
            }) => after_max.map(|next| next.max(high_water)),
            None => after_max,
        };
        Ok(Self { next_id, entries })
    }

    fn render(&self) -> Result<String> {
        let mut out = serde_json::to_string(&Header {
            next_id: self.next_id,
        })?;
        out.push('\n');
        for entry in &self.entries {
            out.push_str(&serde_json::to_string(entry)?);
            out.push('\n');
        }
        Ok(out)
    }
}

/// JSONL-backed entry store.
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    fn load(&self) -> Result<Journal> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Journal::parse(&contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Journal {
                next_id: Some(1),
                entries: Vec::new(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, journal: &Journal) -> Result<()> {
        write_atomic(&self.path, journal.render()?.as_bytes())?;
        Ok(())
    }
}

impl EntryStore for JsonlStore {
    fn open(path: &Path) -> Result<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };
        if !path.exists() {
            store.save(&Journal {
                next_id: Some(1),
                entries: Vec::new(),
            })?;
        } else {
            store.load()?;
        }
        debug!("opened jsonl store at {}", path.display());
        Ok(store)
    }

    fn create(&mut self, entry: &NewEntry) -> Result<Entry> {
        entry.validate()?;

        let mut journal = self.load()?;
        let id = journal
            .next_id
            .ok_or_else(|| PalError::Storage("Identity space exhausted".to_string()))?;
        if journal.entries.iter().any(|existing| existing.id == id) {
            return Err(PalError::DuplicateIdentity(id));
        }

        let created = entry.clone().into_entry(id, now());
        journal.entries.push(created.clone());
        journal.next_id = id.checked_add(1);
        self.save(&journal)?;

        debug!("created entry {} for {}/{}", id, created.author, created.project);
        Ok(created)
    }

    fn find_by_author_and_project(
        &self,
        author: &str,
        project: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>> {
        let journal = self.load()?;
        let matching = journal
            .entries
            .into_iter()
            .filter(|entry| entry.author == author && entry.project == project);
        Ok(match limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    fn find_by_id(&self, id: i64) -> Result<Entry> {
        self.load()?
            .entries
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or(PalError::NotFound(id))
    }

    fn delete_by_author_and_project(
        &mut self,
        author: &str,
        project: Option<&str>,
    ) -> Result<usize> {
        let mut journal = self.load()?;
        let before = journal.entries.len();
        journal.entries.retain(|entry| {
            let matches = entry.author == author
                && project.map_or(true, |project| entry.project == project);
            !matches
        });
        let removed = before - journal.entries.len();
        if removed > 0 {
            self.save(&journal)?;
        }
        debug!(
            "deleted {} entries for {}/{}",
            removed,
            author,
            project.unwrap_or("*")
        );
        Ok(removed)
    }
}
