//! Core data types for the storage layer.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{PalError, Result};
use crate::time;

/// A persisted entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identity
    pub id: i64,

    /// Journaled content
    pub text: String,

    /// Who wrote the entry
    pub author: String,

    /// Project the entry is filed under
    pub project: String,

    /// When the logged activity happened
    pub timestamp: DateTime<FixedOffset>,

    /// When the record was first persisted
    pub created_at: DateTime<FixedOffset>,

    /// When the record was last written
    pub updated_at: DateTime<FixedOffset>,
}

impl Entry {
    /// Check the invariants every stored record must satisfy.
    ///
    /// Both backends run this on load, so a hand-edited or corrupted record
    /// is reported the same way regardless of engine.
    ///
    /// # Errors
    ///
    /// Returns `PalError::Storage` for an empty required field or a record
    /// updated before it was created.
    pub fn check_persisted(&self) -> Result<()> {
        for (name, value) in [
            ("text", &self.text),
            ("author", &self.author),
            ("project", &self.project),
        ] {
            if value.trim().is_empty() {
                return Err(PalError::Storage(format!(
                    "Entry {} has an empty {} field",
                    self.id, name
                )));
            }
        }
        if self.created_at > self.updated_at {
            return Err(PalError::Storage(format!(
                "Entry {} was updated before it was created",
                self.id
            )));
        }
        Ok(())
    }
}

/// Builder for creating new entries.
///
/// Carries no identity or bookkeeping timestamps; the store fills those in.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub text: String,
    pub author: String,
    pub project: String,

    /// Defaults to the creation instant when unset
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl NewEntry {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            project: project.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the timestamp from a naive local time, pinning it to the local offset.
    pub fn with_local_timestamp(mut self, naive: NaiveDateTime) -> Result<Self> {
        self.timestamp = Some(time::normalize_naive(naive)?);
        Ok(self)
    }

    /// Check that every required field is non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns `PalError::Validation` naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("text", &self.text),
            ("author", &self.author),
            ("project", &self.project),
        ] {
            if value.trim().is_empty() {
                return Err(PalError::Validation(format!("Entry {} cannot be empty", name)));
            }
        }
        Ok(())
    }

    /// Populate the store-assigned fields.
    ///
    /// `now` becomes both `created_at` and `updated_at`, and the timestamp
    /// when none was supplied.
    pub fn into_entry(self, id: i64, now: DateTime<FixedOffset>) -> Entry {
        Entry {
            id,
            text: self.text,
            author: self.author,
            project: self.project,
            timestamp: self.timestamp.unwrap_or(now),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_builder() {
        let when = time::parse_timestamp("2024-01-02T03:04:05+00:00").unwrap();
        let entry = NewEntry::new("wrote spec", "alvaro", "pal").with_timestamp(when);

        assert_eq!(entry.text, "wrote spec");
        assert_eq!(entry.author, "alvaro");
        assert_eq!(entry.project, "pal");
        assert_eq!(entry.timestamp, Some(when));
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        for entry in [
            NewEntry::new("   ", "alvaro", "pal"),
            NewEntry::new("text", "", "pal"),
            NewEntry::new("text", "alvaro", "\t\n"),
        ] {
            assert!(matches!(entry.validate(), Err(PalError::Validation(_))));
        }
    }

    #[test]
    fn test_into_entry_defaults_timestamp_to_now() {
        let now = time::now();
        let entry = NewEntry::new("text", "alvaro", "pal").into_entry(7, now);

        assert_eq!(entry.id, 7);
        assert_eq!(entry.timestamp, now);
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_local_timestamp_keeps_wall_clock() {
        let naive = NaiveDateTime::parse_from_str("2024-04-05 06:07:08", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let entry = NewEntry::new("text", "alvaro", "pal")
            .with_local_timestamp(naive)
            .unwrap();
        assert_eq!(entry.timestamp.unwrap().naive_local(), naive);
    }

    #[test]
    fn test_check_persisted_rejects_broken_records() {
        let now = time::now();
        let good = NewEntry::new("text", "alvaro", "pal").into_entry(1, now);
        assert!(good.check_persisted().is_ok());

        let mut blank_author = good.clone();
        blank_author.author = " ".to_string();
        assert!(matches!(
            blank_author.check_persisted(),
            Err(PalError::Storage(_))
        ));

        let mut backwards = good;
        backwards.created_at = now + chrono::Duration::seconds(1);
        assert!(matches!(
            backwards.check_persisted(),
            Err(PalError::Storage(_))
        ));
    }

    #[test]
    fn test_entry_json_round_trip_keeps_precision() {
        let when = time::parse_timestamp("2024-06-30T22:15:00.987654321+02:00").unwrap();
        let entry = NewEntry::new("text", "alvaro", "pal")
            .with_timestamp(when)
            .into_entry(1, time::now());

        let line = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&line).unwrap();

        assert_eq!(back, entry);
        assert_eq!(back.timestamp.offset(), when.offset());
        assert_eq!(back.timestamp.timestamp_subsec_nanos(), 987_654_321);
    }
}
