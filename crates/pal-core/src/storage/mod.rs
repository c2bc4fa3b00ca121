//! Storage abstractions and backends.

mod jsonl;
mod sqlite;
mod traits;
mod types;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PalError, Result};

pub use jsonl::JsonlStore;
pub use sqlite::SqliteStore;
pub use traits::EntryStore;
pub use types::{Entry, NewEntry};

/// Which on-disk representation a store uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Single SQLite table
    #[default]
    Sqlite,
    /// One JSON object per line
    Jsonl,
}

impl Backend {
    /// Conventional file name for this backend's store.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Backend::Sqlite => "pal.db",
            Backend::Jsonl => "pal.jsonl",
        }
    }

    /// Open the store at `path` with this backend.
    pub fn open(self, path: &Path) -> Result<Box<dyn EntryStore>> {
        let store: Box<dyn EntryStore> = match self {
            Backend::Sqlite => Box::new(SqliteStore::open(path)?),
            Backend::Jsonl => Box::new(JsonlStore::open(path)?),
        };
        Ok(store)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Sqlite => write!(f, "sqlite"),
            Backend::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl FromStr for Backend {
    type Err = PalError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "jsonl" => Ok(Backend::Jsonl),
            other => Err(PalError::Validation(format!(
                "Unknown backend {:?} (use sqlite or jsonl)",
                other
            ))),
        }
    }
}
