//! Entry store trait definition.
//!
//! The `EntryStore` trait defines the interface that every storage backend
//! implements. Both engines expose identical external semantics; only the
//! on-disk representation differs.

use std::path::Path;

use crate::error::Result;
use crate::storage::types::{Entry, NewEntry};

/// Durable storage for entries, addressable by author and project.
///
/// Stores never retry and never prompt. Confirmation before deletion and
/// default resolution for author/project belong to the caller.
pub trait EntryStore {
    /// Open (creating if missing) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns `PalError::Storage` if the file cannot be opened or holds
    /// malformed data.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Persist a new entry and return it with identity and bookkeeping
    /// timestamps filled in.
    ///
    /// Identities are strictly increasing and never reused, even after
    /// deletions. `created_at` and `updated_at` are equal on return.
    ///
    /// # Errors
    ///
    /// Returns `PalError::Validation` if text, author or project is blank.
    /// Nothing is written and no identity is consumed in that case.
    fn create(&mut self, entry: &NewEntry) -> Result<Entry>;

    /// All entries matching `author` and `project` exactly, in storage order.
    ///
    /// With `limit`, at most that many entries are returned: the first ones
    /// in storage order. Callers wanting newest-first must sort themselves.
    fn find_by_author_and_project(
        &self,
        author: &str,
        project: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>>;

    /// Get an entry by identity.
    ///
    /// # Errors
    ///
    /// Returns `PalError::NotFound` if no entry has that identity.
    fn find_by_id(&self, id: i64) -> Result<Entry>;

    /// Delete entries of `author`, restricted to `project` when given.
    ///
    /// `None` removes the author's entries across every project.
    ///
    /// # Returns
    ///
    /// The number of entries removed; zero is not an error.
    fn delete_by_author_and_project(&mut self, author: &str, project: Option<&str>)
        -> Result<usize>;
}
