//! Filesystem utilities for atomic operations.

use std::fs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

/// Move `from` over `to`, replacing `to` when the platform refuses to rename
/// onto an existing file.
///
/// `from` is removed when the move ultimately fails.
///
/// # Errors
///
/// Returns the first rename error when `to` did not exist, otherwise the
/// error from the retry.
pub fn rename_with_fallback(from: &Path, to: &Path) -> io::Result<()> {
    let first = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };
    debug!("rename onto {} failed ({}), replacing it", to.display(), first);

    let outcome = match fs::remove_file(to) {
        Ok(()) => fs::rename(from, to),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(first),
        Err(err) => Err(err),
    };
    outcome.map_err(|err| {
        let _ = fs::remove_file(from);
        io::Error::new(
            err.kind(),
            format!("Could not replace {}: {}", to.display(), err),
        )
    })
}

/// Replace `path` with `data` via a synced sibling temp file and a rename.
///
/// Readers see either the old contents or the new ones, never a torn write.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid store path"))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid store filename"))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("System time error: {}", e)))?
        .as_nanos();
    let temp_path = parent.join(format!("{}.{}.tmp", filename, nanos));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;
    if let Err(err) = file.write_all(data).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(file);

    rename_with_fallback(&temp_path, path)
}
