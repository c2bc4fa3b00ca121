//! JSON output formatting for entries.

use pal_core::time::format_timestamp;
use pal_core::Entry;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "text": entry.text,
        "author": entry.author,
        "project": entry.project,
        "timestamp": format_timestamp(&entry.timestamp),
        "created_at": format_timestamp(&entry.created_at),
        "updated_at": format_timestamp(&entry.updated_at),
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pal_core::{time, NewEntry};

    #[test]
    fn test_entry_json_carries_all_fields() {
        let when = time::parse_timestamp("2024-01-01T08:00:00.25+01:00").unwrap();
        let entry = NewEntry::new("wrote spec", "alvaro", "pal")
            .with_timestamp(when)
            .into_entry(9, when);

        let value = entry_json(&entry);
        assert_eq!(value["id"], 9);
        assert_eq!(value["author"], "alvaro");
        assert_eq!(value["timestamp"], "2024-01-01T08:00:00.250+01:00");
        assert_eq!(value.as_object().unwrap().len(), 7);
    }
}
