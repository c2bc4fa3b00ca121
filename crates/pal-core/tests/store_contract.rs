use std::path::{Path, PathBuf};

use pal_core::time::{self, parse_timestamp};
use pal_core::{Backend, EntryStore, NewEntry, PalError};
use tempfile::{tempdir, TempDir};

const BACKENDS: [Backend; 2] = [Backend::Sqlite, Backend::Jsonl];

fn store_path(dir: &TempDir, backend: Backend) -> PathBuf {
    dir.path().join(backend.default_file_name())
}

fn open(backend: Backend, path: &Path) -> Box<dyn EntryStore> {
    backend.open(path).expect("open should succeed")
}

#[test]
fn test_end_to_end_create_find_delete() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let mut store = open(backend, &store_path(&dir, backend));
        let t0 = parse_timestamp("2024-02-03T04:05:06.789+01:00").unwrap();

        let first = store
            .create(&NewEntry::new("wrote spec", "alvaro", "pal").with_timestamp(t0))
            .unwrap();
        assert_eq!(first.id, 1, "{backend}");
        assert_eq!(first.timestamp, t0);

        let second = store
            .create(&NewEntry::new("reviewed spec", "alvaro", "pal"))
            .unwrap();
        assert_eq!(second.id, 2, "{backend}");

        let found = store.find_by_author_and_project("alvaro", "pal", None).unwrap();
        assert_eq!(found, vec![first, second], "{backend}");

        assert_eq!(
            store.delete_by_author_and_project("alvaro", Some("pal")).unwrap(),
            2
        );
        assert!(store
            .find_by_author_and_project("alvaro", "pal", None)
            .unwrap()
            .is_empty());
    }
}

#[test]
fn test_identities_increase_across_reopen_and_deletes() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let path = store_path(&dir, backend);
        let mut ids = Vec::new();

        {
            let mut store = open(backend, &path);
            ids.push(store.create(&NewEntry::new("a", "alvaro", "pal")).unwrap().id);
            ids.push(store.create(&NewEntry::new("b", "alvaro", "pal")).unwrap().id);
        }
        {
            let mut store = open(backend, &path);
            store.delete_by_author_and_project("alvaro", None).unwrap();
            ids.push(store.create(&NewEntry::new("c", "alvaro", "pal")).unwrap().id);
        }
        {
            let mut store = open(backend, &path);
            ids.push(store.create(&NewEntry::new("d", "alvaro", "pal")).unwrap().id);
        }

        assert_eq!(ids, vec![1, 2, 3, 4], "{backend}");
    }
}

#[test]
fn test_round_trip_preserves_all_fields() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let path = store_path(&dir, backend);
        let when = parse_timestamp("2021-07-04T18:30:00.123456789-04:00").unwrap();

        let created = {
            let mut store = open(backend, &path);
            store
                .create(&NewEntry::new("fireworks", "alvaro", "home").with_timestamp(when))
                .unwrap()
        };

        let store = open(backend, &path);
        let loaded = store.find_by_id(created.id).unwrap();
        assert_eq!(loaded, created, "{backend}");
        assert_eq!(loaded.timestamp.offset(), when.offset());
        assert_eq!(loaded.timestamp.timestamp_subsec_nanos(), 123_456_789);
        assert_eq!(loaded.created_at.offset(), created.created_at.offset());
        assert_eq!(
            loaded.created_at.timestamp_subsec_nanos(),
            created.created_at.timestamp_subsec_nanos()
        );
    }
}

#[test]
fn test_creation_timestamps_bracket_the_call() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let mut store = open(backend, &store_path(&dir, backend));

        let before = time::now();
        let entry = store.create(&NewEntry::new("now", "alvaro", "pal")).unwrap();
        let after = time::now();

        assert_eq!(entry.created_at, entry.updated_at);
        assert!(before <= entry.created_at && entry.created_at <= after, "{backend}");
        assert_eq!(entry.timestamp, entry.created_at);
    }
}

#[test]
fn test_filter_is_exact_and_case_sensitive() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let mut store = open(backend, &store_path(&dir, backend));

        let wanted = store.create(&NewEntry::new("1", "alvaro", "pal")).unwrap();
        store.create(&NewEntry::new("2", "Alvaro", "pal")).unwrap();
        store.create(&NewEntry::new("3", "alvaro", "Pal")).unwrap();
        store.create(&NewEntry::new("4", "maria", "pal")).unwrap();
        store.create(&NewEntry::new("5", "alvaro", "pal ")).unwrap();

        let found = store.find_by_author_and_project("alvaro", "pal", None).unwrap();
        assert_eq!(found, vec![wanted], "{backend}");
        assert!(store
            .find_by_author_and_project("nobody", "pal", None)
            .unwrap()
            .is_empty());
    }
}

#[test]
fn test_limit_takes_first_in_storage_order() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let mut store = open(backend, &store_path(&dir, backend));
        for text in ["a", "b", "c", "d"] {
            store.create(&NewEntry::new(text, "alvaro", "pal")).unwrap();
        }

        let found = store
            .find_by_author_and_project("alvaro", "pal", Some(2))
            .unwrap();
        let texts: Vec<_> = found.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"], "{backend}");

        assert!(store
            .find_by_author_and_project("alvaro", "pal", Some(0))
            .unwrap()
            .is_empty());
        assert_eq!(
            store
                .find_by_author_and_project("alvaro", "pal", Some(10))
                .unwrap()
                .len(),
            4
        );
    }
}

#[test]
fn test_delete_all_projects_for_author() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let mut store = open(backend, &store_path(&dir, backend));
        store.create(&NewEntry::new("a", "alvaro", "work")).unwrap();
        store.create(&NewEntry::new("b", "alvaro", "home")).unwrap();
        store.create(&NewEntry::new("c", "alvaro", "pal")).unwrap();
        let kept = store.create(&NewEntry::new("d", "maria", "work")).unwrap();

        assert_eq!(store.delete_by_author_and_project("alvaro", None).unwrap(), 3);
        assert_eq!(store.delete_by_author_and_project("alvaro", None).unwrap(), 0);

        assert_eq!(
            store.find_by_author_and_project("maria", "work", None).unwrap(),
            vec![kept],
            "{backend}"
        );
    }
}

#[test]
fn test_cross_project_isolation() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let mut store = open(backend, &store_path(&dir, backend));
        let work = store.create(&NewEntry::new("standup", "alvaro", "work")).unwrap();
        store.create(&NewEntry::new("dishes", "alvaro", "home")).unwrap();

        let home = store.find_by_author_and_project("alvaro", "home", None).unwrap();
        assert!(home.iter().all(|entry| entry.project == "home"));

        assert_eq!(
            store.delete_by_author_and_project("alvaro", Some("home")).unwrap(),
            1
        );
        assert_eq!(store.find_by_id(work.id).unwrap(), work, "{backend}");
    }
}

#[test]
fn test_find_by_id_missing_is_not_found() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let store = open(backend, &store_path(&dir, backend));
        assert!(
            matches!(store.find_by_id(99), Err(PalError::NotFound(99))),
            "{backend}"
        );
    }
}

#[test]
fn test_blank_fields_rejected_without_consuming_identity() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let mut store = open(backend, &store_path(&dir, backend));

        for candidate in [
            NewEntry::new("  ", "alvaro", "pal"),
            NewEntry::new("text", " ", "pal"),
            NewEntry::new("text", "alvaro", ""),
        ] {
            assert!(matches!(
                store.create(&candidate),
                Err(PalError::Validation(_))
            ));
        }

        let entry = store.create(&NewEntry::new("text", "alvaro", "pal")).unwrap();
        assert_eq!(entry.id, 1, "{backend}");
    }
}

#[test]
fn test_unreadable_path_is_storage_error() {
    for backend in BACKENDS {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join(backend.default_file_name());
        assert!(
            matches!(backend.open(&path), Err(PalError::Storage(_))),
            "{backend}"
        );
    }
}
