//! The three persisted records: identity, tags and tasks.
//!
//! Reads never fail: anything missing or unparseable is replaced by the
//! default value. Write errors are returned so callers can log them.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::model::tag::{Tag, default_tags};
use crate::model::task::Task;

use super::storage::{KeyValueStore, StorageError};

pub const IDENTITY_KEY: &str = "mytask_email";
pub const TAGS_KEY: &str = "mytask_tags";
pub const TASKS_KEY: &str = "mytask_tasks";

/// Error type for writing a record
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("could not serialize {key}: {source}")]
    Serialize {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// The stored identity. An empty string counts as signed out.
pub fn load_identity<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    match store.get(IDENTITY_KEY) {
        Ok(Some(email)) if !email.trim().is_empty() => Some(email),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "could not read identity, treating as signed out");
            None
        }
    }
}

pub fn save_identity<S: KeyValueStore + ?Sized>(store: &mut S, email: &str) -> Result<(), RecordError> {
    store.set(IDENTITY_KEY, email)?;
    Ok(())
}

pub fn clear_identity<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), RecordError> {
    store.remove(IDENTITY_KEY)?;
    Ok(())
}

/// The stored tag collection, or the default tags. Protected tags missing
/// from a stored collection are put back in front.
pub fn load_tags<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Tag> {
    let Some(stored) = load_json::<_, Vec<Tag>>(store, TAGS_KEY) else {
        return default_tags();
    };
    let mut tags: Vec<Tag> = default_tags()
        .into_iter()
        .filter(|d| !stored.iter().any(|t| t.id == d.id))
        .collect();
    if !tags.is_empty() {
        let missing: Vec<&str> = tags.iter().map(|t| t.id.as_str()).collect();
        warn!(?missing, "stored tags lack protected tags, restoring them");
    }
    tags.extend(stored);
    tags
}

pub fn save_tags<S: KeyValueStore + ?Sized>(store: &mut S, tags: &[Tag]) -> Result<(), RecordError> {
    save_json(store, TAGS_KEY, tags)
}

/// The stored task collection, or an empty one
pub fn load_tasks<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Task> {
    load_json(store, TASKS_KEY).unwrap_or_default()
}

pub fn save_tasks<S: KeyValueStore + ?Sized>(store: &mut S, tasks: &[Task]) -> Result<(), RecordError> {
    save_json(store, TASKS_KEY, tasks)
}

fn load_json<S: KeyValueStore + ?Sized, T: DeserializeOwned>(store: &S, key: &'static str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored record, using default");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "could not read record, using default");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "malformed record, using default");
            None
        }
    }
}

fn save_json<S: KeyValueStore + ?Sized, T: Serialize + ?Sized>(
    store: &mut S,
    key: &'static str,
    value: &T,
) -> Result<(), RecordError> {
    let json =
        serde_json::to_string(value).map_err(|source| RecordError::Serialize { key, source })?;
    store.set(key, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_gives_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_identity(&store), None);
        assert_eq!(load_tags(&store), default_tags());
        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn malformed_records_fall_back() {
        let store = MemoryStore::new()
            .with(TAGS_KEY, "not json {{{")
            .with(TASKS_KEY, r#"[{"id":1}]"#);
        assert_eq!(load_tags(&store), default_tags());
        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn blank_identity_is_signed_out() {
        let store = MemoryStore::new().with(IDENTITY_KEY, "");
        assert_eq!(load_identity(&store), None);
    }

    #[test]
    fn collections_round_trip() {
        let mut store = MemoryStore::new();
        let mut tags = default_tags();
        tags.push(Tag::new("1700000000000", "Sport", "#14B8A6"));
        let tasks = vec![
            Task::new("1700000000001", "Run", "1700000000000").with_due_date("2025-04-01"),
            Task::new("1700000000002", "Read", "2").with_completed(true),
        ];

        save_tags(&mut store, &tags).unwrap();
        save_tasks(&mut store, &tasks).unwrap();
        save_identity(&mut store, "user@yopmail.com").unwrap();

        assert_eq!(load_tags(&store), tags);
        assert_eq!(load_tasks(&store), tasks);
        assert_eq!(load_identity(&store).as_deref(), Some("user@yopmail.com"));

        clear_identity(&mut store).unwrap();
        assert_eq!(load_identity(&store), None);
    }

    #[test]
    fn stored_empty_tag_list_gets_defaults_back() {
        let store = MemoryStore::new().with(TAGS_KEY, "[]");
        assert_eq!(load_tags(&store), default_tags());
    }

    #[test]
    fn missing_protected_tags_are_restored() {
        let store = MemoryStore::new().with(
            TAGS_KEY,
            r##"[{"id":"2","label":"Ecole","color":"#FF5E78"},{"id":"t9","label":"Sport","color":"#14B8A6"}]"##,
        );
        let ids: Vec<String> = load_tags(&store).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5", "2", "t9"]);
    }
}
