//! Append-only mission log and its storage seam.
//!
//! The whole log is serialized as one JSON array under a single key. Reads
//! and writes are best-effort: a broken backend never reaches the caller.
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::badge::Badge;
use crate::constants::LOG_STORAGE_KEY;
use crate::progress::Progress;

/// What a completed mission earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reward {
    Badge { badge: Badge },
    Photos { photos: Vec<String> },
}

impl Reward {
    #[must_use]
    pub const fn badge(&self) -> Option<&Badge> {
        match self {
            Self::Badge { badge } => Some(badge),
            Self::Photos { .. } => None,
        }
    }

    #[must_use]
    pub fn photos(&self) -> &[String] {
        match self {
            Self::Photos { photos } => photos,
            Self::Badge { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub task: String,
    #[serde(flatten)]
    pub reward: Reward,
}

/// Key-value backend holding the serialized log.
/// Platform-specific implementations should provide this
pub trait LogStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write (quota, privacy mode).
    fn write(&self, key: &str, payload: &str) -> Result<(), Self::Error>;
}

/// Parse the stored log. Missing, unreadable or malformed data yields an empty log.
pub fn read_log<S: LogStorage>(storage: &S) -> Vec<LogEntry> {
    let raw = match storage.read(LOG_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("mission log unreadable, starting empty: {err}");
            return Vec::new();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::warn!("mission log malformed, starting empty: {err}");
        Vec::new()
    })
}

/// In-memory view of the mission log backed by a [`LogStorage`].
#[derive(Debug, Clone)]
pub struct MissionLogStore<S> {
    storage: S,
    entries: Vec<LogEntry>,
}

impl<S: LogStorage> MissionLogStore<S> {
    /// Open the store and load whatever the backend holds.
    pub fn open(storage: S) -> Self {
        let entries = read_log(&storage);
        Self { storage, entries }
    }

    /// Reload from the backend, replacing the in-memory entries.
    pub fn load(&mut self) -> &[LogEntry] {
        self.entries = read_log(&self.storage);
        &self.entries
    }

    /// Append an entry and persist the full sequence.
    ///
    /// A failed write keeps the entry in memory for this session only.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        match serde_json::to_string(&self.entries) {
            Ok(payload) => {
                if let Err(err) = self.storage.write(LOG_STORAGE_KEY, &payload) {
                    log::warn!("mission log not persisted: {err}");
                }
            }
            Err(err) => log::warn!("mission log not serialized: {err}"),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries in reverse insertion order, as the trophy room lists them.
    pub fn newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::from_missions(self.entries.len())
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryStorageError {
    #[error("simulated {0} failure")]
    Simulated(&'static str),
}

/// Shared in-memory backend used by tests and the tester harness.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryLogStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload under the log key.
    #[must_use]
    pub fn with_raw(payload: &str) -> Self {
        let storage = Self::default();
        storage
            .values
            .borrow_mut()
            .insert(LOG_STORAGE_KEY.to_string(), payload.to_string());
        storage
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.values.borrow().get(LOG_STORAGE_KEY).cloned()
    }
}

impl LogStorage for MemoryLogStorage {
    type Error = MemoryStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.fail_reads.get() {
            return Err(MemoryStorageError::Simulated("read"));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), Self::Error> {
        if self.fail_writes.get() {
            return Err(MemoryStorageError::Simulated("write"));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo_entry(task: &str) -> LogEntry {
        LogEntry {
            date: "16/10/2026".to_string(),
            task: task.to_string(),
            reward: Reward::Photos {
                photos: vec!["data:image/png;base64,AAAA".to_string()],
            },
        }
    }

    fn badge_entry(task: &str) -> LogEntry {
        LogEntry {
            date: "16/10/2026".to_string(),
            task: task.to_string(),
            reward: Reward::Badge {
                badge: Badge {
                    id: 7,
                    title: "Gold Agent".to_string(),
                    color: "#f59e0b".to_string(),
                    icon: "🧭".to_string(),
                    rarity: "Gold".to_string(),
                    task: task.to_string(),
                    date: "16/10/2026".to_string(),
                },
            },
        }
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = MissionLogStore::open(MemoryLogStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_payload_loads_empty() {
        for raw in ["", "{", "null", "{\"date\":1}", "[{\"task\":\"x\"}]"] {
            let store = MissionLogStore::open(MemoryLogStorage::with_raw(raw));
            assert!(store.is_empty(), "payload {raw:?} should load empty");
        }
    }

    #[test]
    fn unreadable_backend_loads_empty() {
        let storage = MemoryLogStorage::new();
        storage.set_fail_reads(true);
        assert!(MissionLogStore::open(storage).is_empty());
    }

    #[test]
    fn append_persists_and_reloads_in_order() {
        let storage = MemoryLogStorage::new();
        let mut store = MissionLogStore::open(storage.clone());
        store.append(badge_entry("first"));
        store.append(photo_entry("second"));

        let reopened = MissionLogStore::open(storage);
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.entries()[0], badge_entry("first"));
        assert_eq!(reopened.entries()[1], photo_entry("second"));
        let newest: Vec<&str> = reopened.newest_first().map(|e| e.task.as_str()).collect();
        assert_eq!(newest, ["second", "first"]);
    }

    #[test]
    fn failed_write_keeps_entry_in_memory() {
        let storage = MemoryLogStorage::new();
        storage.set_fail_writes(true);
        let mut store = MissionLogStore::open(storage.clone());
        store.append(badge_entry("offline"));
        assert_eq!(store.len(), 1);
        assert!(storage.raw().is_none());
        assert!(store.load().is_empty());
    }

    #[test]
    fn serialized_shape_uses_badge_and_photos_keys() {
        let json = serde_json::to_value(badge_entry("x")).unwrap();
        assert_eq!(json["badge"]["rarity"], "Gold");
        assert_eq!(json["task"], "x");
        let json = serde_json::to_value(photo_entry("y")).unwrap();
        assert_eq!(json["photos"][0], "data:image/png;base64,AAAA");
    }

    #[test]
    fn progress_tracks_entry_count() {
        let mut store = MissionLogStore::open(MemoryLogStorage::new());
        for i in 0..5 {
            store.append(photo_entry(&format!("task {i}")));
        }
        let progress = store.progress();
        assert_eq!(progress.xp, 125);
        assert_eq!(progress.level, 2);
    }
}
