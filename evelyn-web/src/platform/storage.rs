//! `localStorage` backend for the mission log.
use evelyn_game::LogStorage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected the operation: {0}")]
    Rejected(String),
}

/// Mission log stored in the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebLogStorage;

#[cfg(target_arch = "wasm32")]
fn storage() -> Result<web_sys::Storage, WebStorageError> {
    crate::dom::local_storage()
        .map_err(|err| WebStorageError::Unavailable(crate::dom::js_error_message(&err)))
}

impl LogStorage for WebLogStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .get_item(key)
                .map_err(|err| WebStorageError::Rejected(crate::dom::js_error_message(&err)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .set_item(key, payload)
                .map_err(|err| WebStorageError::Rejected(crate::dom::js_error_message(&err)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, payload);
            Err(WebStorageError::Unavailable("not running in a browser".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evelyn_game::MissionLogStore;

    #[test]
    fn native_builds_start_with_an_empty_log() {
        let store = MissionLogStore::open(WebLogStorage);
        assert!(store.is_empty());
    }

    #[test]
    fn native_write_failure_is_absorbed_by_the_store() {
        let mut store = MissionLogStore::open(WebLogStorage);
        store.append(evelyn_game::LogEntry {
            date: "01/01/2026".into(),
            task: "offline".into(),
            reward: evelyn_game::Reward::Photos { photos: vec![] },
        });
        assert_eq!(store.len(), 1);
    }
}
