//! Key-value persistence.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{SaveError, SaveResult};

/// Key of the current game state.
pub const STATE_KEY: &str = "state";
/// Key of the save set.
pub const SAVES_KEY: &str = "saves";
/// Key of the color mode.
pub const COLOR_MODE_KEY: &str = "color-mode";

/// Persistent byte storage addressed by string keys.
pub trait KeyValueStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: Vec<u8>);
}

/// Store backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key has been written.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Vec<u8>) {
        self.entries.insert(key.to_string(), value);
    }
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &mut K {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) {
        (**self).set(key, value);
    }
}

/// Read and decode a JSON value. A missing key is `Ok(None)`.
pub fn load_json<T, K>(store: &K, key: &str) -> SaveResult<Option<T>>
where
    T: DeserializeOwned,
    K: KeyValueStore + ?Sized,
{
    store
        .get(key)
        .map(|bytes| serde_json::from_slice(&bytes).map_err(SaveError::Deserialize))
        .transpose()
}

/// Encode and write a JSON value.
pub fn store_json<T, K>(store: &mut K, key: &str, value: &T) -> SaveResult<()>
where
    T: Serialize + ?Sized,
    K: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec(value).map_err(SaveError::Serialize)?;
    store.set(key, bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::SaveSet;

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<SaveSet> = load_json(&store, SAVES_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn json_round_trip() {
        let mut store = MemoryStore::new();
        store_json(&mut store, "numbers", &[1u8, 2, 3]).unwrap();
        assert!(store.contains("numbers"));
        let loaded: Option<Vec<u8>> = load_json(&store, "numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn undecodable_blob_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(SAVES_KEY, b"{oops".to_vec());
        let loaded: SaveResult<Option<SaveSet>> = load_json(&store, SAVES_KEY);
        assert!(matches!(loaded, Err(SaveError::Deserialize(_))));
    }
}
