//! Opaque captured state.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{SaveError, SaveResult};

/// A serialized copy of some state, kept as a JSON value.
///
/// Saves never look inside a snapshot; they only compare and store it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(serde_json::Value);

impl Snapshot {
    /// Capture a value.
    pub fn capture<T: Serialize>(value: &T) -> SaveResult<Self> {
        serde_json::to_value(value)
            .map(Self)
            .map_err(SaveError::Serialize)
    }

    /// Decode the captured value.
    pub fn restore<T: DeserializeOwned>(&self) -> SaveResult<T> {
        T::deserialize(&self.0).map_err(SaveError::Deserialize)
    }

    /// The raw JSON.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Snapshot {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Hero {
        name: String,
        hp: u32,
    }

    #[test]
    fn capture_and_restore() {
        let hero = Hero {
            name: "Ada".into(),
            hp: 7,
        };
        let snap = Snapshot::capture(&hero).unwrap();
        assert_eq!(snap.as_value(), &json!({ "name": "Ada", "hp": 7 }));
        assert_eq!(snap.restore::<Hero>().unwrap(), hero);
    }

    #[test]
    fn restore_wrong_shape() {
        let snap = Snapshot::from(json!({ "name": 3 }));
        assert!(matches!(
            snap.restore::<Hero>(),
            Err(SaveError::Deserialize(_))
        ));
    }

    #[test]
    fn serializes_transparently() {
        let snap = Snapshot::from(json!([1, 2]));
        assert_eq!(serde_json::to_string(&snap).unwrap(), "[1,2]");
    }
}
