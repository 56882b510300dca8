//! The persisted unit: theme, content, and the signed-in flag.
//!
//! There is no schema version on the wire. Compatibility across builds comes
//! from [`AppState::from_persisted`], which lays whatever top-level keys were
//! saved over the compiled-in initial state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::SiteContent;
use crate::defaults::initial_state;
use crate::error::StoreError;
use crate::theme::ThemeSettings;

/// The whole site state, exactly as it is serialized to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub theme: ThemeSettings,
    pub content: SiteContent,
    pub is_authenticated: bool,
}

impl Default for AppState {
    fn default() -> Self {
        initial_state()
    }
}

impl AppState {
    /// Serialize to the JSON bytes written to storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(self).map_err(|e| StoreError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Rebuild a state from persisted bytes.
    ///
    /// The bytes must parse as a JSON object. Its top-level keys replace the
    /// matching keys of the initial state; keys it lacks keep their initial
    /// values. Nested objects are taken as saved, with missing fields filled
    /// from their own defaults.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Parse`] if the bytes are not JSON.
    /// - [`StoreError::NotAnObject`] if the JSON is not an object.
    /// - [`StoreError::Schema`] if the merged value does not fit the schema.
    pub fn from_persisted(bytes: &[u8]) -> Result<Self, StoreError> {
        let saved: Value = serde_json::from_slice(bytes).map_err(|e| StoreError::Parse {
            reason: e.to_string(),
        })?;
        let Value::Object(saved) = saved else {
            return Err(StoreError::NotAnObject);
        };

        let mut merged = serde_json::to_value(initial_state()).map_err(|e| {
            StoreError::Serialize {
                reason: e.to_string(),
            }
        })?;
        if let Value::Object(base) = &mut merged {
            for (key, value) in saved {
                base.insert(key, value);
            }
        }

        serde_json::from_value(merged).map_err(|e| StoreError::Schema {
            reason: e.to_string(),
        })
    }
}
