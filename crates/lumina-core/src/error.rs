//! Error types for `lumina-core`.
//!
//! None of these are fatal. The store recovers from every load error by
//! falling back to defaults and swallows write errors after logging them;
//! the variants exist so that callers and logs can say what went wrong.

use lumina_storage::StorageError;

/// Errors from loading or saving the site state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error("state storage error: {0}")]
    Storage(#[from] StorageError),

    /// The state could not be encoded.
    #[error("failed to serialize state: {reason}")]
    Serialize { reason: String },

    /// The persisted value is not valid JSON.
    #[error("persisted state is not valid JSON: {reason}")]
    Parse { reason: String },

    /// The persisted value is JSON but not an object.
    #[error("persisted state is not a JSON object")]
    NotAnObject,

    /// The persisted value, merged over defaults, does not fit the schema.
    #[error("persisted state does not match the schema: {reason}")]
    Schema { reason: String },
}

/// Errors from the admin access gate.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GateError {
    /// The submitted password did not match.
    #[error("Invalid password")]
    InvalidPassword,
}
