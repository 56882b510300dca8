//! In-memory storage backend.
//!
//! Data lives in a `HashMap` behind a `RwLock` and is lost when the process
//! exits. Used by tests and by `LUMINA_STORAGE=memory` for throwaway preview
//! sessions.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{StorageBackend, StorageError};

/// An in-memory storage backend.
///
/// Clones share the same map, so a test can keep one handle to inspect what
/// the store wrote through another.
///
/// # Examples
///
/// ```
/// # use lumina_storage::{MemoryBackend, StorageBackend};
/// # #[tokio::main]
/// # async fn main() {
/// let backend = MemoryBackend::new();
/// backend.put("lumina_site_state", b"{}").await.unwrap();
/// let val = backend.get("lumina_site_state").await.unwrap();
/// assert_eq!(val, Some(b"{}".to_vec()));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with one value.
    #[must_use]
    pub fn with_value(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let mut map = HashMap::new();
        map.insert(key.to_owned(), value.into());
        Self {
            data: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut data = self.data.write().await;
        data.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut data = self.data.write().await;
        data.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let data = self.data.read().await;
        Ok(data.contains_key(key))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("lumina_site_state").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_previous_value() {
        let backend = MemoryBackend::new();
        backend.put("state", b"v1").await.unwrap();
        backend.put("state", b"v2").await.unwrap();
        assert_eq!(backend.get("state").await.unwrap(), Some(b"v2".to_vec()));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let backend = MemoryBackend::with_value("state", "x");
        backend.delete("state").await.unwrap();
        backend.delete("state").await.unwrap();
        assert!(!backend.exists("state").await.unwrap());
    }

    #[tokio::test]
    async fn seeded_value_is_visible() {
        let backend = MemoryBackend::with_value("state", "{\"a\":1}");
        assert!(backend.exists("state").await.unwrap());
        assert_eq!(
            backend.get("state").await.unwrap(),
            Some(b"{\"a\":1}".to_vec())
        );
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let backend = MemoryBackend::new();
        let observer = backend.clone();
        backend.put("state", b"val").await.unwrap();
        assert_eq!(observer.get("state").await.unwrap(), Some(b"val".to_vec()));
    }
}
