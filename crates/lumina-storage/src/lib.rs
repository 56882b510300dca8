//! Storage backend abstraction for Lumina.
//!
//! This crate defines the [`StorageBackend`] trait — a plain key-value
//! interface that knows nothing about themes, pages, or content. The site
//! store in `lumina-core` serializes its whole state into a single value and
//! writes it through this trait.
//!
//! Three implementations are provided:
//!
//! - [`FileBackend`] — default persistent backend, one file per key
//! - [`RocksDbBackend`] — backed by `RocksDB` (feature `rocksdb-backend`)
//! - [`MemoryBackend`] — in-memory, for tests and throwaway sessions

mod error;
mod file;
mod memory;
#[cfg(feature = "rocksdb-backend")]
mod rocksdb_backend;

pub use error::StorageError;
pub use file::FileBackend;
pub use memory::MemoryBackend;
#[cfg(feature = "rocksdb-backend")]
pub use rocksdb_backend::RocksDbBackend;

/// A pluggable key-value storage backend.
///
/// Keys are short ASCII identifiers such as `lumina_site_state`. Values are
/// opaque byte arrays; the site store writes UTF-8 JSON.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync + 'static {
    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the underlying backend fails.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store a value, overwriting whatever was stored under the key before.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the underlying backend fails.
    async fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Delete`] if the underlying backend fails.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether a key exists in storage.
    ///
    /// The default implementation calls [`get`](StorageBackend::get) and checks
    /// for `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the underlying backend fails.
    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key).await?.is_some())
    }
}
