//! Server configuration for Lumina.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `LUMINA_*` environment variables.

use std::net::SocketAddr;

use lumina_core::gate::DEFAULT_ADMIN_PASSWORD;

/// Server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Storage backend type.
    pub storage_backend: StorageBackendType,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Shared admin password checked by the access gate.
    pub admin_password: String,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("storage_backend", &self.storage_backend)
            .field("log_level", &self.log_level)
            .field("admin_password", &"[redacted]")
            .finish()
    }
}

/// Supported storage backend types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendType {
    /// In-memory (development only, data lost on restart).
    Memory,
    /// One file per key under a directory.
    File { path: String },
    /// `RocksDB` persistent storage.
    RocksDb { path: String },
}

const DEFAULT_PORT: u16 = 8080;

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (binds to `0.0.0.0`)
    /// - `LUMINA_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `LUMINA_STORAGE` — `memory`, `file`, or `rocksdb` (default: `file`)
    /// - `LUMINA_STORAGE_PATH` — path for persistent backends (default: `./data`)
    /// - `LUMINA_LOG_LEVEL` — log filter (default: `info`)
    /// - `LUMINA_ADMIN_PASSWORD` — admin password (default: `admin123`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        // Priority: LUMINA_BIND_ADDR > PORT > default 127.0.0.1:8080
        let bind_addr = if let Some(addr) = var("LUMINA_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))
        } else if let Some(port_str) = var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(DEFAULT_PORT);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
        };

        let storage_path = var("LUMINA_STORAGE_PATH").unwrap_or_else(|| "./data".to_owned());

        let storage_backend = match var("LUMINA_STORAGE")
            .unwrap_or_else(|| "file".to_owned())
            .to_lowercase()
            .as_str()
        {
            "memory" => StorageBackendType::Memory,
            "rocksdb" => StorageBackendType::RocksDb { path: storage_path },
            _ => StorageBackendType::File { path: storage_path },
        };

        let log_level = var("LUMINA_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let admin_password = var("LUMINA_ADMIN_PASSWORD")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_owned());

        Self {
            bind_addr,
            storage_backend,
            log_level,
            admin_password,
        }
    }
}
