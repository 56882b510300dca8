//! Lumina server entry point.
//!
//! Opens the storage backend and site store, then starts the Axum HTTP server
//! with graceful shutdown. A background task logs every store revision and
//! stops on shutdown.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, info};

use lumina_core::AppState;
use lumina_core::gate::AccessGate;
use lumina_storage::{FileBackend, MemoryBackend, StorageBackend};

use lumina_server::build_router;
use lumina_server::config::{ServerConfig, StorageBackendType};
use lumina_server::state::ServerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(storage = ?config.storage_backend, "Lumina starting");

    let storage = open_storage(&config.storage_backend)?;
    let gate = AccessGate::new(config.admin_password.clone());
    let state = Arc::new(ServerState::new(storage, gate).await);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let revision_logger = {
        let updates = state.store.subscribe();
        let mut rx = shutdown_rx.clone();
        tokio::spawn(async move {
            log_revisions(updates, &mut rx).await;
        })
    };

    let app = build_router(Arc::clone(&state));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "Lumina server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await
        .context("server error")?;

    info!("waiting for background tasks to stop");
    let _ = tokio::time::timeout(Duration::from_secs(5), revision_logger).await;

    info!("Lumina server stopped");
    Ok(())
}

/// Open the configured storage backend.
fn open_storage(backend: &StorageBackendType) -> anyhow::Result<Arc<dyn StorageBackend>> {
    let storage: Arc<dyn StorageBackend> = match backend {
        StorageBackendType::Memory => {
            info!("using in-memory storage (site edits will not persist)");
            Arc::new(MemoryBackend::new())
        }
        StorageBackendType::File { path } => {
            info!(path = %path, "using file storage");
            Arc::new(FileBackend::open(path).context("failed to open file storage")?)
        }
        #[cfg(feature = "rocksdb-backend")]
        StorageBackendType::RocksDb { path } => {
            info!(path = %path, "using RocksDB storage");
            Arc::new(
                lumina_storage::RocksDbBackend::open(path)
                    .context("failed to open RocksDB storage")?,
            )
        }
        #[cfg(not(feature = "rocksdb-backend"))]
        StorageBackendType::RocksDb { .. } => {
            anyhow::bail!("RocksDB backend requested but feature 'rocksdb-backend' is not enabled");
        }
    };
    Ok(storage)
}

/// Log each store revision until shutdown.
async fn log_revisions(
    mut updates: watch::Receiver<Arc<AppState>>,
    shutdown: &mut watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    return;
                }
                let state = Arc::clone(&*updates.borrow_and_update());
                debug!(
                    authenticated = state.is_authenticated,
                    mode = %state.theme.mode,
                    services = state.content.services.len(),
                    posts = state.content.blog.len(),
                    "site state updated"
                );
            }
            _ = shutdown.changed() => {
                return;
            }
        }
    }
}

/// Wait for SIGINT or SIGTERM, then broadcast shutdown.
async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
    let _ = shutdown_tx.send(true);
}
