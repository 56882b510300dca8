//! Shared application state for the Lumina server.
//!
//! A single [`ServerState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It owns the site store and the pieces pages and
//! editors need next to it: the access gate, the icon registry, the document
//! style scope, and the id source for new collection entries.

use std::sync::Arc;

use lumina_core::SiteStore;
use lumina_core::editor::EntryIds;
use lumina_core::gate::AccessGate;
use lumina_core::icons::IconRegistry;
use lumina_core::style::DocumentStyle;
use lumina_storage::StorageBackend;

/// Shared application state passed to all HTTP handlers.
pub struct ServerState {
    /// The site store: single source of truth for theme and content.
    pub store: SiteStore,
    /// Admin password check.
    pub gate: AccessGate,
    /// Icon names to SVG for service cards.
    pub icons: IconRegistry,
    /// Style variables published by the store, rendered into every page.
    pub style: DocumentStyle,
    /// Ids for entries added through the admin panel.
    pub ids: EntryIds,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// Open the site store over `storage` and wire it to a fresh style scope.
    pub async fn new(storage: Arc<dyn StorageBackend>, gate: AccessGate) -> Self {
        let style = DocumentStyle::default();
        let store = SiteStore::open(storage, Arc::new(style.clone())).await;
        Self {
            store,
            gate,
            icons: IconRegistry::default(),
            style,
            ids: EntryIds::new(),
        }
    }
}
