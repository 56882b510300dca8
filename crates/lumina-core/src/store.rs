//! The site store: single owner of [`AppState`] and its sync contract.
//!
//! Every mutation goes through [`SiteStore::dispatch`] or
//! [`SiteStore::update`]. One mutation runs to completion before the next
//! starts:
//!
//! 1. reduce the current state with the action,
//! 2. serialize the whole new state and write it under [`STATE_KEY`]
//!    (failures are logged and otherwise ignored),
//! 3. publish style variables if the theme changed,
//! 4. replace the snapshot seen by readers and subscribers.
//!
//! Readers and subscribers only ever see complete post-mutation snapshots.

use std::sync::Arc;

use lumina_storage::StorageBackend;
use tokio::sync::{Mutex, watch};
use tracing::{debug, error, info, warn};

use crate::action::Action;
use crate::error::StoreError;
use crate::reducer::reduce;
use crate::state::AppState;
use crate::style::{StylePublisher, StyleVariables};

/// Storage key the site state is persisted under.
pub const STATE_KEY: &str = "lumina_site_state";

pub struct SiteStore {
    storage: Arc<dyn StorageBackend>,
    style: Arc<dyn StylePublisher>,
    key: String,
    current: watch::Sender<Arc<AppState>>,
    dispatch_lock: Mutex<()>,
}

impl std::fmt::Debug for SiteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl SiteStore {
    /// Open the store over `storage`, using [`STATE_KEY`].
    ///
    /// Loads saved state (falling back to defaults), publishes the theme's
    /// style variables, and writes the loaded state back once.
    pub async fn open(storage: Arc<dyn StorageBackend>, style: Arc<dyn StylePublisher>) -> Self {
        Self::open_with_key(storage, style, STATE_KEY).await
    }

    /// Like [`open`](Self::open) with a custom storage key.
    pub async fn open_with_key(
        storage: Arc<dyn StorageBackend>,
        style: Arc<dyn StylePublisher>,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let state = Self::load(storage.as_ref(), &key).await;
        let (current, _rx) = watch::channel(Arc::new(state));

        let store = Self {
            storage,
            style,
            key,
            current,
            dispatch_lock: Mutex::new(()),
        };

        let initial = store.snapshot();
        store.style.publish(&StyleVariables::from(&initial.theme));
        store.persist(&initial).await;
        info!(
            key = %store.key,
            authenticated = initial.is_authenticated,
            "site store opened"
        );
        store
    }

    /// Read the persisted state under `key`, or the initial state.
    ///
    /// Missing state is normal on first run. Any read or decode failure is
    /// logged and treated as missing.
    pub async fn load(storage: &dyn StorageBackend, key: &str) -> AppState {
        match Self::try_load(storage, key).await {
            Ok(Some(state)) => state,
            Ok(None) => {
                debug!(key, "no saved state, using defaults");
                AppState::default()
            }
            Err(e) => {
                error!(key, error = %e, "failed to load saved state, using defaults");
                AppState::default()
            }
        }
    }

    async fn try_load(
        storage: &dyn StorageBackend,
        key: &str,
    ) -> Result<Option<AppState>, StoreError> {
        let Some(bytes) = storage.get(key).await? else {
            return Ok(None);
        };
        AppState::from_persisted(&bytes).map(Some)
    }

    /// The current state.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.current.borrow())
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.current.subscribe()
    }

    /// Apply `action` and run its side effects, returning the new state.
    ///
    /// Unrecognized actions return the current state and have no effects.
    pub async fn dispatch(&self, action: Action) -> Arc<AppState> {
        self.update(|_| Some(action)).await
    }

    /// Build an action from the current state and apply it, all under the
    /// dispatch lock, so edits derived from a slice never overwrite each
    /// other. `build` returning `None` leaves the state untouched.
    pub async fn update<F>(&self, build: F) -> Arc<AppState>
    where
        F: FnOnce(&AppState) -> Option<Action>,
    {
        let _guard = self.dispatch_lock.lock().await;
        let previous = self.snapshot();

        let Some(action) = build(&previous) else {
            return previous;
        };
        if action == Action::Unrecognized {
            debug!("ignoring unrecognized action");
            return previous;
        }

        let next = Arc::new(reduce(&previous, &action));

        self.persist(&next).await;

        if next.theme != previous.theme {
            self.style.publish(&StyleVariables::from(&next.theme));
        }

        self.current.send_replace(Arc::clone(&next));
        debug!(action = action.tag(), "action applied");
        next
    }

    /// Write `state` to storage. Failures are logged, never returned.
    async fn persist(&self, state: &AppState) {
        let result = match state.to_json() {
            Ok(bytes) => self
                .storage
                .put(&self.key, &bytes)
                .await
                .map_err(StoreError::from),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            warn!(key = %self.key, error = %e, "failed to persist site state");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use lumina_storage::{MemoryBackend, StorageError};

    use super::*;
    use crate::content::{ContentPatch, Testimonial};
    use crate::defaults::initial_state;
    use crate::editor::{self, EntryIds};
    use crate::style::DocumentStyle;
    use crate::theme::{ThemeMode, ThemePatch};

    /// Records every publication.
    #[derive(Default)]
    struct RecordingStyle {
        published: StdMutex<Vec<StyleVariables>>,
    }

    impl RecordingStyle {
        fn count(&self) -> usize {
            self.published.lock().unwrap().len()
        }

        fn last(&self) -> Option<StyleVariables> {
            self.published.lock().unwrap().last().cloned()
        }
    }

    impl StylePublisher for RecordingStyle {
        fn publish(&self, vars: &StyleVariables) {
            self.published.lock().unwrap().push(vars.clone());
        }
    }

    /// Reads nothing and fails every write.
    struct FullDisk;

    #[async_trait::async_trait]
    impl StorageBackend for FullDisk {
        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Ok(None)
        }

        async fn put(&self, key: &str, _value: &[u8]) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            })
        }

        async fn delete(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    /// Fails every read.
    struct UnreadableDisk;

    #[async_trait::async_trait]
    impl StorageBackend for UnreadableDisk {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Err(StorageError::Read {
                key: key.to_owned(),
                reason: "io error".to_owned(),
            })
        }

        async fn put(&self, _key: &str, _value: &[u8]) -> Result<(), StorageError> {
            Ok(())
        }

        async fn delete(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    async fn saved_state(backend: &MemoryBackend) -> AppState {
        let bytes = backend.get(STATE_KEY).await.unwrap().unwrap();
        AppState::from_persisted(&bytes).unwrap()
    }

    fn dark_theme() -> Action {
        Action::SetTheme(ThemePatch {
            mode: Some(ThemeMode::Dark),
            ..ThemePatch::default()
        })
    }

    #[tokio::test]
    async fn fresh_storage_opens_with_initial_state() {
        let backend = MemoryBackend::new();
        let store = SiteStore::open(Arc::new(backend.clone()), Arc::new(DocumentStyle::default())).await;

        assert_eq!(*store.snapshot(), initial_state());
        assert_eq!(saved_state(&backend).await, initial_state());
    }

    #[tokio::test]
    async fn corrupted_storage_falls_back_to_initial_state() {
        let corrupted: [&str; 5] = ["{not json", "null", "\"text\"", "[]", r#"{"theme":7}"#];
        for garbage in corrupted {
            let backend = MemoryBackend::with_value(STATE_KEY, garbage);
            let store =
                SiteStore::open(Arc::new(backend), Arc::new(DocumentStyle::default())).await;
            assert_eq!(*store.snapshot(), initial_state());
        }
    }

    #[tokio::test]
    async fn unreadable_storage_falls_back_to_initial_state() {
        let store = SiteStore::open(Arc::new(UnreadableDisk), Arc::new(DocumentStyle::default())).await;
        assert_eq!(*store.snapshot(), initial_state());
    }

    #[tokio::test]
    async fn saved_state_is_merged_over_defaults() {
        let backend = MemoryBackend::with_value(
            STATE_KEY,
            r#"{"isAuthenticated":true,"theme":{"mode":"dark","font":"Roboto"}}"#,
        );
        let store = SiteStore::open(Arc::new(backend), Arc::new(DocumentStyle::default())).await;

        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert!(state.theme.is_dark());
        assert_eq!(state.theme.font, "Roboto");
        assert_eq!(state.theme.primary_color, "#3B82F6");
        assert_eq!(state.content, initial_state().content);
    }

    #[tokio::test]
    async fn every_dispatch_is_persisted() {
        let backend = MemoryBackend::new();
        let store = SiteStore::open(Arc::new(backend.clone()), Arc::new(DocumentStyle::default())).await;

        store.dispatch(Action::Login).await;
        assert!(saved_state(&backend).await.is_authenticated);

        let after = store.dispatch(dark_theme()).await;
        assert_eq!(saved_state(&backend).await, *after);

        store.dispatch(Action::Logout).await;
        assert!(!saved_state(&backend).await.is_authenticated);
    }

    #[tokio::test]
    async fn persisted_state_reloads_identically() {
        let backend = MemoryBackend::new();
        let store = SiteStore::open(Arc::new(backend.clone()), Arc::new(DocumentStyle::default())).await;
        store.dispatch(Action::Login).await;
        store.dispatch(dark_theme()).await;
        let mut services = store.snapshot().content.services.clone();
        services.remove(0);
        let expected = store
            .dispatch(Action::UpdateContent(ContentPatch {
                services: Some(services),
                ..ContentPatch::default()
            }))
            .await;

        let reopened = SiteStore::open(Arc::new(backend), Arc::new(DocumentStyle::default())).await;
        assert_eq!(reopened.snapshot(), expected);
    }

    #[tokio::test]
    async fn write_failures_do_not_affect_memory_state() {
        let store = SiteStore::open(Arc::new(FullDisk), Arc::new(DocumentStyle::default())).await;
        let after = store.dispatch(Action::Login).await;
        assert!(after.is_authenticated);
        assert!(store.snapshot().is_authenticated);
    }

    #[tokio::test]
    async fn style_is_published_on_open_and_on_theme_change_only() {
        let style = Arc::new(RecordingStyle::default());
        let store = SiteStore::open(Arc::new(MemoryBackend::new()), Arc::clone(&style) as Arc<dyn StylePublisher>).await;
        assert_eq!(style.count(), 1);

        store.dispatch(Action::Login).await;
        assert_eq!(style.count(), 1);

        store.dispatch(dark_theme()).await;
        assert_eq!(style.count(), 2);
        assert!(style.last().unwrap().dark);

        // Same value again: theme unchanged, nothing to publish.
        store.dispatch(dark_theme()).await;
        assert_eq!(style.count(), 2);

        store.dispatch(Action::ResetDefaults).await;
        assert_eq!(style.count(), 3);
        assert!(!style.last().unwrap().dark);
    }

    #[tokio::test]
    async fn unrecognized_action_has_no_effects() {
        let backend = MemoryBackend::new();
        let style = Arc::new(RecordingStyle::default());
        let store = SiteStore::open(Arc::new(backend.clone()), Arc::clone(&style) as Arc<dyn StylePublisher>).await;
        backend.delete(STATE_KEY).await.unwrap();
        let mut rx = store.subscribe();
        rx.mark_unchanged();

        let before = store.snapshot();
        let after = store.dispatch(Action::Unrecognized).await;

        assert_eq!(after, before);
        assert!(!backend.exists(STATE_KEY).await.unwrap());
        assert_eq!(style.count(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscribers_see_post_mutation_state() {
        let store = Arc::new(
            SiteStore::open(Arc::new(MemoryBackend::new()), Arc::new(DocumentStyle::default())).await,
        );
        let mut rx = store.subscribe();
        rx.mark_unchanged();

        let watcher = tokio::spawn(async move {
            rx.changed().await.unwrap();
            Arc::clone(&*rx.borrow_and_update())
        });

        store.dispatch(Action::Login).await;
        let seen = watcher.await.unwrap();
        assert!(seen.is_authenticated);
    }

    #[tokio::test]
    async fn concurrent_dispatches_are_serialized() {
        let backend = MemoryBackend::new();
        let store = Arc::new(
            SiteStore::open(Arc::new(backend.clone()), Arc::new(DocumentStyle::default())).await,
        );

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .dispatch(Action::SetTheme(ThemePatch {
                        font: Some(format!("Font {i}")),
                        ..ThemePatch::default()
                    }))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Whatever won last is both in memory and on disk.
        assert_eq!(saved_state(&backend).await, *store.snapshot());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_slice_edits_all_land() {
        let backend = MemoryBackend::new();
        let store = Arc::new(
            SiteStore::open(Arc::new(backend.clone()), Arc::new(DocumentStyle::default())).await,
        );
        let ids = Arc::new(EntryIds::new());
        let before = store.snapshot().content.testimonials.len();

        let mut handles = Vec::new();
        for _ in 0..25 {
            let store = Arc::clone(&store);
            let ids = Arc::clone(&ids);
            handles.push(tokio::spawn(async move {
                store
                    .update(|state| {
                        let entry: Testimonial = ids.placeholder();
                        Some(editor::appended(&state.content, entry))
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.snapshot().content.testimonials.len(), before + 25);
        assert_eq!(saved_state(&backend).await, *store.snapshot());
    }

    #[tokio::test]
    async fn update_without_action_has_no_effects() {
        let backend = MemoryBackend::new();
        let style = Arc::new(RecordingStyle::default());
        let store = SiteStore::open(
            Arc::new(backend.clone()),
            Arc::clone(&style) as Arc<dyn StylePublisher>,
        )
        .await;
        backend.delete(STATE_KEY).await.unwrap();
        let mut rx = store.subscribe();
        rx.mark_unchanged();

        let before = store.snapshot();
        let after = store.update(|_| None).await;

        assert!(Arc::ptr_eq(&before, &after));
        assert!(!backend.exists(STATE_KEY).await.unwrap());
        assert_eq!(style.count(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn custom_key_is_used_for_persistence() {
        let backend = MemoryBackend::new();
        let _store = SiteStore::open_with_key(
            Arc::new(backend.clone()),
            Arc::new(DocumentStyle::default()),
            "preview_state",
        )
        .await;
        assert!(backend.exists("preview_state").await.unwrap());
        assert!(!backend.exists(STATE_KEY).await.unwrap());
    }
}
