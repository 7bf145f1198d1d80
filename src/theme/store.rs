use std::cell::{ Cell, RefCell };
use std::rc::Rc;

use super::{ Theme, ThemeMarker };
use crate::configs::AppConfig;
use crate::error::StorageError;
use crate::storage::KeyValueStorage;

pub type SubscriberId = usize;

type Subscriber = Rc<dyn Fn(Theme)>;

/// Single owner of the active theme.
///
/// Storage is read once, in [`ThemeStore::initialize`]. After that the
/// in-memory value is authoritative and every change is written through on a
/// best-effort basis. Storage and marker failures are logged and swallowed.
pub struct ThemeStore {
    config: AppConfig,
    storage: Rc<dyn KeyValueStorage>,
    marker: Rc<dyn ThemeMarker>,
    current: Cell<Theme>,
    subscribers: RefCell<Vec<(SubscriberId, Subscriber)>>,
    next_id: Cell<SubscriberId>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current.get())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    pub fn initialize(
        config: AppConfig,
        storage: Rc<dyn KeyValueStorage>,
        marker: Rc<dyn ThemeMarker>
    ) -> Self {
        let theme = Self::read_persisted(&config, storage.as_ref());
        let store = Self {
            config,
            storage,
            marker,
            current: Cell::new(theme),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        };
        store.sync_marker();
        store
    }

    fn read_persisted(config: &AppConfig, storage: &dyn KeyValueStorage) -> Theme {
        match storage.get(config.storage_key) {
            Ok(Some(raw)) =>
                match raw.parse::<Theme>() {
                    Ok(theme) => {
                        log::info!("Restored {} theme from storage", theme);
                        theme
                    }
                    Err(e) => {
                        log::warn!("Ignoring persisted value ({}), using {}", e, config.default_theme);
                        config.default_theme
                    }
                }
            Ok(None) => {
                log::info!("No persisted theme, using {}", config.default_theme);
                config.default_theme
            }
            Err(StorageError::Unavailable) => {
                log::info!("Storage unavailable, using {} in memory only", config.default_theme);
                config.default_theme
            }
            Err(e) => {
                log::warn!("Failed to read theme: {}", e);
                config.default_theme
            }
        }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Flips the theme and returns the new value.
    ///
    /// The marker and every subscriber see the new value before this returns.
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);
        log::debug!("Theme toggled to {}", next);

        self.sync_marker();
        self.persist(next);
        self.notify(next);
        next
    }

    pub fn subscribe(&self, subscriber: impl Fn(Theme) + 'static) -> SubscriberId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    fn sync_marker(&self) {
        if let Err(e) = self.marker.set_marked(self.current().is_dark()) {
            log::warn!("Failed to sync {:?} marker: {}", self.config.marker_class, e);
        }
    }

    fn persist(&self, theme: Theme) {
        match self.storage.set(self.config.storage_key, theme.as_str()) {
            Ok(()) => {}
            Err(StorageError::Unavailable) => {
                log::debug!("Storage unavailable, {} theme kept in memory", theme);
            }
            Err(e) => log::warn!("Failed to persist theme: {}", e),
        }
    }

    fn notify(&self, theme: Theme) {
        // snapshot so subscribers may (un)subscribe while being notified
        let subscribers: Vec<Subscriber> = self.subscribers
            .borrow()
            .iter()
            .map(|(_, s)| s.clone())
            .collect();
        for subscriber in subscribers {
            subscriber(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ MemoryStorage, Unavailable };
    use crate::tests::common::{ setup, FailingStorage, RecordingMarker };

    fn store_with(
        storage: Rc<dyn KeyValueStorage>
    ) -> (ThemeStore, Rc<RecordingMarker>) {
        setup();
        let marker = Rc::new(RecordingMarker::default());
        let store = ThemeStore::initialize(AppConfig::default(), storage, marker.clone());
        (store, marker)
    }

    #[test]
    fn test_defaults_to_dark_without_persisted_value() {
        let (store, marker) = store_with(Rc::new(MemoryStorage::new()));
        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(marker.is_marked(), Some(true));
    }

    #[test]
    fn test_defaults_to_dark_when_storage_unavailable() {
        let (store, _) = store_with(Rc::new(Unavailable));
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn test_corrupt_value_normalized_to_dark() {
        for raw in ["blue", "", "LIGHT", " light"] {
            let (store, marker) = store_with(Rc::new(MemoryStorage::with_entry("theme", raw)));
            assert_eq!(store.current(), Theme::Dark, "value {:?}", raw);
            assert_eq!(marker.is_marked(), Some(true));
        }
    }

    #[test]
    fn test_read_failure_falls_back_to_dark() {
        let storage = Rc::new(FailingStorage::default());
        let (store, _) = store_with(storage);
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_new_value() {
        let storage = Rc::new(MemoryStorage::new());
        let (store, _) = store_with(storage.clone());

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(storage.peek("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        for start in ["dark", "light"] {
            let (store, _) = store_with(Rc::new(MemoryStorage::with_entry("theme", start)));
            let original = store.current();
            store.toggle();
            store.toggle();
            assert_eq!(store.current(), original);
        }
    }

    #[test]
    fn test_marker_tracks_current() {
        let (store, marker) = store_with(Rc::new(MemoryStorage::new()));
        for _ in 0..4 {
            assert_eq!(marker.is_marked(), Some(store.current().is_dark()));
            store.toggle();
        }
        assert_eq!(marker.history(), vec![true, false, true, false, true]);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_value() {
        let storage = Rc::new(FailingStorage::default());
        let (store, marker) = store_with(storage.clone());
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(storage.writes.get(), 1);
        assert_eq!(marker.is_marked(), Some(false));
    }

    #[test]
    fn test_storage_read_only_at_initialization() {
        let storage = Rc::new(MemoryStorage::with_entry("theme", "light"));
        let (store, _) = store_with(storage.clone());
        storage.set("theme", "dark").unwrap();
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_light_dark_light_scenario() {
        let storage = Rc::new(MemoryStorage::with_entry("theme", "light"));
        let (store, marker) = store_with(storage.clone());
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(marker.is_marked(), Some(false));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(marker.is_marked(), Some(true));
        assert_eq!(storage.peek("theme"), Some("dark".to_string()));

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(marker.is_marked(), Some(false));
        assert_eq!(storage.peek("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let (store, _) = store_with(Rc::new(MemoryStorage::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = store.subscribe({
            let seen = seen.clone();
            move |theme| seen.borrow_mut().push(("first", theme))
        });
        store.subscribe({
            let seen = seen.clone();
            move |theme| seen.borrow_mut().push(("second", theme))
        });

        store.toggle();
        assert!(store.unsubscribe(first));
        assert!(!store.unsubscribe(first));
        store.toggle();

        assert_eq!(*seen.borrow(), vec![
            ("first", Theme::Light),
            ("second", Theme::Light),
            ("second", Theme::Dark)
        ]);
    }

    #[test]
    fn test_subscriber_sees_updated_state() {
        let storage = Rc::new(MemoryStorage::new());
        let (store, _) = store_with(storage.clone());
        let observed = Rc::new(RefCell::new(None));

        store.subscribe({
            let storage = storage.clone();
            let observed = observed.clone();
            move |theme| *observed.borrow_mut() = Some((theme, storage.peek("theme")))
        });
        store.toggle();

        assert_eq!(*observed.borrow(), Some((Theme::Light, Some("light".to_string()))));
    }
}
