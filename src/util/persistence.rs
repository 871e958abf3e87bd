//! Durable storage for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only ever reads, writes or deletes one key. The
//! [`PreferenceStore`] seam keeps that access behind a trait so the browser
//! build can use `localStorage` while tests and headless builds use
//! [`MemoryStore`]. Each operation is a single key-set or key-delete.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StoreError;
use crate::state::theme::{Preference, Theme};

/// String key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read the preference under `key`; absent or unrecognized values are unset.
pub fn load_preference(store: &dyn PreferenceStore, key: &str) -> Result<Preference, StoreError> {
    let raw = store.get(key)?;
    Ok(Preference::parse(raw.as_deref()))
}

pub fn save_preference(store: &dyn PreferenceStore, key: &str, theme: Theme) -> Result<(), StoreError> {
    store.set(key, theme.as_str())
}

pub fn clear_preference(store: &dyn PreferenceStore, key: &str) -> Result<(), StoreError> {
    store.remove(key)
}

/// In-process store. Can be switched offline to exercise storage failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// When offline, every operation fails with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Current raw value, bypassing the offline switch.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.offline.get() { Err(StoreError::Unavailable) } else { Ok(()) }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    /// Resolve `localStorage` from the current window.
    pub fn from_window() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable),
            Err(err) => Err(js_error(&err)),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|err| js_error(&err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|err| js_error(&err))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(|err| js_error(&err))
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
