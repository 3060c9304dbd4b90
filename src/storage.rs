//! Key/value persistence used by the cart and the theme preference.
//!
//! In the browser this is `window.localStorage`. Native builds (SSR, tests)
//! have no such storage: [`LocalStorage`] reports [`StorageError::Unavailable`]
//! there and [`MemoryStore`] stands in for it.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Storage key holding the JSON-encoded cart.
pub const CART_KEY: &str = "cart";

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No window / storage object (SSR, private mode, native build)
    #[error("browser storage is not available")]
    Unavailable,
    /// The browser rejected the call (quota exceeded, security error, ...)
    #[error("browser storage error: {0}")]
    Browser(String),
}

/// Minimal string key/value interface shared by browser and in-memory storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Browser(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for LocalStorage {
    #[cfg(target_arch = "wasm32")]
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    #[cfg(target_arch = "wasm32")]
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// In-process storage. Backs native tests and any host without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one key already set.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Raw value for `key`, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("cart").unwrap(), None);

        store.set_item("cart", "[]").unwrap();
        assert_eq!(store.get_item("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.raw("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::with_item(THEME_KEY, "light");
        let by_ref = &store;
        by_ref.set_item(THEME_KEY, "dark").unwrap();
        assert_eq!(store.raw(THEME_KEY).as_deref(), Some("dark"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_local_storage_unavailable_natively() {
        assert_eq!(
            LocalStorage.get_item(CART_KEY),
            Err(StorageError::Unavailable)
        );
        assert_eq!(
            LocalStorage.set_item(CART_KEY, "[]"),
            Err(StorageError::Unavailable)
        );
    }
}
