//! Saved mode preference backed by `localStorage`.
use persona_core::PreferenceStore;
use web_sys::Storage;

use crate::dom;

/// Web-specific preference storage using localStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

fn available_storage() -> Result<Storage, WebStorageError> {
    dom::local_storage().map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))
}

impl PreferenceStore for LocalPreferenceStore {
    type Error = WebStorageError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = available_storage()?;
        storage
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = available_storage()?;
        storage
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}
