//! `localStorage`-backed preference store.
use crate::dom;
use prefpanel_core::PreferenceStore;
use web_sys::Storage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Preference store over `window.localStorage`.
///
/// Opening never fails: when storage is blocked the handle is kept empty and
/// every call reports [`WebStorageError::Unavailable`], which the controller
/// turns into session-only mode.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Result<Storage, String>,
}

impl LocalStorageStore {
    #[must_use]
    pub fn open() -> Self {
        let storage = dom::local_storage().map_err(|err| dom::js_error_message(&err));
        if let Err(reason) = &storage {
            log::warn!("localStorage unavailable ({reason}); preferences will not persist");
        }
        Self { storage }
    }

    #[must_use]
    pub const fn from_storage(storage: Storage) -> Self {
        Self {
            storage: Ok(storage),
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.storage.is_ok()
    }

    fn handle(&self) -> Result<&Storage, WebStorageError> {
        self.storage
            .as_ref()
            .map_err(|reason| WebStorageError::Unavailable(reason.clone()))
    }
}

fn js_err(err: &wasm_bindgen::JsValue) -> WebStorageError {
    WebStorageError::Storage(dom::js_error_message(err))
}

impl PreferenceStore for LocalStorageStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.handle()?.get_item(key).map_err(|e| js_err(&e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.handle()?.set_item(key, value).map_err(|e| js_err(&e))
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        self.handle()?.remove_item(key).map_err(|e| js_err(&e))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.handle()?.clear().map_err(|e| js_err(&e))
    }
}
