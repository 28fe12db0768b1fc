use crate::portfolio::{KeyValueStore, StoreError};

/// `window.localStorage`-backed store for web builds.
///
/// The whole portfolio is one JSON document under a single key, which is well
/// within localStorage limits, so no IndexedDB machinery is needed.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let storage =
            storage().ok_or_else(|| StoreError::Backend("localStorage unavailable".into()))?;
        storage
            .set_item(key, &value)
            .map_err(|_| StoreError::Backend("localStorage write failed".into()))
    }
}
