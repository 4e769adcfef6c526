//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior: the saved-id
//! snapshot store used by the reconciler and the session token. Under SSR
//! there is no storage; reads find nothing and writes report
//! `Unavailable`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use saves::{SnapshotStore, StoreError};

use crate::config::TOKEN_KEY;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

/// [`SnapshotStore`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl SnapshotStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|_| StoreError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

/// Stored session token, if any.
pub fn load_token() -> Option<String> {
    LocalStorageStore
        .read(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.trim().is_empty())
}

/// Persist the session token after sign-in.
pub fn save_token(token: &str) {
    if let Err(e) = LocalStorageStore.write(TOKEN_KEY, token) {
        leptos::logging::warn!("token save failed: {e}");
    }
}

/// Forget the session token on logout.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
