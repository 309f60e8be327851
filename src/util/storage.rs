//! Browser `localStorage` as a `KeyValueStore`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme persistence writes through this store on every change. Outside the
//! browser it reads nothing and drops writes, so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::theme::KeyValueStore;

/// Handle to `window.localStorage`; holds no browser objects itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write for {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
