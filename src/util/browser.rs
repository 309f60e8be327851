//! Location and history access for the client router.

/// Path of the current document, `/` when there is no window.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}

/// Record a history entry at `to` without fetching or reloading.
pub fn push_history(to: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if history
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to))
            .is_err()
        {
            log::warn!("history.pushState rejected {to}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = to;
    }
}
