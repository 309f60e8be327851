//! # sentinel-web
//!
//! Leptos frontend for the Sentinel authentication pages (login, error,
//! info, redirects, profile, profile edit, logout).
//!
//! The server injects one page context per response; this crate turns it
//! into exactly one page view. It contains the context model, the page
//! dispatcher, a minimal in-app router, theme state and the fixture
//! generator used by tests and the preview server.

pub mod app;
pub mod components;
pub mod context;
pub mod pages;
pub mod seed;
pub mod state;
pub mod util;

/// Browser entry point: read the injected context and mount the app.
///
/// A malformed seed is logged and rendered as the "no context" notice.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::state::theme::KeyValueStore;
    use crate::util::storage::BrowserStorage;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let seed = seed::read_seed().unwrap_or_else(|e| {
        log::error!("{e}");
        None
    });
    let path = util::browser::current_path();
    let store: Arc<dyn KeyValueStore> = Arc::new(BrowserStorage);

    // Server-rendered markup is replaced, not hydrated.
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        body.set_inner_html("");
    }
    leptos::mount::mount_to_body(move || view! { <App seed=seed path=path store=store/> });
}
