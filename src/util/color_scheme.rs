//! Apply theme markers to the `<html>` element.
//!
//! Reads the OS `prefers-color-scheme` media query to resolve `system` mode
//! and rewrites the root element's class list. Requires a browser
//! environment; without one every call is a no-op.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use crate::state::theme::ThemeState;

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the OS currently prefers a dark color scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Rewrite the mode and preset classes on the document root.
pub fn apply(theme: &ThemeState) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let mut classes = RootClasses(root.class_list());
        theme.apply_markers(&mut classes, prefers_dark());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Run `on_change` whenever the OS color-scheme preference flips.
///
/// The listener lives for the rest of the page.
pub fn on_system_change(on_change: impl Fn() + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
            return;
        };
        let listener = Closure::<dyn Fn()>::new(on_change);
        if query
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not watch color-scheme preference");
            return;
        }
        listener.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}

#[cfg(feature = "csr")]
struct RootClasses(web_sys::DomTokenList);

#[cfg(feature = "csr")]
impl crate::state::theme::ClassTarget for RootClasses {
    fn add_class(&mut self, class: &str) {
        let _ = self.0.add_1(class);
    }

    fn remove_class(&mut self, class: &str) {
        let _ = self.0.remove_1(class);
    }
}
