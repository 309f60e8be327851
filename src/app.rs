//! Root application component, router handle and page environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` receives the seed explicitly (the browser entry point reads it from
//! the global slot, the preview server from a fixture). It owns the two
//! pieces of mutable state: theme and routing. Both reach pages through
//! `PageEnv`; a page rendered without a router falls back to plain links.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::provide_meta_context;

use crate::context::{PageId, SentinelCtx};
use crate::pages::SentinelPage;
use crate::pages::registry::PageRegistry;
use crate::state::router::{RouterError, RouterState};
use crate::state::theme::{KeyValueStore, ThemeConfig, ThemeState};

/// Rendering environment shared by every page renderer.
#[derive(Clone, Copy)]
pub struct PageEnv {
    pub theme: RwSignal<ThemeState>,
    /// In-app navigation; `None` makes page links plain full loads.
    pub router: Option<PageRouter>,
}

impl PageEnv {
    /// Environment with no router.
    pub fn detached(theme: RwSignal<ThemeState>) -> Self {
        Self { theme, router: None }
    }
}

/// Handle to the process-wide routing state.
#[derive(Clone, Copy)]
pub struct PageRouter {
    state: RwSignal<RouterState>,
}

impl PageRouter {
    pub fn new(state: RouterState) -> Self {
        Self { state: RwSignal::new(state) }
    }

    pub fn path(&self) -> String {
        self.state.with(|s| s.path().to_owned())
    }

    pub fn page_id(&self) -> PageId {
        self.state.with(RouterState::page_id)
    }

    pub fn sentinel_ctx(&self) -> SentinelCtx {
        self.state.with(|s| s.sentinel_ctx().clone())
    }

    /// Re-tag the current page as `page` at `to` and push a history entry.
    ///
    /// No request is made. On error nothing changes.
    pub fn navigate(&self, to: &str, page: PageId) -> Result<(), RouterError> {
        let next = self.state.with_untracked(|s| s.navigated(to, page))?;
        self.state.set(next);
        crate::util::browser::push_history(to);
        log::debug!("navigated to {to} as {page}");
        Ok(())
    }

    /// Handle a link click in-app; when the router refuses, the browser
    /// follows the link as a normal page load.
    pub fn follow(&self, ev: &leptos::ev::MouseEvent, to: &str, page: PageId) {
        match self.navigate(to, page) {
            Ok(()) => ev.prevent_default(),
            Err(e) => log::warn!("{e}; falling back to full navigation"),
        }
    }
}

/// Current router. Panics outside an `App` with a seed.
pub fn use_router() -> PageRouter {
    use_context::<PageRouter>().expect("not within a router context")
}

/// Current theme signal. Panics outside an `App`.
pub fn use_theme() -> RwSignal<ThemeState> {
    use_context::<PageEnv>().expect("not within a theme context").theme
}

/// Root application component.
///
/// Without a seed, renders the static `NoContext` notice instead of any page.
#[component]
pub fn App(
    seed: Option<SentinelCtx>,
    #[prop(into)] path: String,
    store: Arc<dyn KeyValueStore>,
    #[prop(optional)] theme_config: Option<ThemeConfig>,
    #[prop(optional)] registry: Option<PageRegistry>,
    #[prop(optional, into)] fallback: ViewFn,
) -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::load(store, theme_config.unwrap_or_default()));
    #[cfg(feature = "csr")]
    {
        Effect::new(move || theme.with(crate::util::color_scheme::apply));
        crate::util::color_scheme::on_system_change(move || theme.with_untracked(crate::util::color_scheme::apply));
    }
    provide_context(PageEnv::detached(theme));

    let Some(seed) = seed else {
        return view! { <NoContext/> }.into_any();
    };
    let state = match RouterState::new(seed, path) {
        Ok(state) => state,
        Err(e) => {
            log::error!("cannot start router: {e}");
            return view! { <NoContext/> }.into_any();
        }
    };
    let router = PageRouter::new(state);
    provide_context(router);
    let env = PageEnv { theme, router: Some(router) };
    provide_context(env);

    let registry = RwSignal::new(registry.unwrap_or_else(PageRegistry::eager));
    let ctx = Memo::new(move |_| router.sentinel_ctx());

    view! { <SentinelPage ctx=ctx env=env registry=registry fallback=fallback/> }.into_any()
}

/// Shown when the server injected no context.
#[component]
pub fn NoContext() -> impl IntoView {
    view! { <h1 class="no-context">"No Sentinel Context"</h1> }
}

/// Server-render `App` for `seed` at `path` into an HTML fragment.
#[cfg(feature = "ssr")]
pub fn render_to_string(seed: SentinelCtx, path: &str) -> String {
    use leptos::tachys::view::RenderHtml;

    use crate::state::theme::MemoryStore;

    let path = path.to_owned();
    let owner = Owner::new();
    owner.with(move || {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        view! { <App seed=Some(seed) path=path store=store/> }.to_html()
    })
}

/// Full HTML document for `seed`: the seed script plus the rendered body.
#[cfg(feature = "ssr")]
pub fn render_document(seed: &SentinelCtx, path: &str) -> Result<String, crate::context::ContextError> {
    let script = crate::seed::seed_script(seed)?;
    let body = render_to_string(seed.clone(), path);
    let title = crate::pages::document_title(seed);
    let resources = seed.urls().resource_path.trim_end_matches('/');
    Ok(format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{title}</title><link rel=\"stylesheet\" href=\"{resources}/index.css\"/>{script}</head>\
         <body>{body}</body></html>"
    ))
}
