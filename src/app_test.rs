use super::*;
use crate::context::fixture::fixture;

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    Owner::new().with(f)
}

fn user_router() -> PageRouter {
    PageRouter::new(RouterState::new(fixture(PageId::User), "/auth/user").unwrap())
}

// =============================================================
// PageRouter
// =============================================================

#[test]
fn navigate_retags_current_context() {
    with_owner(|| {
        let router = user_router();
        router.navigate("/user/edit", PageId::UserEdit).unwrap();
        assert_eq!(router.path(), "/user/edit");
        assert_eq!(router.page_id(), PageId::UserEdit);
        assert_eq!(router.sentinel_ctx().page_id(), PageId::UserEdit);
    });
}

#[test]
fn rejected_navigate_keeps_current_state() {
    with_owner(|| {
        let router = PageRouter::new(RouterState::new(fixture(PageId::Login), "/auth/login").unwrap());
        assert!(router.navigate("/auth/user", PageId::User).is_err());
        assert_eq!(router.path(), "/auth/login");
        assert_eq!(router.sentinel_ctx(), fixture(PageId::Login));
    });
}

#[test]
fn router_is_available_inside_its_scope() {
    with_owner(|| {
        let router = user_router();
        provide_context(router);
        assert_eq!(use_router().page_id(), PageId::User);
    });
}

#[test]
#[should_panic(expected = "not within a router context")]
fn use_router_outside_scope_is_fatal() {
    with_owner(|| {
        let _ = use_router();
    });
}

#[test]
#[should_panic(expected = "not within a theme context")]
fn use_theme_outside_app_is_fatal() {
    with_owner(|| {
        let _ = use_theme();
    });
}

#[test]
fn theme_is_available_once_provided() {
    use crate::state::theme::{MemoryStore, Mode};

    with_owner(|| {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let theme = RwSignal::new(ThemeState::load(store, ThemeConfig::default()));
        provide_context(PageEnv::detached(theme));
        use_theme().update(|t| t.set_mode(Mode::Dark));
        assert_eq!(theme.with_untracked(ThemeState::mode), Mode::Dark);
    });
}

// =============================================================
// Server rendering
// =============================================================

#[cfg(feature = "ssr")]
mod rendered {
    use super::*;
    use crate::context::fixture::fixture_with;

    #[test]
    fn error_page_surfaces_the_message_summary() {
        let html = render_to_string(fixture(PageId::Error), "/auth/error");
        assert!(html.contains("An Error occured"));
    }

    #[test]
    fn every_page_renders() {
        for page in PageId::ALL {
            let html = render_to_string(fixture(page), "/auth");
            assert!(!html.is_empty(), "{page} rendered nothing");
            assert!(!html.contains("No Sentinel Context"), "{page} fell back to the notice");
        }
    }

    #[test]
    fn login_page_posts_csrf_to_each_provider() {
        let html = render_to_string(fixture(PageId::Login), "/auth/login");
        assert!(html.contains("/auth/github/login"));
        assert!(html.contains("csrf-token"));
        assert!(html.contains("Login with GitHub"));
    }

    #[test]
    fn user_menu_only_renders_for_authenticated_pages() {
        assert!(render_to_string(fixture(PageId::User), "/auth/user").contains("@tonitester"));
        assert!(!render_to_string(fixture(PageId::Login), "/auth/login").contains("@tonitester"));
    }

    #[test]
    fn document_embeds_the_seed_script() {
        let ctx = fixture_with(PageId::Info, &serde_json::json!({ "message": { "summary": "Hi" } })).unwrap();
        let html = render_document(&ctx, "/auth/info").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("window.sentinelCtx = "));
        assert!(html.contains("<title>info.tmpl</title>"));
    }

    #[test]
    fn document_title_follows_the_page_renderer() {
        let html = render_document(&fixture(PageId::Error), "/auth/error").unwrap();
        assert!(html.contains("<title>Error</title>"));
        assert!(!html.contains("<title>error.tmpl</title>"));
    }

    fn render_login_with(registry: PageRegistry) -> String {
        use leptos::tachys::view::RenderHtml;

        use crate::state::theme::MemoryStore;

        Owner::new().with(move || {
            let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
            view! {
                <App
                    seed=Some(fixture(PageId::Login))
                    path="/auth/login"
                    store=store
                    registry=registry
                    fallback=|| view! { <p class="page-loading">"Loading page"</p> }
                />
            }
            .to_html()
        })
    }

    #[test]
    fn pending_page_renders_the_fallback() {
        let html = render_login_with(PageRegistry::deferred());
        assert!(html.contains("Loading page"));
        assert!(!html.contains("Welcome Back"));
    }

    #[test]
    fn ready_page_renders_instead_of_the_fallback() {
        let mut registry = PageRegistry::deferred();
        registry.mark_ready(PageId::Login);
        let html = render_login_with(registry);
        assert!(html.contains("Welcome Back"));
        assert!(!html.contains("Loading page"));
    }
}
