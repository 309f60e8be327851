use super::*;
use crate::context::PageId;
use crate::context::fixture::fixture_with;

#[test]
fn label_uses_display_name() {
    let provider = Provider {
        login_url: "/auth/gitea/login".to_owned(),
        alias: "gitea".to_owned(),
        provider_id: "gitea".to_owned(),
        display_name: "Gitea".to_owned(),
        icon: String::new(),
        is_linked: false,
    };
    assert_eq!(login_label(&provider), "Login with Gitea");
}

#[test]
fn login_context_may_omit_providers() {
    let ctx = fixture_with(PageId::Login, &serde_json::json!({ "providers": null })).unwrap();
    let crate::context::SentinelCtx::Login(login) = ctx else {
        panic!("expected login context");
    };
    assert!(login.providers.is_none());
}

#[cfg(feature = "ssr")]
#[test]
fn login_without_providers_still_renders_the_card() {
    let ctx = fixture_with(PageId::Login, &serde_json::json!({ "providers": null })).unwrap();
    let html = crate::app::render_to_string(ctx, "/auth/login");
    assert!(html.contains("Welcome Back"));
    assert!(!html.contains("Login with"));
}
