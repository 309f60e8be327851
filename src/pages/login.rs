//! Login page: one provider button per configured identity provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::PageRenderer;
use crate::app::PageEnv;
use crate::components::provider_icon::ProviderIcon;
use crate::components::template::{Chrome, Template};
use crate::context::{Csrf, LoginCtx, Provider};

pub struct Login;

impl PageRenderer for Login {
    type Ctx = LoginCtx;
    const NAME: &'static str = "login";

    fn render(ctx: LoginCtx, env: PageEnv) -> AnyView {
        view! { <LoginPage ctx=ctx env=env/> }.into_any()
    }
}

pub fn login_label(provider: &Provider) -> String {
    format!("Login with {}", provider.display_name)
}

#[component]
pub fn LoginPage(ctx: LoginCtx, env: PageEnv) -> impl IntoView {
    let chrome = Chrome::of(&ctx);
    let LoginCtx { urls, providers, csrf, .. } = ctx;

    let forms = providers
        .unwrap_or_default()
        .into_iter()
        .map(|provider| view! { <ProviderLogin provider=provider csrf=csrf.clone()/> })
        .collect_view();

    view! {
        <Template env=env chrome=chrome>
            <div class="login-page">
                <a href=urls.base_path class="login-page__brand">
                    "Sentinel"
                </a>
                <div class="card login-card">
                    <div class="card__header">
                        <h1 class="card__title">"Welcome Back"</h1>
                        <p class="card__description">"Choose one of the following providers"</p>
                    </div>
                    <div class="card__content login-card__providers">{forms}</div>
                </div>
            </div>
        </Template>
    }
}

#[component]
fn ProviderLogin(provider: Provider, csrf: Csrf) -> impl IntoView {
    let label = login_label(&provider);
    let action = provider.login_url.clone();

    view! {
        <form method="POST" action=action class="login-card__form">
            <input type="hidden" name=csrf.field_name value=csrf.value/>
            <button type="submit" class="btn btn--outline">
                <ProviderIcon provider=provider/>
                <span>{label}</span>
            </button>
        </form>
    }
}
