//! Profile page with link/unlink controls per provider.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::PageRenderer;
use crate::app::PageEnv;
use crate::components::provider_icon::ProviderIcon;
use crate::components::template::{Chrome, Template};
use crate::context::{Csrf, PageId, Provider, UserCtx};

pub struct User;

impl PageRenderer for User {
    type Ctx = UserCtx;
    const NAME: &'static str = "user";

    fn render(ctx: UserCtx, env: PageEnv) -> AnyView {
        view! { <UserPage ctx=ctx env=env/> }.into_any()
    }
}

/// Form verb for `provider`: linked providers can only be unlinked.
pub fn link_action(provider: &Provider) -> &'static str {
    if provider.is_linked { "Unlink" } else { "Link" }
}

pub fn edit_href(base_path: &str) -> String {
    format!("{base_path}/user/edit")
}

#[component]
pub fn UserPage(ctx: UserCtx, env: PageEnv) -> impl IntoView {
    let chrome = Chrome::of(&ctx);
    let UserCtx { urls, user, providers, csrf, .. } = ctx;

    let edit = edit_href(&urls.base_path);
    let on_edit = {
        let edit = edit.clone();
        move |ev: leptos::ev::MouseEvent| {
            if let Some(router) = env.router {
                router.follow(&ev, &edit, PageId::UserEdit);
            }
        }
    };

    let links = providers
        .unwrap_or_default()
        .into_iter()
        .map(|provider| view! { <LinkForm provider=provider csrf=csrf.clone()/> })
        .collect_view();

    view! {
        <Template env=env chrome=chrome>
            <div class="card profile-card">
                <div class="card__header">
                    <h1 class="card__title">"User Page"</h1>
                </div>
                <div class="card__content">
                    <div class="profile-card__grid">
                        <img class="avatar avatar--large" alt="Profile picture" src=user.picture/>
                        <input class="input" disabled value=user.name/>
                        <input class="input" disabled value=user.username/>
                        <input class="input" type="email" disabled value=user.email/>
                        <a class="btn btn--outline" href=edit on:click=on_edit>
                            "Edit"
                        </a>
                    </div>
                    <div class="profile-card__providers">{links}</div>
                </div>
            </div>
        </Template>
    }
}

/// Provider button opening a confirmation dialog that posts to `loginUrl`.
#[component]
fn LinkForm(provider: Provider, csrf: Csrf) -> impl IntoView {
    let open = RwSignal::new(false);
    let action = link_action(&provider);
    let label = format!("{action} with {}", provider.display_name);
    let login_url = provider.login_url.clone();

    view! {
        <div class="link-form">
            <button type="button" class="btn btn--outline" on:click=move |_| open.set(true)>
                <ProviderIcon provider=provider/>
                <span>{label}</span>
            </button>
            <Show when=move || open.get()>
                <div class="dialog" role="dialog" aria-modal="true">
                    <form method="POST" action=login_url.clone() class="dialog__content">
                        <h2 class="dialog__title">"Are you absolutely sure?"</h2>
                        <p class="dialog__description">"This action cannot be undone."</p>
                        <input type="hidden" name=csrf.field_name.clone() value=csrf.value.clone()/>
                        <div class="dialog__footer">
                            <button type="button" class="btn btn--outline" on:click=move |_| open.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn">
                                {action}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
