//! Logout confirmation.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::PageRenderer;
use crate::app::PageEnv;
use crate::components::template::{Chrome, Template};
use crate::context::LogoutCtx;

pub struct Logout;

impl PageRenderer for Logout {
    type Ctx = LogoutCtx;
    const NAME: &'static str = "logout";

    fn render(ctx: LogoutCtx, env: PageEnv) -> AnyView {
        view! { <LogoutPage ctx=ctx env=env/> }.into_any()
    }
}

/// Posts back to the current URL with the session id and redirect target.
#[component]
pub fn LogoutPage(ctx: LogoutCtx, env: PageEnv) -> impl IntoView {
    let chrome = Chrome::of(&ctx);
    let LogoutCtx { urls, user, csrf, redirect, session_id, .. } = ctx;

    view! {
        <Template env=env chrome=chrome>
            <div class="card logout-card">
                <div class="card__header">
                    <h1 class="card__title">"Logout"</h1>
                    <p class="card__description">"Do you really want to log out?"</p>
                </div>
                <form method="POST" class="card__content logout-card__form">
                    <input type="hidden" name=csrf.field_name value=csrf.value/>
                    <input type="hidden" name="sid" value=session_id/>
                    <input type="hidden" name="redirect" value=redirect/>
                    <img class="avatar avatar--large" alt="Profile picture" src=user.picture/>
                    <div class="logout-card__identity">
                        <p class="logout-card__name">{user.name}</p>
                        <p class="logout-card__email">{user.email}</p>
                    </div>
                    <div class="logout-card__actions">
                        <a class="btn btn--outline" href=urls.base_path>
                            "No, stay here"
                        </a>
                        <button type="submit" class="btn">
                            "Yes, log me out"
                        </button>
                    </div>
                </form>
            </div>
        </Template>
    }
}
