//! Redirect page: hands the browser on to `redirectUrl`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::PageRenderer;
use crate::app::PageEnv;
use crate::components::template::{Chrome, Template};
use crate::context::FormRedirectCtx;

pub struct FormRedirect;

impl PageRenderer for FormRedirect {
    type Ctx = FormRedirectCtx;
    const NAME: &'static str = "form-redirect";

    fn render(ctx: FormRedirectCtx, env: PageEnv) -> AnyView {
        view! { <FormRedirectPage ctx=ctx env=env/> }.into_any()
    }
}

#[component]
pub fn FormRedirectPage(ctx: FormRedirectCtx, env: PageEnv) -> impl IntoView {
    let chrome = Chrome::of(&ctx);

    view! {
        <Template env=env chrome=chrome>
            <div class="card status-card">
                <div class="card__content">
                    <a class="btn" href=ctx.redirect_url>
                        "Continue"
                    </a>
                </div>
            </div>
        </Template>
    }
}
