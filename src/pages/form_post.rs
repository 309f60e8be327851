//! Form-post page: re-submits to `redirectUrl` as a POST.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::PageRenderer;
use crate::app::PageEnv;
use crate::components::template::{Chrome, Template};
use crate::context::FormPostCtx;

pub struct FormPost;

impl PageRenderer for FormPost {
    type Ctx = FormPostCtx;
    const NAME: &'static str = "form-post";

    fn render(ctx: FormPostCtx, env: PageEnv) -> AnyView {
        view! { <FormPostPage ctx=ctx env=env/> }.into_any()
    }
}

#[component]
pub fn FormPostPage(ctx: FormPostCtx, env: PageEnv) -> impl IntoView {
    let chrome = Chrome::of(&ctx);

    view! {
        <Template env=env chrome=chrome>
            <div class="card status-card">
                <form method="POST" action=ctx.redirect_url class="card__content">
                    <button type="submit" class="btn">
                        "Continue"
                    </button>
                </form>
            </div>
        </Template>
    }
}
