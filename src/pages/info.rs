//! Info page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::PageRenderer;
use crate::app::PageEnv;
use crate::components::template::{Chrome, Template};
use crate::context::InfoCtx;

pub struct Info;

impl PageRenderer for Info {
    type Ctx = InfoCtx;
    const NAME: &'static str = "info";

    fn render(ctx: InfoCtx, env: PageEnv) -> AnyView {
        view! { <InfoPage ctx=ctx env=env/> }.into_any()
    }
}

#[component]
pub fn InfoPage(ctx: InfoCtx, env: PageEnv) -> impl IntoView {
    let chrome = Chrome::of(&ctx);
    let summary = ctx.message.summary;

    view! {
        <Template env=env chrome=chrome>
            <div class="card status-card">
                <div class="card__header">
                    <p class="card__description">{summary}</p>
                </div>
            </div>
        </Template>
    }
}
