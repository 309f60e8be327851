//! Error page. The chrome already surfaces `message`; the card repeats it
//! with a way back.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::PageRenderer;
use crate::app::PageEnv;
use crate::components::template::{Chrome, Template};
use crate::context::ErrorCtx;

const DOCUMENT_TITLE: &str = "Error";

pub struct Error;

impl PageRenderer for Error {
    type Ctx = ErrorCtx;
    const NAME: &'static str = "error";
    const TITLE: Option<&'static str> = Some(DOCUMENT_TITLE);

    fn render(ctx: ErrorCtx, env: PageEnv) -> AnyView {
        view! { <ErrorPage ctx=ctx env=env/> }.into_any()
    }
}

#[component]
pub fn ErrorPage(ctx: ErrorCtx, env: PageEnv) -> impl IntoView {
    let chrome = Chrome::of(&ctx);
    let ErrorCtx { message, urls, .. } = ctx;

    view! {
        <Template env=env chrome=chrome document_title=DOCUMENT_TITLE>
            <div class="card status-card status-card--error">
                <div class="card__header">
                    <h1 class="card__title">"Something went wrong"</h1>
                    <p class="card__description">{message.summary}</p>
                </div>
                <div class="card__content">
                    <a class="btn btn--outline" href=urls.base_path>
                        "Back to start"
                    </a>
                </div>
            </div>
        </Template>
    }
}
