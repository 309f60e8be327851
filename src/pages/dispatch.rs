//! Context dispatcher: one page renderer per `PageId`.
//!
//! DESIGN
//! ======
//! `dispatch` is a single `match` over `SentinelCtx` with no wildcard arm.
//! A new variant stops the build here until it gets a renderer; there is no
//! runtime default that could hide a half-added page.
//!
//! The match is written against `PageVisitor` rather than views directly so
//! tests can walk every tag without a renderer runtime.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyView;

use super::registry::{PageLoad, PageRegistry};
use super::{error, form_post, form_redirect, info, login, logout, user, user_edit};
use crate::app::PageEnv;
use crate::components::template::resolve_title;
use crate::context::{PageContext, SentinelCtx};

/// A page view for one narrowed context type.
pub trait PageRenderer: 'static {
    type Ctx: PageContext;

    /// Stable identifier, distinct per renderer.
    const NAME: &'static str;

    /// Document title, when the page sets one.
    const TITLE: Option<&'static str> = None;

    fn render(ctx: Self::Ctx, env: PageEnv) -> AnyView;
}

/// Receives the renderer selected for a context.
pub trait PageVisitor {
    type Output;

    fn visit<P: PageRenderer>(self, ctx: P::Ctx) -> Self::Output;
}

/// Hand `ctx`, narrowed, to the renderer registered for its tag.
pub fn dispatch<V: PageVisitor>(ctx: SentinelCtx, visitor: V) -> V::Output {
    match ctx {
        SentinelCtx::Login(c) => visitor.visit::<login::Login>(c),
        SentinelCtx::Error(c) => visitor.visit::<error::Error>(c),
        SentinelCtx::Info(c) => visitor.visit::<info::Info>(c),
        SentinelCtx::FormRedirect(c) => visitor.visit::<form_redirect::FormRedirect>(c),
        SentinelCtx::FormPost(c) => visitor.visit::<form_post::FormPost>(c),
        SentinelCtx::User(c) => visitor.visit::<user::User>(c),
        SentinelCtx::UserEdit(c) => visitor.visit::<user_edit::UserEdit>(c),
        SentinelCtx::Logout(c) => visitor.visit::<logout::Logout>(c),
    }
}

struct TitleOf;

impl PageVisitor for TitleOf {
    type Output = String;

    fn visit<P: PageRenderer>(self, _ctx: P::Ctx) -> String {
        resolve_title(P::TITLE, <P::Ctx as PageContext>::PAGE_ID)
    }
}

/// Title of the document rendered for `ctx`.
pub fn document_title(ctx: &SentinelCtx) -> String {
    dispatch(ctx.clone(), TitleOf)
}

struct RenderPage {
    env: PageEnv,
}

impl PageVisitor for RenderPage {
    type Output = AnyView;

    fn visit<P: PageRenderer>(self, ctx: P::Ctx) -> AnyView {
        P::render(ctx, self.env)
    }
}

/// Render the page for the current context, or `fallback` while it loads.
#[component]
pub fn SentinelPage(
    #[prop(into)] ctx: Signal<SentinelCtx>,
    env: PageEnv,
    registry: RwSignal<PageRegistry>,
    #[prop(optional, into)] fallback: ViewFn,
) -> impl IntoView {
    move || {
        let ctx = ctx.get();
        let page = ctx.page_id();
        match registry.with(|r| r.state(page)) {
            PageLoad::Ready => dispatch(ctx, RenderPage { env }),
            PageLoad::Pending => {
                // First access resolves on the next task tick.
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    registry.update(|r| {
                        r.mark_ready(page);
                    });
                });
                fallback.run()
            }
        }
    }
}
