//! Shared page chrome: header, user menu, notifications and document title.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page renders inside `Template`. The chrome only needs the fields
//! common to all variants, captured in `Chrome` so pages can hand over their
//! narrowed context without widening it back.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use leptos::prelude::*;
use leptos_meta::Title;

use super::theme_toggle::{ModeToggle, ThemeToggle};
use crate::app::PageEnv;
use crate::context::{Message, MessageType, PageContext, PageId, Urls, User};

/// Fields of a context the chrome renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chrome {
    pub page_id: PageId,
    pub message: Option<Message>,
    pub messages: Vec<Message>,
    pub urls: Urls,
    pub user: Option<User>,
}

impl Chrome {
    pub fn of<C: PageContext>(ctx: &C) -> Self {
        Self {
            page_id: C::PAGE_ID,
            message: ctx.message().cloned(),
            messages: ctx.messages().to_vec(),
            urls: ctx.urls().clone(),
            user: ctx.user().cloned(),
        }
    }
}

/// Explicit title if given, else the page id.
pub fn resolve_title(explicit: Option<&str>, page: PageId) -> String {
    explicit.map_or_else(|| page.as_str().to_owned(), str::to_owned)
}

/// First letter of each word of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|word| word.chars().next()).collect()
}

pub fn alert_class(kind: MessageType) -> &'static str {
    match kind {
        MessageType::Error => "alert alert--destructive",
        MessageType::Info | MessageType::Success | MessageType::Warning => "alert",
    }
}

pub fn logout_href(urls: &Urls) -> String {
    format!("{}/logout", urls.base_path)
}

/// Page chrome around `children`.
#[component]
pub fn Template(
    env: PageEnv,
    chrome: Chrome,
    #[prop(optional, into)] document_title: Option<String>,
    children: Children,
) -> impl IntoView {
    let title = resolve_title(document_title.as_deref(), chrome.page_id);
    let logout = logout_href(&chrome.urls);
    let Chrome { message, messages, urls, user, .. } = chrome;
    let home = urls.base_path;

    let menu = user.map(move |user| view! { <UserMenu user=user logout_href=logout/> });
    let notices = message
        .into_iter()
        .chain(messages)
        .map(|message| view! { <Notice message=message/> })
        .collect_view();

    view! {
        <Title text=title/>
        <header class="chrome-header">
            <div class="chrome-header__inner">
                <a href=home class="chrome-brand">
                    <span class="chrome-brand__mark"></span>
                    <span>"Sentinel"</span>
                </a>
                <div class="chrome-header__actions">
                    <ThemeToggle theme=env.theme/>
                    <ModeToggle theme=env.theme/>
                    {menu}
                </div>
            </div>
        </header>
        <div class="chrome-notices">{notices}</div>
        <main class="chrome-content">{children()}</main>
    }
}

#[component]
fn UserMenu(user: User, logout_href: String) -> impl IntoView {
    let open = RwSignal::new(false);
    let User { name, username, picture, .. } = user;
    let handle = format!("@{username}");
    let alt = handle.clone();
    let fallback = initials(&name);

    view! {
        <div class="user-menu">
            <button class="user-menu__trigger" type="button" on:click=move |_| open.update(|o| *o = !*o)>
                <img class="avatar" src=picture alt=alt/>
                <span class="avatar__fallback">{fallback}</span>
            </button>
            <Show when=move || open.get()>
                <div class="user-menu__content">
                    <span class="user-menu__handle">{handle.clone()}</span>
                    <a class="user-menu__item" href=logout_href.clone()>
                        "Logout"
                    </a>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn Notice(message: Message) -> impl IntoView {
    view! {
        <div class=alert_class(message.kind) role="alert">
            <p class="alert__title">{message.summary}</p>
        </div>
    }
}
