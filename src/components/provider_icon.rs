//! Identity provider icon.

#[cfg(test)]
#[path = "provider_icon_test.rs"]
mod provider_icon_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::context::Provider;

/// Built-in icon name for well-known provider aliases.
pub fn builtin_icon(alias: &str) -> Option<&'static str> {
    match alias {
        "github" => Some("github"),
        "gitlab" => Some("gitlab"),
        "gitea" => Some("gitea"),
        _ => None,
    }
}

/// Built-in icon for known aliases, else the provider's own icon URL.
#[component]
pub fn ProviderIcon(provider: Provider) -> impl IntoView {
    match builtin_icon(&provider.alias) {
        Some(name) => {
            let class = format!("provider-icon provider-icon--{name}");
            view! { <span class=class aria-hidden="true"></span> }.into_any()
        }
        None => view! { <img class="provider-icon" src=provider.icon alt=""/> }.into_any(),
    }
}
