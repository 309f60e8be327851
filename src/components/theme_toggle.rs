//! Theme preset and display mode selectors in the chrome header.

use leptos::prelude::*;

use crate::state::theme::{Mode, ThemePreset, ThemeState};

/// Preset selector; the empty option clears the preset.
#[component]
pub fn ThemeToggle(theme: RwSignal<ThemeState>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let preset = event_target_value(&ev).parse::<ThemePreset>().ok();
        theme.update(|t| t.set_theme(preset));
    };

    let options = ThemePreset::ALL
        .into_iter()
        .map(|preset| {
            view! {
                <option value=preset.as_str() selected=move || theme.with(|t| t.theme() == Some(preset))>
                    {preset.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <select class="theme-toggle" aria-label="Theme" on:change=on_change>
            <option value="" selected=move || theme.with(|t| t.theme().is_none())>
                "Default"
            </option>
            {options}
        </select>
    }
}

/// Light / dark / system selector.
#[component]
pub fn ModeToggle(theme: RwSignal<ThemeState>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<Mode>() {
        Ok(mode) => theme.update(|t| t.set_mode(mode)),
        Err(e) => log::warn!("{e}"),
    };

    let options = Mode::ALL
        .into_iter()
        .map(|mode| {
            view! {
                <option value=mode.as_str() selected=move || theme.with(|t| t.mode() == mode)>
                    {mode.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <select class="mode-toggle" aria-label="Display mode" on:change=on_change>
            {options}
        </select>
    }
}
