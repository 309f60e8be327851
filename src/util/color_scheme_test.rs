#![cfg(not(feature = "csr"))]

use std::sync::Arc;

use super::*;
use crate::state::theme::{MemoryStore, ThemeConfig};

#[test]
fn prefers_dark_is_false_without_a_browser() {
    assert!(!prefers_dark());
}

#[test]
fn apply_is_noop_but_callable() {
    let theme = ThemeState::load(Arc::new(MemoryStore::default()), ThemeConfig::default());
    apply(&theme);
}

#[test]
fn on_system_change_never_fires_without_a_browser() {
    on_system_change(|| panic!("no browser to notify"));
}
