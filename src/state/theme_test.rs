use super::*;

fn fresh() -> (Arc<MemoryStore>, ThemeState) {
    let store = Arc::new(MemoryStore::default());
    let state = ThemeState::load(store.clone(), ThemeConfig::default());
    (store, state)
}

fn markers(state: &ThemeState, prefers_dark: bool) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();
    state.apply_markers(&mut classes, prefers_dark);
    classes
}

// =============================================================
// Loading
// =============================================================

#[test]
fn empty_store_yields_defaults() {
    let (_, state) = fresh();
    assert_eq!(state.mode(), Mode::System);
    assert_eq!(state.theme(), None);
}

#[test]
fn unknown_stored_values_fall_back_to_defaults() {
    let store = Arc::new(MemoryStore::default());
    store.set(MODE_KEY, "sepia");
    store.set(THEME_KEY, "magenta");
    let state = ThemeState::load(store, ThemeConfig::default());
    assert_eq!(state.mode(), Mode::System);
    assert_eq!(state.theme(), None);
}

#[test]
fn custom_keys_are_honored() {
    let store = Arc::new(MemoryStore::default());
    store.set("ui-mode", "light");
    let config = ThemeConfig { mode_key: "ui-mode".to_owned(), ..ThemeConfig::default() };
    let state = ThemeState::load(store, config);
    assert_eq!(state.mode(), Mode::Light);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn set_mode_survives_reload() {
    let (store, mut state) = fresh();
    state.set_mode(Mode::Dark);
    assert_eq!(store.get(MODE_KEY).as_deref(), Some("dark"));

    let reloaded = ThemeState::load(store, ThemeConfig::default());
    assert_eq!(reloaded.mode(), Mode::Dark);
}

#[test]
fn set_theme_survives_reload() {
    let (store, mut state) = fresh();
    state.set_theme(Some(ThemePreset::Rose));
    let reloaded = ThemeState::load(store, ThemeConfig::default());
    assert_eq!(reloaded.theme(), Some(ThemePreset::Rose));
}

#[test]
fn clearing_theme_persists_empty_string() {
    let (store, mut state) = fresh();
    state.set_theme(Some(ThemePreset::Zinc));
    state.set_theme(None);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some(""));
    assert_eq!(ThemeState::load(store, ThemeConfig::default()).theme(), None);
}

#[test]
fn mode_and_theme_persist_independently() {
    let (store, mut state) = fresh();
    state.set_theme(Some(ThemePreset::Blue));
    assert_eq!(store.get(MODE_KEY), None);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("blue"));
}

// =============================================================
// Markers
// =============================================================

#[test]
fn system_mode_follows_os_preference() {
    let (_, state) = fresh();
    assert!(markers(&state, true).contains("dark"));
    assert!(markers(&state, false).contains("light"));
}

#[test]
fn explicit_mode_ignores_os_preference() {
    let (_, mut state) = fresh();
    state.set_mode(Mode::Light);
    let classes = markers(&state, true);
    assert!(classes.contains("light"));
    assert!(!classes.contains("dark"));
}

#[test]
fn switching_presets_leaves_only_the_latest() {
    let (_, mut state) = fresh();
    state.set_mode(Mode::Dark);
    let mut classes = BTreeSet::from(["app-root".to_owned()]);

    state.set_theme(Some(ThemePreset::Rose));
    state.apply_markers(&mut classes, false);
    state.set_theme(Some(ThemePreset::Slate));
    state.apply_markers(&mut classes, false);

    assert!(classes.contains("slate"));
    assert!(!classes.contains("rose"));
    assert!(classes.contains("app-root"));
    assert_eq!(classes.len(), 3);
}

#[test]
fn mode_markers_are_mutually_exclusive() {
    let (_, mut state) = fresh();
    let mut classes = BTreeSet::new();
    for mode in Mode::ALL {
        state.set_mode(mode);
        state.apply_markers(&mut classes, true);
        let modes = ["light", "dark"].iter().filter(|m| classes.contains(**m)).count();
        assert_eq!(modes, 1);
    }
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn every_preset_parses_from_its_class_name() {
    for preset in ThemePreset::ALL {
        assert_eq!(preset.as_str().parse::<ThemePreset>(), Ok(preset));
    }
}

#[test]
fn mode_round_trips_through_display() {
    for mode in Mode::ALL {
        assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
    }
}
