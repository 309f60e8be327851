//! Display mode and theme preset, persisted to a key-value store.
//!
//! DESIGN
//! ======
//! `ThemeState` is an explicit holder constructed once per app and passed
//! down as a signal. Values are read from the store once at load time and
//! written through on every setter call. Mode and theme are independent keys
//! with no transaction across them.
//!
//! The resolved look is expressed as classes on the document root: exactly
//! one of `light`/`dark` and at most one preset name.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

/// Default storage key for the display mode.
pub const MODE_KEY: &str = "mode";
/// Default storage key for the theme preset.
pub const THEME_KEY: &str = "theme";

/// Requested display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    Dark,
    Light,
    /// Follow the OS `prefers-color-scheme` setting.
    #[default]
    System,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Light, Mode::Dark, Mode::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
            Mode::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Dark => "Dark",
            Mode::Light => "Light",
            Mode::System => "System",
        }
    }

    /// Collapse `System` to light or dark.
    pub fn resolve(self, prefers_dark: bool) -> Mode {
        match self {
            Mode::System if prefers_dark => Mode::Dark,
            Mode::System => Mode::Light,
            other => other,
        }
    }
}

/// Error for a stored value outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseThemeError {
    kind: &'static str,
    value: String,
}

impl FromStr for Mode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseThemeError { kind: "mode", value: s.to_owned() })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named color preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Red,
    Rose,
    Orange,
    Green,
    Blue,
    Yellow,
    Violet,
    Stone,
    Zinc,
    Neutral,
    Gray,
    Slate,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 12] = [
        ThemePreset::Red,
        ThemePreset::Rose,
        ThemePreset::Orange,
        ThemePreset::Green,
        ThemePreset::Blue,
        ThemePreset::Yellow,
        ThemePreset::Violet,
        ThemePreset::Stone,
        ThemePreset::Zinc,
        ThemePreset::Neutral,
        ThemePreset::Gray,
        ThemePreset::Slate,
    ];

    /// Class name and stored value.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreset::Red => "red",
            ThemePreset::Rose => "rose",
            ThemePreset::Orange => "orange",
            ThemePreset::Green => "green",
            ThemePreset::Blue => "blue",
            ThemePreset::Yellow => "yellow",
            ThemePreset::Violet => "violet",
            ThemePreset::Stone => "stone",
            ThemePreset::Zinc => "zinc",
            ThemePreset::Neutral => "neutral",
            ThemePreset::Gray => "gray",
            ThemePreset::Slate => "slate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Red => "Red",
            ThemePreset::Rose => "Rose",
            ThemePreset::Orange => "Orange",
            ThemePreset::Green => "Green",
            ThemePreset::Blue => "Blue",
            ThemePreset::Yellow => "Yellow",
            ThemePreset::Violet => "Violet",
            ThemePreset::Stone => "Stone",
            ThemePreset::Zinc => "Zinc",
            ThemePreset::Neutral => "Neutral",
            ThemePreset::Gray => "Gray",
            ThemePreset::Slate => "Slate",
        }
    }
}

impl FromStr for ThemePreset {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreset::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseThemeError { kind: "theme", value: s.to_owned() })
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// String key-value persistence, e.g. browser `localStorage`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}

/// Storage keys and fallbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub mode_key: String,
    pub theme_key: String,
    pub default_mode: Mode,
    pub default_theme: Option<ThemePreset>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode_key: MODE_KEY.to_owned(),
            theme_key: THEME_KEY.to_owned(),
            default_mode: Mode::System,
            default_theme: None,
        }
    }
}

// =============================================================================
// THEME STATE
// =============================================================================

/// A document class list the theme markers are written to.
pub trait ClassTarget {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

impl ClassTarget for BTreeSet<String> {
    fn add_class(&mut self, class: &str) {
        self.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.remove(class);
    }
}

/// Current mode and theme plus the store they persist to.
#[derive(Clone)]
pub struct ThemeState {
    store: Arc<dyn KeyValueStore>,
    config: ThemeConfig,
    mode: Mode,
    theme: Option<ThemePreset>,
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Read both keys once; absent or unknown values fall back to the defaults.
    pub fn load(store: Arc<dyn KeyValueStore>, config: ThemeConfig) -> Self {
        let mode = match store.get(&config.mode_key) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("ignoring stored display mode: {e}");
                config.default_mode
            }),
            None => config.default_mode,
        };
        let theme = match store.get(&config.theme_key) {
            Some(raw) if raw.is_empty() => None,
            Some(raw) => match raw.parse() {
                Ok(preset) => Some(preset),
                Err(e) => {
                    log::warn!("ignoring stored theme preset: {e}");
                    config.default_theme
                }
            },
            None => config.default_theme,
        };
        Self { store, config, mode, theme }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn theme(&self) -> Option<ThemePreset> {
        self.theme
    }

    /// Persist and apply a new display mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.store.set(&self.config.mode_key, mode.as_str());
        self.mode = mode;
    }

    /// Persist and apply a new preset; `None` is stored as an empty string.
    pub fn set_theme(&mut self, theme: Option<ThemePreset>) {
        self.store.set(&self.config.theme_key, theme.map_or("", ThemePreset::as_str));
        self.theme = theme;
    }

    /// Rewrite the mode and preset classes on `target`.
    pub fn apply_markers<T: ClassTarget + ?Sized>(&self, target: &mut T, prefers_dark: bool) {
        target.remove_class(Mode::Light.as_str());
        target.remove_class(Mode::Dark.as_str());
        for preset in ThemePreset::ALL {
            target.remove_class(preset.as_str());
        }
        target.add_class(self.mode.resolve(prefers_dark).as_str());
        if let Some(preset) = self.theme {
            target.add_class(preset.as_str());
        }
    }
}
