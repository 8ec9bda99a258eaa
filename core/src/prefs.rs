use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const DICE_COUNT_KEY: &str = "diceCount";

/// Class carried by the document root while the light theme is active.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Anything other than `"light"` reads as dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "\u{2600}\u{fe0f}",
            Theme::Dark => "\u{1f319}",
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceMode {
    #[serde(rename = "1")]
    One,
    #[default]
    #[serde(rename = "2")]
    Two,
}

impl DiceMode {
    /// Only `"1"` selects a single die.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("1") => DiceMode::One,
            _ => DiceMode::Two,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiceMode::One => "1",
            DiceMode::Two => "2",
        }
    }

    pub fn layout_class(self) -> &'static str {
        match self {
            DiceMode::One => "one-dice-mode",
            DiceMode::Two => "two-dice-mode",
        }
    }
}

/// Origin-scoped string store. Implementations swallow backend failures:
/// reads fall back to `None` and writes are dropped.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Typed view over the two persisted preferences. Reads happen once in
/// [`Preferences::load`]; every setter writes through.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
    theme: Theme,
    dice_mode: DiceMode,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn load(store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        let dice_mode = DiceMode::from_stored(store.get(DICE_COUNT_KEY).as_deref());
        Self {
            store,
            theme,
            dice_mode,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn dice_mode(&self) -> DiceMode {
        self.dice_mode
    }

    pub fn set_dice_mode(&mut self, mode: DiceMode) {
        self.dice_mode = mode;
        self.store.set(DICE_COUNT_KEY, mode.as_str());
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_store_is_empty() {
        let prefs = Preferences::load(MemoryStore::new());
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.dice_mode(), DiceMode::Two);
        assert_eq!(prefs.store().get(THEME_KEY), None);
    }

    #[test]
    fn theme_survives_reload() {
        let mut prefs = Preferences::load(MemoryStore::new());
        prefs.set_theme(Theme::Light);
        let reloaded = Preferences::load(prefs.into_store());
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(reloaded.store().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggling_twice_restores_theme() {
        let mut prefs = Preferences::load(MemoryStore::new());
        let original = prefs.theme();
        assert_eq!(prefs.toggle_theme(), Theme::Light);
        assert_eq!(prefs.toggle_theme(), original);
        assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn icon_matches_active_theme() {
        assert_eq!(Theme::Light.icon(), "\u{2600}\u{fe0f}");
        assert_eq!(Theme::Dark.icon(), "\u{1f319}");
        assert!(Theme::Light.is_light());
        assert_eq!(Theme::Light.toggled().icon(), Theme::Dark.icon());
    }

    #[test]
    fn unrecognized_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia");
        store.set(DICE_COUNT_KEY, "three");
        let prefs = Preferences::load(store);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.dice_mode(), DiceMode::Two);
    }

    #[test]
    fn serde_names_match_stored_strings() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;
        use serde::Deserialize;

        for theme in [Theme::Light, Theme::Dark] {
            let de: StrDeserializer<'_, Error> = theme.as_str().into_deserializer();
            assert_eq!(Theme::deserialize(de), Ok(theme));
        }
        for mode in [DiceMode::One, DiceMode::Two] {
            let de: StrDeserializer<'_, Error> = mode.as_str().into_deserializer();
            assert_eq!(DiceMode::deserialize(de), Ok(mode));
        }
    }

    #[test]
    fn dice_mode_writes_count_string() {
        let mut prefs = Preferences::load(MemoryStore::new());
        prefs.set_dice_mode(DiceMode::One);
        assert_eq!(prefs.store().get(DICE_COUNT_KEY).as_deref(), Some("1"));
        let reloaded = Preferences::load(prefs.into_store());
        assert_eq!(reloaded.dice_mode(), DiceMode::One);
    }
}
