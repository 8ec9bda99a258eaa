use std::cell::Cell;

use web_sys::Storage;

use korokoro_core::PreferenceStore;

thread_local! {
    static UNAVAILABLE_WARNED: Cell<bool> = Cell::new(false);
}

/// `window.localStorage`, or nothing at all when the browser refuses it.
#[derive(Clone, Debug)]
pub(crate) struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            warn_unavailable();
        }
        Self { storage }
    }

    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self { storage: None }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            warn_unavailable();
            return;
        };
        if storage.set_item(key, value).is_err() {
            gloo::console::warn!("preference write failed", key.to_string());
        }
    }
}

fn warn_unavailable() {
    let already_warned = UNAVAILABLE_WARNED.with(|flag| flag.replace(true));
    if !already_warned {
        gloo::console::warn!("local storage unavailable; preferences will not persist");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use korokoro_core::{Preferences, Theme, THEME_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn theme_round_trips_through_local_storage() {
        let mut prefs = Preferences::load(LocalStore::open());
        prefs.set_theme(Theme::Light);

        let reloaded = Preferences::load(LocalStore::open());
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(reloaded.store().get(THEME_KEY).as_deref(), Some("light"));

        let mut prefs = reloaded;
        prefs.toggle_theme();
        prefs.toggle_theme();
        assert_eq!(Preferences::load(LocalStore::open()).theme(), Theme::Light);
        prefs.set_theme(Theme::Dark);
    }

    #[wasm_bindgen_test]
    fn detached_store_degrades_to_defaults() {
        let mut store = LocalStore::detached();
        store.set(THEME_KEY, "light");
        assert_eq!(store.get(THEME_KEY), None);
        assert_eq!(Preferences::load(store).theme(), Theme::Dark);
    }
}
