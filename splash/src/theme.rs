//! Light/dark theme: persisted preference, toggle, and root styling.

use crate::config::THEME_STORAGE_KEY;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only the two literal values are accepted; anything else counts as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#0b0d10",
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            Self::Light => "assets/loctree-logo.svg",
            Self::Dark => "assets/loctree-logo-dark.svg",
        }
    }
}

/// Where the preference lives between visits.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// `window.localStorage`, silently unavailable in private modes etc.
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
    }

    fn save(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, value);
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    current: ThemePreference,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Reads the stored key once; `fallback` decides when nothing valid is stored.
    pub fn load(store: S, fallback: ThemePreference) -> Self {
        let current = store
            .load()
            .as_deref()
            .and_then(ThemePreference::parse)
            .unwrap_or(fallback);
        Self { store, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip and persist; returns the new preference.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str());
        self.current
    }
}

/// `prefers-color-scheme: dark`, Light when the query is unavailable.
pub fn system_preference() -> ThemePreference {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false);
    if prefers_dark {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

/// Mark `<html>` with the `dark` class / `data-theme` and paint the root
/// backgrounds directly so there is no flash before the stylesheet applies.
pub fn apply_theme(theme: ThemePreference) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        let _ = root.set_attribute("data-theme", theme.as_str());
        if let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() {
            let _ = html
                .style()
                .set_property("background-color", theme.background());
        }
    }

    if let Some(body) = document.body() {
        let _ = body
            .style()
            .set_property("background-color", theme.background());
    }
}

/// Reactive handle shared by the nav toggle and themed assets.
#[derive(Clone, Copy)]
pub struct Theme {
    pub preference: RwSignal<ThemePreference>,
    controller: StoredValue<ThemeController<LocalStorageStore>>,
}

impl Theme {
    /// Read the stored preference once and apply it to the document.
    pub fn init() -> Self {
        let controller = ThemeController::load(LocalStorageStore, system_preference());
        let current = controller.current();
        apply_theme(current);
        Self {
            preference: RwSignal::new(current),
            controller: StoredValue::new(controller),
        }
    }

    pub fn toggle(&self) {
        let Some(next) = self.controller.try_update_value(|c| c.toggle_theme()) else {
            return;
        };
        apply_theme(next);
        self.preference.set(next);
    }
}

#[component]
pub fn ThemeToggle(theme: Theme) -> impl IntoView {
    let pref = theme.preference;
    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            title=move || if pref.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
        >
            {move || if pref.get().is_dark() { "\u{2600}" } else { "\u{263E}" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl MemoryStore {
        fn with(value: &str) -> Self {
            Self(Rc::new(RefCell::new(Some(value.to_string()))))
        }

        fn stored(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn stored_preference_wins_over_fallback() {
        let ctl = ThemeController::load(MemoryStore::with("dark"), ThemePreference::Light);
        assert_eq!(ctl.current(), ThemePreference::Dark);
    }

    #[test]
    fn missing_or_garbage_value_uses_fallback() {
        let ctl = ThemeController::load(MemoryStore::default(), ThemePreference::Dark);
        assert_eq!(ctl.current(), ThemePreference::Dark);

        let ctl = ThemeController::load(MemoryStore::with("Dark "), ThemePreference::Light);
        assert_eq!(ctl.current(), ThemePreference::Light);
    }

    #[test]
    fn toggle_persists_new_value() {
        let store = MemoryStore::with("light");
        let mut ctl = ThemeController::load(store.clone(), ThemePreference::Light);
        assert_eq!(ctl.toggle_theme(), ThemePreference::Dark);
        assert_eq!(store.stored().as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_preference_and_stored_value() {
        for initial in ["light", "dark"] {
            let store = MemoryStore::with(initial);
            let mut ctl = ThemeController::load(store.clone(), ThemePreference::Light);
            let before = ctl.current();
            ctl.toggle_theme();
            ctl.toggle_theme();
            assert_eq!(ctl.current(), before);
            assert_eq!(store.stored().as_deref(), Some(initial));
        }
    }

    #[test]
    fn preference_round_trips_through_storage_literal() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
            assert_ne!(pref.toggled(), pref);
        }
    }

    #[test]
    fn logo_follows_theme() {
        assert!(ThemePreference::Dark.logo_src().contains("dark"));
        assert!(!ThemePreference::Light.logo_src().contains("dark"));
    }
}
