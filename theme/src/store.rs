// The theme store: selection state (`current_theme_id`, `mode`, registered
// themes) plus the derived active theme, with persistence and projection
// folded into every mutation. Constructed once per session; hosts share it
// by cloning (clones observe the same state).

use std::cell::RefCell;
use std::rc::Rc;

use crate::presets::{self, DEFAULT_THEME_ID};
use crate::scheme::{SchemeSignal, SchemeSubscription};
use crate::storage::{KeyValueStorage, Preferences};
use crate::surface::RenderSurface;
use crate::types::{PreferenceRecord, Theme, ThemeMode};

struct ThemeState {
    current_theme_id: String,
    mode: ThemeMode,
    themes: Vec<Theme>,
}

fn scheme_theme_id(prefers_dark: bool) -> &'static str {
    if prefers_dark {
        "dark"
    } else {
        "light"
    }
}

/// Session-wide theme selection store. All mutation goes through the
/// operations here; consumers only read the derived getters.
#[derive(Clone)]
pub struct ThemeStore {
    state: Rc<RefCell<ThemeState>>,
    prefs: Rc<Preferences>,
    surface: Rc<dyn RenderSurface>,
    scheme: Rc<dyn SchemeSignal>,
}

impl ThemeStore {
    /// Builds the store from the persisted preference record (or defaults)
    /// and the preset catalog. Nothing is projected until [`initialize`]
    /// or the first mutation.
    ///
    /// [`initialize`]: ThemeStore::initialize
    pub fn new(
        storage: Box<dyn KeyValueStorage>,
        surface: Rc<dyn RenderSurface>,
        scheme: Rc<dyn SchemeSignal>,
    ) -> Self {
        let prefs = Preferences::new(storage);
        let record = prefs.load().unwrap_or_default();
        Self {
            state: Rc::new(RefCell::new(ThemeState {
                current_theme_id: record.current_theme_id,
                mode: record.mode,
                themes: presets::preset_themes(),
            })),
            prefs: Rc::new(prefs),
            surface,
            scheme,
        }
    }

    pub fn current_theme_id(&self) -> String {
        self.state.borrow().current_theme_id.clone()
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.borrow().mode
    }

    /// All registered themes, in registration order.
    pub fn available_themes(&self) -> Vec<Theme> {
        self.state.borrow().themes.clone()
    }

    /// The active theme. In system mode the OS preference picks the
    /// `dark`/`light` preset id, falling back to the selected id and then
    /// to the first registered theme; otherwise the selected id wins.
    pub fn current_theme(&self) -> Option<Theme> {
        let state = self.state.borrow();
        if state.mode == ThemeMode::System {
            let target = scheme_theme_id(self.scheme.prefers_dark());
            return state
                .themes
                .iter()
                .find(|t| t.id == target)
                .or_else(|| state.themes.iter().find(|t| t.id == state.current_theme_id))
                .or_else(|| state.themes.first())
                .cloned();
        }
        state
            .themes
            .iter()
            .find(|t| t.id == state.current_theme_id)
            .or_else(|| state.themes.first())
            .cloned()
    }

    pub fn is_dark(&self) -> bool {
        self.current_theme().map(|t| t.is_dark).unwrap_or(false)
    }

    fn persist(&self) {
        let record = {
            let state = self.state.borrow();
            PreferenceRecord {
                current_theme_id: state.current_theme_id.clone(),
                mode: state.mode,
            }
        };
        self.prefs.save(&record);
    }

    /// Selects a registered theme by id. Unknown ids are silently ignored.
    /// Choosing a concrete theme exits system mode, collapsing it to the
    /// theme's own light/dark mode.
    pub fn set_theme(&mut self, theme_id: &str) {
        let theme = {
            let state = self.state.borrow();
            state.themes.iter().find(|t| t.id == theme_id).cloned()
        };
        let Some(theme) = theme else {
            tracing::debug!("Ignoring unknown theme id: {theme_id}");
            return;
        };

        {
            let mut state = self.state.borrow_mut();
            state.current_theme_id = theme_id.to_string();
            if state.mode == ThemeMode::System {
                state.mode = if theme.is_dark {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                };
            }
        }
        self.persist();
        self.surface.apply(&theme);
    }

    /// Sets the mode. System mode projects whichever preset id matches the
    /// live OS preference; concrete modes re-project the selected theme.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.state.borrow_mut().mode = mode;
        self.persist();

        let target = {
            let state = self.state.borrow();
            if mode == ThemeMode::System {
                let target = scheme_theme_id(self.scheme.prefers_dark());
                state.themes.iter().find(|t| t.id == target).cloned()
            } else {
                state
                    .themes
                    .iter()
                    .find(|t| t.id == state.current_theme_id)
                    .cloned()
            }
        };
        if let Some(theme) = target {
            self.surface.apply(&theme);
        }
    }

    /// Flips to the opposite of the derived `is_dark` flag, selecting the
    /// first registered theme whose flag matches. Projection is skipped if
    /// no theme matches; the mode change still persists.
    pub fn toggle_dark_mode(&mut self) {
        let target_dark = !self.is_dark();
        let theme = {
            let mut state = self.state.borrow_mut();
            state.mode = if target_dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            let theme = state.themes.iter().find(|t| t.is_dark == target_dark).cloned();
            if let Some(theme) = &theme {
                state.current_theme_id = theme.id.clone();
            }
            theme
        };
        self.persist();
        if let Some(theme) = theme {
            self.surface.apply(&theme);
        }
    }

    /// Upserts a theme: an existing id is replaced in place (keeping its
    /// position), a new id is appended.
    pub fn register_theme(&mut self, theme: Theme) {
        let mut state = self.state.borrow_mut();
        if let Some(slot) = state.themes.iter_mut().find(|t| t.id == theme.id) {
            *slot = theme;
        } else {
            state.themes.push(theme);
        }
    }

    /// Removes a runtime-registered theme. Presets are protected; removing
    /// the active theme recovers onto the default.
    pub fn unregister_theme(&mut self, theme_id: &str) {
        if presets::is_preset(theme_id) {
            tracing::warn!("Cannot unregister preset theme: {theme_id}");
            return;
        }

        let was_active = {
            let mut state = self.state.borrow_mut();
            state.themes.retain(|t| t.id != theme_id);
            state.current_theme_id == theme_id
        };
        if was_active {
            self.set_theme(DEFAULT_THEME_ID);
        }
    }

    /// Projects the current derived theme immediately, then subscribes to
    /// OS color-scheme changes: while the mode is `System`, each change
    /// re-projects the matching preset id without touching the selection.
    /// The returned handle is the only way to stop listening.
    pub fn initialize(&self) -> SchemeSubscription {
        if let Some(theme) = self.current_theme() {
            self.surface.apply(&theme);
        }

        let state = Rc::downgrade(&self.state);
        let surface = self.surface.clone();
        self.scheme.subscribe(Rc::new(move |prefers_dark| {
            let Some(state) = state.upgrade() else {
                return;
            };
            let state = state.borrow();
            if state.mode != ThemeMode::System {
                return;
            }
            let target = scheme_theme_id(prefers_dark);
            if let Some(theme) = state.themes.iter().find(|t| t.id == target) {
                surface.apply(theme);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::create_custom_theme;
    use crate::scheme::SchemeHub;
    use crate::storage::{KeyValueStorage, MemoryStorage, STORAGE_KEY};
    use crate::types::ThemeOverrides;

    struct RecordingSurface {
        applied: Rc<RefCell<Vec<String>>>,
    }

    impl RenderSurface for RecordingSurface {
        fn apply(&self, theme: &Theme) {
            self.applied.borrow_mut().push(theme.id.clone());
        }
    }

    struct Fixture {
        store: ThemeStore,
        storage: MemoryStorage,
        hub: SchemeHub,
        applied: Rc<RefCell<Vec<String>>>,
    }

    fn fixture_with_storage(storage: MemoryStorage) -> Fixture {
        let hub = SchemeHub::new(false);
        let applied = Rc::new(RefCell::new(Vec::new()));
        let store = ThemeStore::new(
            Box::new(storage.clone()),
            Rc::new(RecordingSurface {
                applied: applied.clone(),
            }),
            Rc::new(hub.clone()),
        );
        Fixture {
            store,
            storage,
            hub,
            applied,
        }
    }

    fn fixture() -> Fixture {
        fixture_with_storage(MemoryStorage::new())
    }

    fn custom_theme(id: &str, dark: bool) -> Theme {
        let base = if dark {
            presets::dark_theme()
        } else {
            presets::light_theme()
        };
        create_custom_theme(id, id, &base, &ThemeOverrides::default())
    }

    #[test]
    fn defaults_when_nothing_is_stored() {
        let f = fixture();
        assert_eq!(f.store.current_theme_id(), DEFAULT_THEME_ID);
        assert_eq!(f.store.mode(), ThemeMode::System);
        assert_eq!(f.store.available_themes().len(), 2);
    }

    #[test]
    fn construction_honors_stored_record() {
        let storage = MemoryStorage::new();
        storage
            .set(STORAGE_KEY, r#"{"currentThemeId":"light","mode":"light"}"#)
            .unwrap();
        let f = fixture_with_storage(storage);
        assert_eq!(f.store.current_theme_id(), "light");
        assert_eq!(f.store.mode(), ThemeMode::Light);
        assert!(!f.store.is_dark());
    }

    #[test]
    fn system_mode_follows_os_preference() {
        let f = fixture();
        f.hub.set(true);
        assert_eq!(f.store.current_theme().unwrap().id, "dark");
        assert!(f.store.is_dark());

        f.hub.set(false);
        assert_eq!(f.store.current_theme().unwrap().id, "light");
        assert!(!f.store.is_dark());
    }

    #[test]
    fn set_theme_with_unknown_id_is_a_noop() {
        let mut f = fixture();
        f.store.set_theme("does-not-exist");
        assert_eq!(f.store.current_theme_id(), DEFAULT_THEME_ID);
        assert!(f.applied.borrow().is_empty());
        assert!(f.storage.get(STORAGE_KEY).is_none());
    }

    #[test]
    fn set_theme_collapses_system_mode() {
        let mut f = fixture();
        assert_eq!(f.store.mode(), ThemeMode::System);

        f.store.set_theme("light");
        assert_eq!(f.store.current_theme_id(), "light");
        assert_eq!(f.store.mode(), ThemeMode::Light);
        assert_eq!(f.applied.borrow().as_slice(), ["light"]);
        assert_eq!(
            f.storage.get(STORAGE_KEY).unwrap(),
            r#"{"currentThemeId":"light","mode":"light"}"#
        );
    }

    #[test]
    fn set_mode_system_projects_the_os_matching_preset() {
        let mut f = fixture();
        f.store.set_theme("light");
        f.hub.set(true);

        f.store.set_mode(ThemeMode::System);
        // Projects the dark preset, not the selected light theme.
        assert_eq!(f.applied.borrow().last().unwrap(), "dark");
        assert_eq!(f.store.current_theme_id(), "light");
    }

    #[test]
    fn set_mode_concrete_projects_the_selected_theme() {
        let mut f = fixture();
        f.store.set_theme("light");
        f.store.set_mode(ThemeMode::Dark);
        // Mode is authoritative for persistence; projection follows the
        // selected id.
        assert_eq!(f.applied.borrow().last().unwrap(), "light");
        assert_eq!(f.store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn scheme_change_reprojects_without_touching_selection() {
        let mut f = fixture();
        f.store.register_theme(custom_theme("custom", false));
        f.store.set_theme("custom");
        f.store.set_mode(ThemeMode::System);
        let sub = f.store.initialize();
        f.applied.borrow_mut().clear();

        f.hub.emit(true);
        assert_eq!(f.applied.borrow().as_slice(), ["dark"]);
        assert_eq!(f.store.current_theme_id(), "custom");

        sub.unsubscribe();
        f.hub.emit(false);
        assert_eq!(f.applied.borrow().as_slice(), ["dark"]);
    }

    #[test]
    fn scheme_change_is_ignored_outside_system_mode() {
        let mut f = fixture();
        f.store.set_theme("light");
        let _sub = f.store.initialize();
        f.applied.borrow_mut().clear();

        f.hub.emit(true);
        assert!(f.applied.borrow().is_empty());
    }

    #[test]
    fn initialize_projects_the_derived_theme_immediately() {
        let f = fixture();
        f.hub.set(true);
        let _sub = f.store.initialize();
        assert_eq!(f.applied.borrow().as_slice(), ["dark"]);
    }

    #[test]
    fn toggle_flips_the_derived_flag() {
        let mut f = fixture();
        f.hub.set(true); // system mode resolves dark

        f.store.toggle_dark_mode();
        assert_eq!(f.store.mode(), ThemeMode::Light);
        assert_eq!(f.store.current_theme_id(), "light");
        assert_eq!(f.applied.borrow().last().unwrap(), "light");

        f.store.toggle_dark_mode();
        assert_eq!(f.store.mode(), ThemeMode::Dark);
        assert_eq!(f.store.current_theme_id(), "dark");
        assert_eq!(f.applied.borrow().last().unwrap(), "dark");
    }

    #[test]
    fn register_replaces_in_place_or_appends() {
        let mut f = fixture();
        let mut replacement = presets::light_theme();
        replacement.name = "Paper".to_string();
        f.store.register_theme(replacement);

        let themes = f.store.available_themes();
        assert_eq!(themes.len(), 2);
        assert_eq!(themes[0].id, "light");
        assert_eq!(themes[0].name, "Paper");

        f.store.register_theme(custom_theme("custom", true));
        assert_eq!(f.store.available_themes().last().unwrap().id, "custom");
    }

    #[test]
    fn unregister_preset_is_rejected() {
        let mut f = fixture();
        f.store.set_theme("dark");
        f.applied.borrow_mut().clear();

        f.store.unregister_theme("dark");
        assert_eq!(f.store.available_themes().len(), 2);
        assert_eq!(f.store.current_theme_id(), "dark");
        assert!(f.applied.borrow().is_empty());
    }

    #[test]
    fn unregister_active_custom_recovers_to_default() {
        let mut f = fixture();
        f.store.register_theme(custom_theme("custom", true));
        f.store.set_theme("custom");

        f.store.unregister_theme("custom");
        assert_eq!(f.store.current_theme_id(), DEFAULT_THEME_ID);
        assert!(f.store.available_themes().iter().all(|t| t.id != "custom"));
        assert_eq!(f.applied.borrow().last().unwrap(), DEFAULT_THEME_ID);
    }

    #[test]
    fn runs_without_storage_or_document() {
        let hub = SchemeHub::new(false);
        let mut store = ThemeStore::new(
            Box::new(crate::storage::NullStorage),
            Rc::new(crate::surface::NullSurface),
            Rc::new(hub.clone()),
        );
        let _sub = store.initialize();
        store.set_theme("light");
        store.toggle_dark_mode();
        hub.emit(true);
        assert_eq!(store.current_theme_id(), "dark");
    }

    #[test]
    fn preferences_survive_a_new_session() {
        let storage = MemoryStorage::new();
        {
            let mut f = fixture_with_storage(storage.clone());
            f.store.set_theme("light");
        }
        let f = fixture_with_storage(storage);
        assert_eq!(f.store.current_theme_id(), "light");
        assert_eq!(f.store.mode(), ThemeMode::Light);
    }
}
