// Theme management for the trading terminal: a catalog of preset themes,
// a best-effort preference store, CSS custom-property projection, and the
// store that ties selection state to persistence and the rendering surface.
//
// The crate is UI-framework agnostic. Hosts plug in through three small
// traits: `KeyValueStorage` (where the preference record lives),
// `RenderSurface` (where projected themes land), and `SchemeSignal`
// (how the OS light/dark preference is read and watched).

pub mod color;
pub mod css;
pub mod presets;
pub mod scheme;
pub mod storage;
pub mod store;
pub mod surface;
pub mod types;

pub use color::{adjust_brightness, contrast_color, hex_to_rgba};
pub use css::{apply_script, create_custom_theme, css_text, css_variables, merge_themes};
pub use presets::{preset_themes, DEFAULT_THEME_ID};
pub use scheme::{SchemeHub, SchemeSignal, SchemeSubscription};
pub use storage::{
    FileStorage, KeyValueStorage, MemoryStorage, NullStorage, Preferences, StorageError,
};
pub use store::ThemeStore;
pub use surface::{NullSurface, RenderSurface};
pub use types::{
    PreferenceRecord, Theme, ThemeColors, ThemeMode, ThemeOverrides, ThemeShadows, ThemeShape,
    ThemeSpacing, ThemeTransitions, ThemeTypography,
};
