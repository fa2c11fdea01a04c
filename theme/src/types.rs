// Core theme data model. A `Theme` is a complete set of design tokens: six
// closed token groups plus identity fields. Partial token tables exist only
// as `*Overrides` patches fed to the merge operations in `css`; every theme
// held by the store has a value for every key.

use serde::{Deserialize, Serialize};

use crate::presets::DEFAULT_THEME_ID;

/// Where the light/dark decision comes from: an explicit choice, or the OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(name)
    }
}

/// The slice of theme state that survives a session. Only the selection is
/// persisted; theme definitions themselves are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    pub current_theme_id: String,
    pub mode: ThemeMode,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            current_theme_id: DEFAULT_THEME_ID.to_string(),
            mode: ThemeMode::System,
        }
    }
}

// Defines a token group struct, its all-optional override patch, and the
// per-key merge between them. Serde names stay camelCase so the CSS
// variable derivation and any serialized theme JSON share one key set.
macro_rules! token_group {
    (
        $(#[$meta:meta])*
        $group:ident, $overrides:ident {
            $($field:ident : $ty:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $group {
            $(pub $field: $ty,)+
        }

        #[doc = concat!("Partial patch for [`", stringify!($group), "`].")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $overrides {
            $(pub $field: Option<$ty>,)+
        }

        impl $group {
            /// Applies the set keys of `patch`; unset keys keep the base value.
            pub fn merged(&self, patch: &$overrides) -> Self {
                Self {
                    $($field: patch.$field.clone().unwrap_or_else(|| self.$field.clone()),)+
                }
            }
        }
    };
}

token_group! {
    /// Semantic color tokens. All values are CSS color strings; the preset
    /// catalog uses 6-digit hex so the color helpers apply cleanly.
    ThemeColors, ThemeColorsOverrides {
        primary: String,
        primary_hover: String,
        primary_active: String,
        secondary: String,
        secondary_hover: String,
        accent: String,
        accent_hover: String,
        background: String,
        surface: String,
        card: String,
        text: String,
        text_secondary: String,
        text_muted: String,
        border: String,
        divider: String,
        success: String,
        warning: String,
        error: String,
        info: String,
        bullish: String,
        bearish: String,
    }
}

token_group! {
    /// Font families, sizes, weights, line heights and letter spacing.
    ThemeTypography, ThemeTypographyOverrides {
        font_family: String,
        font_family_mono: String,
        font_family_heading: String,
        font_size_xs: String,
        font_size_sm: String,
        font_size_base: String,
        font_size_lg: String,
        font_size_xl: String,
        font_size_2xl: String,
        font_size_3xl: String,
        font_size_4xl: String,
        font_weight_light: u16,
        font_weight_normal: u16,
        font_weight_medium: u16,
        font_weight_semibold: u16,
        font_weight_bold: u16,
        line_height_tight: String,
        line_height_normal: String,
        line_height_relaxed: String,
        letter_spacing_tight: String,
        letter_spacing_normal: String,
        letter_spacing_wide: String,
    }
}

token_group! {
    /// Corner radii and border widths.
    ThemeShape, ThemeShapeOverrides {
        radius_none: String,
        radius_sm: String,
        radius_md: String,
        radius_lg: String,
        radius_xl: String,
        radius_2xl: String,
        radius_full: String,
        border_width_none: String,
        border_width_thin: String,
        border_width_normal: String,
        border_width_thick: String,
    }
}

token_group! {
    /// Spacing scale.
    ThemeSpacing, ThemeSpacingOverrides {
        spacing_0: String,
        spacing_1: String,
        spacing_2: String,
        spacing_3: String,
        spacing_4: String,
        spacing_5: String,
        spacing_6: String,
        spacing_8: String,
        spacing_10: String,
        spacing_12: String,
        spacing_16: String,
        spacing_20: String,
        spacing_24: String,
    }
}

token_group! {
    /// Elevation shadows.
    ThemeShadows, ThemeShadowsOverrides {
        shadow_none: String,
        shadow_sm: String,
        shadow_md: String,
        shadow_lg: String,
        shadow_xl: String,
        shadow_2xl: String,
        shadow_inner: String,
    }
}

token_group! {
    /// Motion durations and easing.
    ThemeTransitions, ThemeTransitionsOverrides {
        transition_fast: String,
        transition_normal: String,
        transition_slow: String,
        transition_easing: String,
    }
}

/// A complete, named set of visual tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub is_dark: bool,
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub shape: ThemeShape,
    pub spacing: ThemeSpacing,
    pub shadows: ThemeShadows,
    pub transitions: ThemeTransitions,
}

/// Partial theme patch accepted by [`crate::css::merge_themes`]. Top-level
/// fields replace wholesale; each token group merges key by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub is_dark: Option<bool>,
    pub colors: ThemeColorsOverrides,
    pub typography: ThemeTypographyOverrides,
    pub shape: ThemeShapeOverrides,
    pub spacing: ThemeSpacingOverrides,
    pub shadows: ThemeShadowsOverrides,
    pub transitions: ThemeTransitionsOverrides,
}
