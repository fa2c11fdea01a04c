// Built-in theme catalog. Presets are immutable: the store refuses to
// unregister them, and customization goes through `css::create_custom_theme`
// rather than editing an entry in place.

use once_cell::sync::Lazy;

use crate::types::{
    Theme, ThemeColors, ThemeShadows, ThemeShape, ThemeSpacing, ThemeTransitions, ThemeTypography,
};

/// Theme selected when no stored preference resolves.
pub const DEFAULT_THEME_ID: &str = "dark";

fn shared_typography() -> ThemeTypography {
    ThemeTypography {
        font_family: "Inter, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif".to_string(),
        font_family_mono: "\"JetBrains Mono\", \"Fira Code\", Consolas, Monaco, \"Courier New\", monospace".to_string(),
        font_family_heading: "Inter, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif".to_string(),
        font_size_xs: "0.75rem".to_string(),
        font_size_sm: "0.875rem".to_string(),
        font_size_base: "1rem".to_string(),
        font_size_lg: "1.125rem".to_string(),
        font_size_xl: "1.25rem".to_string(),
        font_size_2xl: "1.5rem".to_string(),
        font_size_3xl: "1.875rem".to_string(),
        font_size_4xl: "2.25rem".to_string(),
        font_weight_light: 300,
        font_weight_normal: 400,
        font_weight_medium: 500,
        font_weight_semibold: 600,
        font_weight_bold: 700,
        line_height_tight: "1.25".to_string(),
        line_height_normal: "1.5".to_string(),
        line_height_relaxed: "1.75".to_string(),
        letter_spacing_tight: "-0.025em".to_string(),
        letter_spacing_normal: "0".to_string(),
        letter_spacing_wide: "0.025em".to_string(),
    }
}

fn shared_shape() -> ThemeShape {
    ThemeShape {
        radius_none: "0".to_string(),
        radius_sm: "0.25rem".to_string(),
        radius_md: "0.375rem".to_string(),
        radius_lg: "0.5rem".to_string(),
        radius_xl: "0.75rem".to_string(),
        radius_2xl: "1rem".to_string(),
        radius_full: "9999px".to_string(),
        border_width_none: "0".to_string(),
        border_width_thin: "1px".to_string(),
        border_width_normal: "2px".to_string(),
        border_width_thick: "4px".to_string(),
    }
}

fn shared_spacing() -> ThemeSpacing {
    ThemeSpacing {
        spacing_0: "0".to_string(),
        spacing_1: "0.25rem".to_string(),
        spacing_2: "0.5rem".to_string(),
        spacing_3: "0.75rem".to_string(),
        spacing_4: "1rem".to_string(),
        spacing_5: "1.25rem".to_string(),
        spacing_6: "1.5rem".to_string(),
        spacing_8: "2rem".to_string(),
        spacing_10: "2.5rem".to_string(),
        spacing_12: "3rem".to_string(),
        spacing_16: "4rem".to_string(),
        spacing_20: "5rem".to_string(),
        spacing_24: "6rem".to_string(),
    }
}

fn light_shadows() -> ThemeShadows {
    ThemeShadows {
        shadow_none: "none".to_string(),
        shadow_sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)".to_string(),
        shadow_md: "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)".to_string(),
        shadow_lg: "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)".to_string(),
        shadow_xl: "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)".to_string(),
        shadow_2xl: "0 25px 50px -12px rgb(0 0 0 / 0.25)".to_string(),
        shadow_inner: "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)".to_string(),
    }
}

// Dark surfaces need stronger shadows to read as elevation.
fn dark_shadows() -> ThemeShadows {
    ThemeShadows {
        shadow_none: "none".to_string(),
        shadow_sm: "0 1px 2px 0 rgb(0 0 0 / 0.45)".to_string(),
        shadow_md: "0 6px 12px -4px rgb(0 0 0 / 0.55), 0 2px 4px -2px rgb(0 0 0 / 0.4)".to_string(),
        shadow_lg: "0 12px 20px -6px rgb(0 0 0 / 0.6), 0 4px 8px -4px rgb(0 0 0 / 0.45)".to_string(),
        shadow_xl: "0 18px 28px -8px rgb(0 0 0 / 0.65), 0 6px 12px -6px rgb(0 0 0 / 0.5)".to_string(),
        shadow_2xl: "0 28px 50px -14px rgb(0 0 0 / 0.7)".to_string(),
        shadow_inner: "inset 0 1px 3px 0 rgb(0 0 0 / 0.5)".to_string(),
    }
}

fn shared_transitions() -> ThemeTransitions {
    ThemeTransitions {
        transition_fast: "150ms".to_string(),
        transition_normal: "200ms".to_string(),
        transition_slow: "300ms".to_string(),
        transition_easing: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
    }
}

static LIGHT: Lazy<Theme> = Lazy::new(|| Theme {
    id: "light".to_string(),
    name: "Light".to_string(),
    is_dark: false,
    colors: ThemeColors {
        primary: "#3b82f6".to_string(),
        primary_hover: "#2563eb".to_string(),
        primary_active: "#1d4ed8".to_string(),
        secondary: "#64748b".to_string(),
        secondary_hover: "#475569".to_string(),
        accent: "#8b5cf6".to_string(),
        accent_hover: "#7c3aed".to_string(),
        background: "#ffffff".to_string(),
        surface: "#f8fafc".to_string(),
        card: "#ffffff".to_string(),
        text: "#0f172a".to_string(),
        text_secondary: "#475569".to_string(),
        text_muted: "#94a3b8".to_string(),
        border: "#e2e8f0".to_string(),
        divider: "#f1f5f9".to_string(),
        success: "#22c55e".to_string(),
        warning: "#f59e0b".to_string(),
        error: "#ef4444".to_string(),
        info: "#3b82f6".to_string(),
        bullish: "#22c55e".to_string(),
        bearish: "#ef4444".to_string(),
    },
    typography: shared_typography(),
    shape: shared_shape(),
    spacing: shared_spacing(),
    shadows: light_shadows(),
    transitions: shared_transitions(),
});

static DARK: Lazy<Theme> = Lazy::new(|| Theme {
    id: "dark".to_string(),
    name: "Dark".to_string(),
    is_dark: true,
    colors: ThemeColors {
        primary: "#3a8edb".to_string(),
        primary_hover: "#2f7dc7".to_string(),
        primary_active: "#2569a8".to_string(),
        secondary: "#9aa6b2".to_string(),
        secondary_hover: "#b7c0cc".to_string(),
        accent: "#d08b3c".to_string(),
        accent_hover: "#b97932".to_string(),
        background: "#111315".to_string(),
        surface: "#1a1d21".to_string(),
        card: "#20252b".to_string(),
        text: "#e6e8eb".to_string(),
        text_secondary: "#b7bec8".to_string(),
        text_muted: "#7e8793".to_string(),
        border: "#2a2f36".to_string(),
        divider: "#1a1d21".to_string(),
        success: "#3fb950".to_string(),
        warning: "#d9a441".to_string(),
        error: "#e05252".to_string(),
        info: "#3a8edb".to_string(),
        bullish: "#3fb950".to_string(),
        bearish: "#e05252".to_string(),
    },
    typography: shared_typography(),
    shape: shared_shape(),
    spacing: shared_spacing(),
    shadows: dark_shadows(),
    transitions: shared_transitions(),
});

/// The built-in light theme.
pub fn light_theme() -> Theme {
    LIGHT.clone()
}

/// The built-in dark theme (the default).
pub fn dark_theme() -> Theme {
    DARK.clone()
}

/// All preset themes, in registration order.
pub fn preset_themes() -> Vec<Theme> {
    vec![light_theme(), dark_theme()]
}

/// Whether `id` names a built-in preset. Presets cannot be unregistered.
pub fn is_preset(id: &str) -> bool {
    id == LIGHT.id || id == DARK.id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_default() {
        assert!(preset_themes().iter().any(|t| t.id == DEFAULT_THEME_ID));
    }

    #[test]
    fn preset_flags_match_ids() {
        assert!(!light_theme().is_dark);
        assert!(dark_theme().is_dark);
        assert!(is_preset("light"));
        assert!(is_preset("dark"));
        assert!(!is_preset("solarized"));
    }
}
