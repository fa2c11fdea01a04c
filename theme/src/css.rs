// CSS projection: flattening a theme's token groups into custom properties,
// rendering them as a `:root` block for pre-rendered heads, building the
// script a webview host runs to apply a theme to a live document, and the
// merge operations that derive custom themes from a base.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::{Theme, ThemeOverrides};

/// Camel-case token key to kebab-case CSS fragment: a hyphen goes between a
/// lowercase letter or digit and the uppercase letter that follows it, and
/// everything lowercases. `primaryHover` -> `primary-hover`,
/// `fontSize2xl` -> `font-size2xl`.
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(ch);
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

fn token_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn extend_from_group<T: serde::Serialize>(
    variables: &mut BTreeMap<String, String>,
    group: &T,
    prefix: &str,
) {
    // Token groups are flat structs of strings and numeric weights, so
    // serializing to a JSON map enumerates exactly the declared key set.
    let Ok(Value::Object(map)) = serde_json::to_value(group) else {
        return;
    };
    for (key, value) in &map {
        if let Some(text) = token_value(value) {
            variables.insert(format!("{prefix}{}", kebab_case(key)), text);
        }
    }
}

/// Flattens every token group into CSS custom-property names. Color keys
/// get a `--color-` prefix; the other groups keep their bare key.
pub fn css_variables(theme: &Theme) -> BTreeMap<String, String> {
    let mut variables = BTreeMap::new();
    extend_from_group(&mut variables, &theme.colors, "--color-");
    extend_from_group(&mut variables, &theme.typography, "--");
    extend_from_group(&mut variables, &theme.shape, "--");
    extend_from_group(&mut variables, &theme.spacing, "--");
    extend_from_group(&mut variables, &theme.shadows, "--");
    extend_from_group(&mut variables, &theme.transitions, "--");
    variables
}

/// Renders the projected variables as a `:root { ... }` block, for hosts
/// that pre-render style text instead of mutating a live document.
pub fn css_text(theme: &Theme) -> String {
    let mut out = String::from(":root {\n");
    for (name, value) in css_variables(theme) {
        out.push_str("  ");
        out.push_str(&name);
        out.push_str(": ");
        out.push_str(&value);
        out.push_str(";\n");
    }
    out.push('}');
    out
}

/// Builds the script a webview runs to project `theme` onto the document:
/// sets every variable on the root element, sets `data-theme`, swaps the
/// `dark`/`light` class pair, and upserts the `theme-color` meta tag.
pub fn apply_script(theme: &Theme) -> String {
    // BTreeMap serializes to a plain JSON object; ids come from the theme
    // catalog and never contain quotes.
    let variables =
        serde_json::to_string(&css_variables(theme)).unwrap_or_else(|_| "{}".to_string());
    let (add_class, remove_class) = if theme.is_dark {
        ("dark", "light")
    } else {
        ("light", "dark")
    };
    format!(
        r#"(function() {{
  const vars = {variables};
  const root = document.documentElement;
  for (const [name, value] of Object.entries(vars)) {{
    root.style.setProperty(name, value);
  }}
  root.setAttribute('data-theme', '{id}');
  root.classList.add('{add_class}');
  root.classList.remove('{remove_class}');
  let meta = document.querySelector('meta[name="theme-color"]');
  if (!meta) {{
    meta = document.createElement('meta');
    meta.setAttribute('name', 'theme-color');
    document.head.appendChild(meta);
  }}
  meta.setAttribute('content', '{background}');
}})();"#,
        id = theme.id,
        background = theme.colors.background,
    )
}

/// Merges `overrides` into `base`: top-level fields replace wholesale, each
/// token group merges key by key (unset keys keep the base value). When
/// `base` is complete the result is complete.
pub fn merge_themes(base: &Theme, overrides: &ThemeOverrides) -> Theme {
    Theme {
        id: overrides.id.clone().unwrap_or_else(|| base.id.clone()),
        name: overrides.name.clone().unwrap_or_else(|| base.name.clone()),
        is_dark: overrides.is_dark.unwrap_or(base.is_dark),
        colors: base.colors.merged(&overrides.colors),
        typography: base.typography.merged(&overrides.typography),
        shape: base.shape.merged(&overrides.shape),
        spacing: base.spacing.merged(&overrides.spacing),
        shadows: base.shadows.merged(&overrides.shadows),
        transitions: base.transitions.merged(&overrides.transitions),
    }
}

/// Derives a new theme from `base` with a forced identity, so the result is
/// registrable alongside `base` even when no token changed.
pub fn create_custom_theme(id: &str, name: &str, base: &Theme, overrides: &ThemeOverrides) -> Theme {
    let mut theme = merge_themes(base, overrides);
    theme.id = id.to_string();
    theme.name = name.to_string();
    theme
}
