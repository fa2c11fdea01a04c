// The rendering surface a theme is projected onto. The gui crate implements
// this over the webview document via `css::apply_script`; headless hosts and
// tests use `NullSurface` or a recording fake.

use crate::types::Theme;

/// Receives projected themes. `apply` carries the full projection contract:
/// CSS variables, the `data-theme` attribute, the dark/light class pair and
/// the `theme-color` meta tag, however the host chooses to realize them.
pub trait RenderSurface {
    fn apply(&self, theme: &Theme);
}

/// Surface for environments without a document. Every projection no-ops.
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn apply(&self, _theme: &Theme) {}
}
