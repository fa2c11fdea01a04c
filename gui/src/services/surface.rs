// Webview projection surface: realizes a theme on the live document by
// evaluating the projection script. Must only be used from within the
// Dioxus runtime, which is where every store mutation originates.

use theme::{apply_script, RenderSurface, Theme};

use dioxus::prelude::*;

pub struct WebviewSurface;

impl RenderSurface for WebviewSurface {
    fn apply(&self, theme: &Theme) {
        let script = apply_script(theme);
        let _ = eval(&script);
        tracing::debug!(theme = %theme.id, "Projected theme to the webview document");
    }
}
