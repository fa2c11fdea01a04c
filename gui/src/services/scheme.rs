// Bridges the webview's `prefers-color-scheme` media query into the theme
// crate's scheme hub. The script reports the current state immediately and
// then every change; the loop ends when the webview tears the channel down.

use std::rc::Rc;

use dioxus::prelude::*;
use theme::SchemeHub;

const SCHEME_WATCH_SCRIPT: &str = r#"
const query = window.matchMedia('(prefers-color-scheme: dark)');
dioxus.send(query.matches);
query.addEventListener('change', (event) => dioxus.send(event.matches));
"#;

pub async fn forward_scheme_changes(hub: Rc<SchemeHub>) {
    let mut watcher = eval(SCHEME_WATCH_SCRIPT);
    loop {
        match watcher.recv().await {
            Ok(value) => {
                let prefers_dark = value.as_bool().unwrap_or(false);
                hub.emit(prefers_dark);
            }
            Err(e) => {
                tracing::debug!("Color-scheme watcher channel closed: {e:?}");
                break;
            }
        }
    }
}
