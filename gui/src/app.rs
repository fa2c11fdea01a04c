// Root component: constructs the theme store once for the session, provides
// the shared signals, starts the projection/scheme bridge and renders the
// terminal shell.
#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use shared::models::MarketQuote;
use theme::{FileStorage, SchemeHub, ThemeStore};

use crate::components::{QuoteBoard, Toolbar, Watchlist};
use crate::config;
use crate::services::scheme::forward_scheme_changes;
use crate::services::surface::WebviewSurface;
use crate::state::markets::load_market_quotes;
use crate::state::terminal::TerminalState;

#[component]
pub fn App() -> Element {
    // The hub is fed by the matchMedia bridge below; the store reads and
    // subscribes to it through the SchemeSignal port.
    let hub = use_hook(|| Rc::new(SchemeHub::new(false)));

    let theme_store = use_context_provider({
        let hub = hub.clone();
        move || {
            Signal::new(ThemeStore::new(
                Box::new(FileStorage::new(config::preferences_dir())),
                Rc::new(WebviewSurface),
                hub,
            ))
        }
    });
    let terminal = use_context_provider(|| Signal::new(TerminalState::default()));
    let quotes = use_context_provider(|| Signal::new(Vec::<MarketQuote>::new()));

    // Initial projection plus the OS color-scheme subscription. The
    // subscription stays registered for as long as the bridge runs; its
    // teardown handle is the only thing that stops it.
    use_future({
        let hub = hub.clone();
        move || {
            let hub = hub.clone();
            async move {
                let subscription = theme_store.read().initialize();
                forward_scheme_changes(hub).await;
                subscription.unsubscribe();
            }
        }
    });

    use_future(move || async move {
        let symbols: Vec<String> = terminal
            .read()
            .watchlist
            .iter()
            .map(|item| item.symbol.clone())
            .collect();
        load_market_quotes(quotes, symbols).await;
    });

    let drawer_open = terminal.read().drawer_open;

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/styles/main.css") }
        div { class: "terminal-shell",
            Toolbar {}
            div { class: "terminal-body",
                if drawer_open {
                    Watchlist {}
                }
                QuoteBoard {}
            }
        }
    }
}
