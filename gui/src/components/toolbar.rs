// Top toolbar: drawer toggle, app identity, selected symbol, theme controls.
#![allow(non_snake_case)]

use dioxus::prelude::*;
use theme::ThemeStore;

use crate::components::ThemeSwitcher;
use crate::state::terminal::TerminalState;

#[component]
pub fn Toolbar() -> Element {
    let mut terminal = use_context::<Signal<TerminalState>>();
    let mut theme = use_context::<Signal<ThemeStore>>();

    let selected_symbol = terminal.read().selected_symbol.clone();
    let is_dark = theme.read().is_dark();
    let toggle_label = if is_dark { "Light mode" } else { "Dark mode" };

    rsx! {
        header { class: "toolbar",
            button {
                class: "toolbar-button",
                onclick: move |_| terminal.write().toggle_drawer(),
                "Watchlist"
            }
            span { class: "toolbar-title", "Trading Terminal" }
            span { class: "toolbar-symbol", "{selected_symbol}" }
            div { class: "toolbar-actions",
                ThemeSwitcher {}
                button {
                    class: "toolbar-button",
                    onclick: move |_| theme.write().toggle_dark_mode(),
                    "{toggle_label}"
                }
            }
        }
    }
}
