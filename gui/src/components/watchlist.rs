// Watchlist drawer: the mock instrument universe with selection.
#![allow(non_snake_case)]

use dioxus::prelude::*;
use shared::utils::{format_percent, format_price};

use crate::state::terminal::TerminalState;

#[component]
pub fn Watchlist() -> Element {
    let mut terminal = use_context::<Signal<TerminalState>>();

    let items = terminal.read().watchlist.clone();
    let selected = terminal.read().selected_symbol.clone();

    let rows = items.into_iter().map(|item| {
        let symbol = item.symbol.clone();
        let row_class = if item.symbol == selected {
            "watchlist-row selected"
        } else {
            "watchlist-row"
        };
        let change_class = if item.change_percent >= 0.0 {
            "row-change positive"
        } else {
            "row-change negative"
        };
        let class_label = item.asset_class.label();
        let price = format_price(item.last_price);
        let change = format_percent(item.change_percent);

        rsx! {
            li {
                key: "{item.symbol}",
                class: "{row_class}",
                onclick: move |_| terminal.write().select_symbol(&symbol),
                div { class: "row-main",
                    span { class: "row-symbol", "{item.symbol}" }
                    span { class: "row-class", "{class_label}" }
                }
                div { class: "row-name", "{item.name}" }
                div { class: "row-figures",
                    span { class: "row-price", "{price}" }
                    span { class: "{change_class}", "{change}" }
                }
            }
        }
    });

    rsx! {
        aside { class: "watchlist",
            h2 { class: "panel-title", "Watchlist" }
            ul { class: "watchlist-items", {rows} }
        }
    }
}
