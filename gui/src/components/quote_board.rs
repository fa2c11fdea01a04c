// Market quote board for the watchlist universe.
#![allow(non_snake_case)]

use dioxus::prelude::*;
use shared::models::MarketQuote;
use shared::utils::{format_percent, format_price};

use crate::state::terminal::TerminalState;

#[component]
pub fn QuoteBoard() -> Element {
    let quotes = use_context::<Signal<Vec<MarketQuote>>>();
    let terminal = use_context::<Signal<TerminalState>>();

    let selected = terminal.read().selected_symbol.clone();
    let snapshot = quotes.read().clone();
    let is_empty = snapshot.is_empty();

    let cards = snapshot.into_iter().map(|quote| {
        let card_class = if quote.symbol == selected {
            "quote-card selected"
        } else {
            "quote-card"
        };
        let change_class = if quote.change_percent >= 0.0 {
            "quote-change positive"
        } else {
            "quote-change negative"
        };
        let price = format_price(quote.price);
        let change = format_percent(quote.change_percent);
        let updated = quote.updated_at.format("%H:%M:%S UTC").to_string();

        rsx! {
            div { key: "{quote.symbol}", class: "{card_class}",
                div { class: "quote-symbol", "{quote.symbol}" }
                div { class: "quote-price", "{price}" }
                div { class: "{change_class}", "{change}" }
                div { class: "quote-updated", "{updated}" }
            }
        }
    });

    rsx! {
        section { class: "quote-board",
            h2 { class: "panel-title", "Market Quotes" }
            if is_empty {
                p { class: "quote-empty", "No quotes available." }
            }
            div { class: "quote-grid", {cards} }
        }
    }
}
