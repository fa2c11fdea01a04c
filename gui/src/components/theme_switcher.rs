// Theme selection controls: a dropdown over the registered themes and the
// light/dark/system mode buttons.
#![allow(non_snake_case)]

use dioxus::prelude::*;
use theme::{ThemeMode, ThemeStore};

const MODES: [(&str, ThemeMode); 3] = [
    ("Light", ThemeMode::Light),
    ("Dark", ThemeMode::Dark),
    ("System", ThemeMode::System),
];

#[component]
pub fn ThemeSwitcher() -> Element {
    let mut theme = use_context::<Signal<ThemeStore>>();

    let themes = theme.read().available_themes();
    let current_id = theme.read().current_theme_id();
    let mode = theme.read().mode();

    let options = themes.into_iter().map(|t| {
        let selected = t.id == current_id;
        rsx! {
            option { key: "{t.id}", value: "{t.id}", selected: selected, "{t.name}" }
        }
    });

    let mode_buttons = MODES.iter().map(|(label, value)| {
        let value = *value;
        let class = if mode == value {
            "mode-button active"
        } else {
            "mode-button"
        };
        rsx! {
            button {
                key: "{label}",
                class: "{class}",
                onclick: move |_| theme.write().set_mode(value),
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "theme-switcher",
            select {
                class: "theme-select",
                onchange: move |evt| theme.write().set_theme(&evt.value()),
                {options}
            }
            div { class: "mode-buttons", {mode_buttons} }
        }
    }
}
