use dioxus::prelude::*;

use crate::theme::use_theme;

/// The only control that mutates the theme.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let toggle = theme.clone();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            title: if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" },
            onclick: move |_| {
                toggle.toggle();
            },
            if theme.is_dark() {
                "🌞"
            } else {
                "🌙"
            }
        }
    }
}
