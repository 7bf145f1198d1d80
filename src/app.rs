use dioxus::prelude::*;

use crate::configs::AppConfig;
use crate::storage::platform_storage;
use crate::theme::{ platform_marker, use_theme_provider, ThemeStore };
use crate::views::Portfolio;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[component]
pub fn App() -> Element {
    use_theme_provider(|| {
        let config = AppConfig::default();
        let marker = platform_marker(config.marker_class);
        ThemeStore::initialize(config, platform_storage(), marker)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Portfolio {}
    }
}
