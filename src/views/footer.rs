use dioxus::prelude::*;

use crate::content::FooterInfo;

#[component]
pub fn Footer(name: String, info: FooterInfo) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                "© {info.year} {name}. {info.built_with}"
            }
        }
    }
}
