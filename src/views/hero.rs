use dioxus::prelude::*;

use crate::content::Profile;
use crate::theme::use_theme;

#[component]
fn SocialBtn(href: String, #[props(into)] label: String, #[props(into)] glyph: String) -> Element {
    rsx! {
        a {
            class: "social-btn",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{label}",
            "{glyph}"
        }
    }
}

#[component]
pub fn Hero(profile: Profile) -> Element {
    let theme = use_theme();
    let contact = &profile.contact;

    rsx! {
        header { class: "hero",
            div {
                class: if theme.is_dark() { "hero-glow glow-cyan" } else { "hero-glow glow-blue" },
            }
            div { class: "hero-inner",
                div { class: "badge", "{profile.badge}" }
                h1 { class: "hero-title",
                    "Hi, I'm "
                    span {
                        class: if theme.is_dark() { "gradient-text gradient-cyan" } else { "gradient-text gradient-indigo" },
                        "{profile.name}"
                    }
                }
                p { class: "hero-tagline",
                    "{profile.tagline}"
                    if !profile.specialties.is_empty() {
                        " Specializing in "
                        for (idx, specialty) in profile.specialties.iter().enumerate() {
                            if idx > 0 {
                                " and "
                            }
                            span { class: "strong", "{specialty}" }
                        }
                        "."
                    }
                }
                div { class: "hero-actions",
                    SocialBtn { href: contact.github_url(), label: "GitHub", glyph: "GH" }
                    SocialBtn { href: contact.linkedin_url(), label: "LinkedIn", glyph: "in" }
                    SocialBtn { href: contact.mailto(), label: "Email", glyph: "✉" }
                }
            }
        }
    }
}
