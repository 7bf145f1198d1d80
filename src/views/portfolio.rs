use dioxus::prelude::*;

use crate::content::PortfolioData;
use crate::views::{ Experience, Footer, Hero, Projects, Skills, ThemeToggle };

/// The whole page. Expects a theme context from an ancestor.
#[component]
pub fn Portfolio() -> Element {
    let data = use_hook(|| {
        PortfolioData::embedded().map_err(|e| {
            log::error!("Failed to load portfolio content: {}", e);
            e.to_string()
        })
    });

    match data {
        Ok(data) => rsx! {
            div { class: "page",
                ThemeToggle {}
                Hero { profile: data.profile.clone() }
                Skills { skills: data.skills.clone() }
                Experience { jobs: data.experience.clone() }
                Projects { projects: data.projects.clone() }
                Footer { name: data.profile.name.clone(), info: data.footer.clone() }
            }
        },
        Err(err) => rsx! {
            div { class: "page load-error",
                ThemeToggle {}
                div { "Error loading portfolio" }
                div { "{err}" }
            }
        },
    }
}
