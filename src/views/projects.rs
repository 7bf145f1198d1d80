use dioxus::prelude::*;

use crate::content::Project;

#[component]
pub fn Projects(projects: Vec<Project>) -> Element {
    rsx! {
        section { class: "section",
            h2 { class: "section-title", "</> Featured Projects" }
            div { class: "projects-grid",
                for (idx, project) in projects.iter().enumerate() {
                    div { key: "{idx}", class: "card project-card",
                        div { class: "project-header",
                            div { class: "icon-tile", ">_" }
                            span { class: "project-type", "{project.kind}" }
                        }
                        h3 { "{project.title}" }
                        p { class: "project-description", "{project.desc}" }
                        div { class: "project-tech",
                            for tech in project.tech.iter() {
                                span { class: "hashtag", "#{tech}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
