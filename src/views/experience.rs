use dioxus::prelude::*;

use crate::content::Job;

#[component]
pub fn Experience(jobs: Vec<Job>) -> Element {
    rsx! {
        section { class: "section section-muted",
            div { class: "section-narrow",
                h2 { class: "section-title", "⚙️ Professional Experience" }
                div { class: "timeline",
                    div { class: "timeline-line" }
                    for job in jobs.iter() {
                        div { key: "{job.id}", class: "timeline-item",
                            div { class: "timeline-dot" }
                            div { class: "card job-card",
                                div { class: "job-header",
                                    div {
                                        h3 { "{job.role}" }
                                        p { class: "accent", "{job.company} · {job.location}" }
                                    }
                                    span { class: "period", "{job.period}" }
                                }
                                p { class: "job-description", "{job.description}" }
                                div { class: "tags",
                                    for tag in job.tags.iter() {
                                        span { class: "tag", "{tag}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
