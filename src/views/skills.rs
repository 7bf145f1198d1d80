use dioxus::prelude::*;

use crate::content::SkillGroup;
use crate::theme::use_theme;

#[component]
pub fn Skills(skills: Vec<SkillGroup>) -> Element {
    let theme = use_theme();
    let dot = if theme.is_dark() { "dot dot-cyan" } else { "dot dot-blue" };

    rsx! {
        section { class: "section",
            div { class: "section-rule",
                div { class: "rule" }
                h2 { "Technical Arsenal" }
                div { class: "rule" }
            }
            div { class: "skills-grid",
                for (idx, skill) in skills.iter().enumerate() {
                    div { key: "{idx}", class: "card skill-card",
                        div { class: "icon-tile", {skill.icon.glyph()} }
                        h3 { "{skill.category}" }
                        ul {
                            for (t_idx, tech) in skill.items.iter().enumerate() {
                                li { key: "{t_idx}",
                                    span { class: dot }
                                    "{tech}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
