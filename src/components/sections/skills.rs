//! Skills grid.

use dioxus::prelude::*;
use portfolio_core::content::SKILL_GROUPS;
use portfolio_core::navigation::Section;

use super::{PageSection, SectionHeading};
use crate::components::icons;
use crate::components::Reveal;

#[component]
pub fn Skills() -> Element {
    rsx! {
        PageSection { section: Section::Skills,
            div { class: "section-inner",
                SectionHeading {
                    name: "skills-heading",
                    lead: "Technical",
                    accent: "Skills",
                    subtitle: rsx! { "Technologies and tools I familiar with" },
                }

                div { class: "skills-grid",
                    for group in SKILL_GROUPS {
                        Reveal { key: "{group.title}", name: group.title, class: "glass card hover-glow",
                            h3 { class: "card-title",
                                {icons::skill_icon(group.icon)}
                                "{group.title}"
                            }
                            div { class: "skill-list",
                                for skill in group.skills.iter() {
                                    div { key: "{skill.name}", class: "skill-item",
                                        div { class: "skill-name", "{skill.name}" }
                                        if let Some(detail) = skill.detail {
                                            div { class: "skill-detail", "{detail}" }
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
}
