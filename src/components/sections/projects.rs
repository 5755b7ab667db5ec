//! Featured project cards.

use dioxus::prelude::*;
use portfolio_core::content::{ExternalLink, GITHUB_URL, PROJECTS};
use portfolio_core::navigation::Section;

use super::{ExternalAnchor, PageSection, SectionHeading, Tags};
use crate::components::icons;
use crate::components::Reveal;

#[component]
pub fn Projects() -> Element {
    rsx! {
        PageSection { section: Section::Projects,
            div { class: "section-inner",
                SectionHeading {
                    name: "projects-heading",
                    lead: "Featured",
                    accent: "Projects",
                    subtitle: rsx! {
                        "Some of my favorite creations. If you want to see more, check out my "
                        ExternalAnchor {
                            link: ExternalLink { label: "GitHub", url: GITHUB_URL },
                            class: "glow-link strong",
                        }
                        "."
                    },
                }

                div { class: "project-grid",
                    for project in PROJECTS {
                        Reveal { key: "{project.title}", name: project.title, class: "glass card hover-glow",
                            div { class: "project-cover", {icons::gear()} }
                            h3 { class: "entry-title", "{project.title}" }
                            p { class: "entry-body",
                                "{project.description}"
                                if let Some(base) = project.built_on {
                                    " Built on top of "
                                    ExternalAnchor { link: base, class: "glow-link strong" }
                                    "."
                                }
                            }
                            Tags { tags: project.tags, small: true }
                            div { class: "project-links",
                                a { href: project.demo_url, target: "_blank", "Live Demo" }
                                a { href: project.repo_url, target: "_blank", "GitHub" }
                            }
                        }
                    }
                }
            }
        }
    }
}
