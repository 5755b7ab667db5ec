//! Work experience list.

use dioxus::prelude::*;
use portfolio_core::content::EXPERIENCE;
use portfolio_core::navigation::Section;

use super::{ExternalAnchor, PageSection, SectionHeading, Tags};
use crate::components::Reveal;

#[component]
pub fn ExperienceList() -> Element {
    rsx! {
        PageSection { section: Section::Experience,
            div { class: "section-inner narrow",
                SectionHeading {
                    name: "experience-heading",
                    lead: "Working",
                    accent: "Experience",
                    subtitle: rsx! { "My journey in the tech industry" },
                }

                div { class: "experience-list",
                    for job in EXPERIENCE {
                        Reveal { key: "{job.role}", name: job.role, class: "glass card hover-glow",
                            div { class: "entry-header",
                                div {
                                    h3 { class: "entry-title", "{job.role}" }
                                    ExternalAnchor { link: job.company }
                                }
                                span { class: "entry-period", "{job.period}" }
                            }
                            p { class: "entry-body",
                                "Developed and maintained "
                                ExternalAnchor { link: job.product, class: "glow-link strong" }
                                " (Job Search Platform)."
                            }
                            ul { class: "highlights",
                                for highlight in job.highlights.iter() {
                                    li { key: "{highlight}",
                                        span { class: "highlight-marker", "\u{25B8}" }
                                        "{highlight}"
                                    }
                                }
                            }
                            Tags { tags: job.tags }
                        }
                    }
                }
            }
        }
    }
}
