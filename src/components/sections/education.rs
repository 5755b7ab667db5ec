//! Education timeline.

use dioxus::prelude::*;
use portfolio_core::content::{ExternalLink, TimelineIcon, EDUCATION};
use portfolio_core::navigation::Section;

use super::{ExternalAnchor, PageSection, SectionHeading, Tags};
use crate::components::icons;
use crate::components::Reveal;

#[component]
pub fn EducationTimeline() -> Element {
    rsx! {
        PageSection { section: Section::Education,
            div { class: "section-inner narrow",
                SectionHeading {
                    name: "education-heading",
                    lead: "Academic",
                    accent: "Journey",
                    subtitle: rsx! { "Educational background" },
                }

                div { class: "timeline",
                    div { class: "timeline-line" }
                    div { class: "timeline-entries",
                        for entry in EDUCATION {
                            Reveal { key: "{entry.title}", name: entry.title, class: "timeline-entry",
                                {match entry.icon {
                                    TimelineIcon::GraduationCap => rsx! {
                                        div { class: "timeline-dot", {icons::graduation_cap()} }
                                    },
                                    TimelineIcon::Image(src) => rsx! {
                                        div { class: "timeline-dot alt",
                                            img { src, alt: entry.school }
                                        }
                                    },
                                }}
                                div { class: "glass timeline-card hover-glow",
                                    div { class: "entry-header",
                                        h3 { class: "entry-title", "{entry.title}" }
                                        span { class: "entry-period", "{entry.period}" }
                                    }
                                    ExternalAnchor {
                                        link: ExternalLink { label: entry.school, url: entry.school_url },
                                    }
                                    p { class: "entry-body", "{entry.summary}" }
                                    if !entry.focus.is_empty() {
                                        Tags { tags: entry.focus }
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
