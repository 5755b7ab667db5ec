//! Portfolio sections, top to bottom.

mod about;
mod contact;
mod education;
mod experience;
mod projects;
mod skills;

pub use about::About;
pub use contact::{Contact, Footer};
pub use education::EducationTimeline;
pub use experience::ExperienceList;
pub use projects::Projects;
pub use skills::Skills;

use dioxus::prelude::*;
use portfolio_core::content::ExternalLink;
use portfolio_core::navigation::Section;

use crate::context::use_section_anchors;

/// `<section>` registered as the scroll target for `section`.
#[component]
pub fn PageSection(section: Section, #[props(default, into)] class: String, children: Element) -> Element {
    let mut anchors = use_section_anchors();
    let full_class = if class.is_empty() {
        "page-section".to_string()
    } else {
        format!("page-section {}", class)
    };

    rsx! {
        section {
            id: section.id(),
            class: "{full_class}",
            onmounted: move |evt| {
                anchors.write().insert(section, evt.data());
            },
            {children}
        }
    }
}

/// Centered title with an accented last word and a subtitle.
#[component]
pub fn SectionHeading(
    name: &'static str,
    lead: &'static str,
    accent: &'static str,
    subtitle: Element,
) -> Element {
    rsx! {
        super::Reveal { name, class: "section-heading",
            h2 { class: "section-title text-glow",
                "{lead} "
                span { class: "accent", "{accent}" }
            }
            p { class: "section-subtitle", {subtitle} }
        }
    }
}

/// Link opening outside the page.
#[component]
pub fn ExternalAnchor(link: ExternalLink, #[props(default, into)] class: String) -> Element {
    let class = if class.is_empty() { "glow-link".to_string() } else { class };
    rsx! {
        a { href: link.url, target: "_blank", class: "{class}", "{link.label}" }
    }
}

/// Row of pill tags.
#[component]
pub fn Tags(tags: &'static [&'static str], #[props(default = false)] small: bool) -> Element {
    let class = if small { "tag small" } else { "tag" };
    rsx! {
        div { class: "tags",
            for tag in tags.iter() {
                span { key: "{tag}", class: "{class}", "{tag}" }
            }
        }
    }
}
