//! Hero section.

use chrono::Local;
use dioxus::prelude::*;
use portfolio_core::content::{
    bio, career_start, years_of_experience, OWNER_NAME, OWNER_TITLE, PORTRAIT_PATH,
};
use portfolio_core::navigation::Section;

use super::PageSection;
use crate::components::Reveal;

#[component]
pub fn About() -> Element {
    let years = years_of_experience(career_start(), Local::now().date_naive());
    let [intro, outlook] = bio(years);

    rsx! {
        PageSection { section: Section::About, class: "hero",
            div { class: "section-inner hero-grid",
                Reveal { name: "about-portrait",
                    div { class: "portrait-ring",
                        img { class: "portrait", src: PORTRAIT_PATH, alt: OWNER_NAME }
                    }
                }
                Reveal { name: "about-intro",
                    h1 { class: "hero-name",
                        "Hi, I'm "
                        span { class: "text-glow accent", "{OWNER_NAME}" }
                    }
                    p { class: "hero-title", "{OWNER_TITLE}" }
                    p { class: "hero-bio", "{intro}" }
                    p { class: "hero-bio", "{outlook}" }
                }
            }
        }
    }
}
