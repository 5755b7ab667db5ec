//! Contact block and footer.

use dioxus::prelude::*;
use portfolio_core::content::{ContactAction, CONTACT_LINKS, FOOTER_TEXT};
use portfolio_core::navigation::Section;

use super::PageSection;
use crate::components::{copy_email, icons, Reveal};
use crate::context::use_toast;

#[component]
pub fn Contact() -> Element {
    let toast = use_toast();

    rsx! {
        PageSection { section: Section::Contact,
            div { class: "section-inner narrow",
                Reveal { name: "contact", class: "section-heading",
                    h2 { class: "section-title text-glow",
                        "Let's "
                        span { class: "accent", "Connect" }
                    }
                    div { class: "contact-links",
                        for link in CONTACT_LINKS {
                            {match link.action {
                                // Email copies instead of opening a mail client
                                ContactAction::CopyEmail(address) => rsx! {
                                    div {
                                        key: "{link.label}",
                                        id: "contact-email-button",
                                        class: "glass contact-link hover-glow",
                                        onclick: move |_| copy_email(toast, address),
                                        {icons::contact_icon(link.icon)}
                                        span { "{link.label}" }
                                    }
                                },
                                ContactAction::OpenUrl(url) => rsx! {
                                    a {
                                        key: "{link.label}",
                                        href: url,
                                        target: "_blank",
                                        class: "glass contact-link hover-glow",
                                        {icons::contact_icon(link.icon)}
                                        span { "{link.label}" }
                                    }
                                },
                            }}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "page-footer",
            p { "{FOOTER_TEXT}" }
        }
    }
}
