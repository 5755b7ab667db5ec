//! Mobile Menu Component
//!
//! Full-screen overlay with a glass panel of section links, used on screens
//! narrower than 768px. Open state lives in the page's `MenuController`.

use dioxus::prelude::*;
use portfolio_core::dom::{nodes, MENU_OVERLAY_ID};
use portfolio_core::navigation::NAV_SECTIONS;

use crate::context::{
    menu_flags, record_click, resolve_anchor, scroll_to_section, use_click_path, use_menu,
    use_mounted_elements, use_section_anchors,
};

/// Mobile navigation overlay
///
/// Backdrop and centering container only record the click; the page root
/// decides whether it dismisses the menu. Links close the menu, then scroll.
#[component]
pub fn MobileMenu() -> Element {
    let mut menu = use_menu();
    let mut mounted = use_mounted_elements();
    let click_path = use_click_path();
    let anchors = use_section_anchors();

    let flags = menu_flags(&menu);

    rsx! {
        div {
            id: MENU_OVERLAY_ID,
            class: "mobile-menu-overlay {flags.overlay_class()}",
            onmounted: move |_| {
                mounted.write().insert(MENU_OVERLAY_ID);
            },
            onclick: move |_| record_click(click_path, nodes::MENU_OVERLAY),

            div {
                class: "mobile-overlay-container",
                onclick: move |_| record_click(click_path, nodes::OVERLAY_CONTAINER),

                div {
                    class: "glass mobile-menu-panel animate-fade-in",
                    onclick: move |_| record_click(click_path, nodes::MENU_PANEL),

                    h3 {
                        class: "mobile-menu-heading",
                        onclick: move |_| record_click(click_path, nodes::MENU_HEADING),
                        "Navigation"
                    }

                    div { class: "mobile-menu-links",
                        for section in NAV_SECTIONS {
                            a {
                                key: "{section}",
                                class: "mobile-nav-link",
                                href: "{section.href()}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    record_click(click_path, nodes::MOBILE_NAV_LINK);
                                    let Some(target) = resolve_anchor(&section.href()) else {
                                        return;
                                    };
                                    if let Some(controller) = menu.write().as_mut() {
                                        controller.close_via_link(target);
                                    }
                                    scroll_to_section(anchors, target);
                                },
                                {section.nav_label().unwrap_or_default()}
                            }
                        }
                    }
                }
            }
        }
    }
}
