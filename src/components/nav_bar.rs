//! Navigation Bar Component
//!
//! Desktop: Logo plus horizontal section links
//! Mobile: Logo plus the menu toggle (links move into MobileMenu)

use dioxus::prelude::*;
use portfolio_core::dom::{nodes, CLOSE_ICON_ID, HAMBURGER_ICON_ID, MENU_BUTTON_ID};
use portfolio_core::navigation::{Section, NAV_SECTIONS};

use super::icons::{CLOSE_PATH, HAMBURGER_PATH};
use crate::context::{
    menu_flags, record_click, scroll_to_anchor, use_click_path, use_menu,
    use_mounted_elements, use_section_anchors,
};

/// Fixed glass navigation bar
///
/// - Left: `<Warathep />` logo, scrolls to top
/// - Right: section links (desktop) or the menu toggle (mobile)
#[component]
pub fn NavBar() -> Element {
    let mut menu = use_menu();
    let mut mounted = use_mounted_elements();
    let click_path = use_click_path();
    let anchors = use_section_anchors();

    let flags = menu_flags(&menu);

    // The only trigger that can open the menu
    let on_toggle = move |_| {
        record_click(click_path, nodes::MENU_BUTTON);
        if let Some(controller) = menu.write().as_mut() {
            let transition = controller.toggle();
            tracing::debug!(?transition, "Menu button pressed");
        }
    };

    rsx! {
        nav {
            class: "nav-bar glass",
            onclick: move |_| record_click(click_path, nodes::NAV_BAR),

            div { class: "nav-bar-inner",
                // Left: logo
                a {
                    class: "nav-logo",
                    href: "{Section::Top.href()}",
                    onclick: move |evt| {
                        evt.prevent_default();
                        scroll_to_anchor(anchors, &Section::Top.href());
                    },
                    span { class: "text-glow", "<Warathep />" }
                }

                // Right: desktop links
                div { class: "nav-links",
                    for section in NAV_SECTIONS {
                        a {
                            key: "{section}",
                            class: "nav-link",
                            href: "{section.href()}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                scroll_to_anchor(anchors, &section.href());
                            },
                            {section.nav_label().unwrap_or_default()}
                        }
                    }
                }

                // Right: mobile toggle
                button {
                    id: MENU_BUTTON_ID,
                    r#type: "button",
                    class: "mobile-menu-button",
                    "aria-label": "Toggle navigation menu",
                    "aria-expanded": "{flags.overlay_visible}",
                    onmounted: move |_| {
                        mounted.write().insert(MENU_BUTTON_ID);
                    },
                    onclick: on_toggle,

                    svg {
                        id: HAMBURGER_ICON_ID,
                        class: "menu-icon {flags.hamburger_class()}",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        onmounted: move |_| {
                            mounted.write().insert(HAMBURGER_ICON_ID);
                        },
                        onclick: move |_| record_click(click_path, nodes::HAMBURGER_ICON),
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: HAMBURGER_PATH,
                        }
                    }
                    svg {
                        id: CLOSE_ICON_ID,
                        class: "menu-icon {flags.close_icon_class()}",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        onmounted: move |_| {
                            mounted.write().insert(CLOSE_ICON_ID);
                        },
                        onclick: move |_| record_click(click_path, nodes::CLOSE_ICON),
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: CLOSE_PATH,
                        }
                    }
                }
            }
        }
    }
}
