//! Home page - the whole portfolio on one scrolling page.
//!
//! Owns the page context, attaches the mobile menu controller once its
//! elements have mounted, and acts as the document-level click listener.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::content::CONTACT_EMAIL;
use portfolio_core::dom::{nodes, ROOT_ID};
use portfolio_core::menu::MenuController;
use portfolio_core::navigation::Section;

use crate::components::sections::{
    About, Contact, EducationTimeline, ExperienceList, Footer, Projects, Skills,
};
use crate::components::{measure_reveals, CopyToast, MobileMenu, NavBar, Starfield};
use crate::context::{menu_flags, PageContext};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let page = PageContext::provide();
    let PageContext {
        mut menu,
        mounted,
        mut click_path,
        mut anchors,
        reveal_targets,
        revealed,
        ..
    } = page;

    let mut root: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Attach the menu once button, overlay and both icons are on the page
    use_effect(move || {
        let mounted = mounted.read();
        if menu.peek().is_some() {
            return;
        }
        if let Some(controller) = MenuController::attach(&mounted) {
            menu.set(Some(controller));
            tracing::info!("Mobile menu ready");
        }
    });

    // Reveal whatever is already in view once targets register
    use_effect(move || {
        // Subscribe: rerun whenever a target registers
        reveal_targets.read();
        measure_reveals(root.read().clone(), reveal_targets, revealed);
    });

    // Document-level listener: runs after every element handler on the path
    let on_document_click = move |_| {
        let mut path = click_path.write().take();
        path.push(nodes::ROOT);

        let open = menu.peek().as_ref().is_some_and(|m| m.state().is_open());
        if !open {
            return;
        }
        if let Some(controller) = menu.write().as_mut() {
            let transition = controller.dispatch_document_click(&path);
            tracing::debug!(?transition, target = ?path.target(), "Document click");
        }
    };

    let flags = menu_flags(&menu);

    rsx! {
        div {
            id: ROOT_ID,
            class: "page {flags.page_class()}",
            onmounted: move |evt| {
                root.set(Some(evt.data()));
            },
            onscroll: move |_| {
                measure_reveals(root.peek().clone(), reveal_targets, revealed);
            },
            onclick: on_document_click,

            Starfield {}
            NavBar {}
            MobileMenu {}

            main { class: "page-content",
                div {
                    id: Section::Top.id(),
                    onmounted: move |evt| {
                        anchors.write().insert(Section::Top, evt.data());
                    },
                }
                About {}
                Skills {}
                EducationTimeline {}
                ExperienceList {}
                Projects {}
                Contact {}
            }

            Footer {}
            CopyToast { address: CONTACT_EMAIL }
        }
    }
}
