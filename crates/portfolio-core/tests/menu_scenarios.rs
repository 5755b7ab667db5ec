//! End-to-end menu scenarios driven through click paths, the way the app
//! records them while a click bubbles from its target to the page root.

use portfolio_core::dom::nodes::*;
use portfolio_core::dom::{ClickPath, ElementNode, MountedElements, MENU_REQUIRED_IDS};
use portfolio_core::menu::{MenuController, MenuState, Transition};
use portfolio_core::navigation::Section;

/// Minimal stand-in for the app's page wiring.
struct Page {
    mounted: MountedElements,
    menu: Option<MenuController>,
    pending: ClickPath,
}

impl Page {
    fn rendered() -> Self {
        let mut mounted = MountedElements::default();
        for id in MENU_REQUIRED_IDS {
            mounted.insert(id);
        }
        Self::with(mounted)
    }

    fn with(mounted: MountedElements) -> Self {
        // Run with RUST_LOG=debug to see the controller's transitions
        let _ = tracing_subscriber::fmt::try_init();
        let menu = MenuController::attach(&mounted);
        Self {
            mounted,
            menu,
            pending: ClickPath::new(),
        }
    }

    /// Bubble a click from `path[0]` to the root, firing element handlers on the way.
    fn click(&mut self, path: &[ElementNode], link: Option<Section>) {
        for node in path {
            self.pending.push(*node);
            if let Some(menu) = self.menu.as_mut() {
                if node.is(portfolio_core::dom::MENU_BUTTON_ID) {
                    menu.toggle();
                }
                if node.has_class(portfolio_core::dom::MOBILE_NAV_LINK_CLASS) {
                    if let Some(section) = link {
                        menu.close_via_link(section);
                    }
                }
            }
        }
        let path = self.pending.take();
        if let Some(menu) = self.menu.as_mut() {
            menu.dispatch_document_click(&path);
        }
    }

    fn state(&self) -> Option<MenuState> {
        self.menu.as_ref().map(MenuController::state)
    }

    fn open_menu(&mut self) {
        self.click(&[HAMBURGER_ICON, MENU_BUTTON, NAV_BAR, ROOT], None);
        assert_eq!(self.state(), Some(MenuState::Open));
    }
}

#[test]
fn scenario_a_toggle_opens_menu() {
    let mut page = Page::rendered();
    assert_eq!(page.state(), Some(MenuState::Closed));

    page.click(&[HAMBURGER_ICON, MENU_BUTTON, NAV_BAR, ROOT], None);

    let menu = page.menu.as_ref().unwrap();
    assert_eq!(menu.state(), MenuState::Open);
    let flags = menu.flags();
    assert!(flags.overlay_visible);
    assert!(flags.close_icon_visible);
    assert!(!flags.hamburger_visible);
    assert!(flags.blur_background);
}

#[test]
fn scenario_a_close_icon_closes_menu() {
    let mut page = Page::rendered();
    page.open_menu();
    page.click(&[CLOSE_ICON, MENU_BUTTON, NAV_BAR, ROOT], None);
    assert_eq!(page.state(), Some(MenuState::Closed));
}

#[test]
fn scenario_b_nav_link_closes_menu() {
    let mut page = Page::rendered();
    page.open_menu();

    page.click(
        &[MOBILE_NAV_LINK, MENU_PANEL, OVERLAY_CONTAINER, MENU_OVERLAY, ROOT],
        Some(Section::Experience),
    );

    let menu = page.menu.as_ref().unwrap();
    assert_eq!(menu.state(), MenuState::Closed);
    assert!(menu.flags().hamburger_visible);
    assert!(!menu.flags().blur_background);
}

#[test]
fn scenario_c_backdrop_click_closes_menu() {
    let mut page = Page::rendered();
    page.open_menu();
    page.click(&[OVERLAY_CONTAINER, MENU_OVERLAY, ROOT], None);
    assert_eq!(page.state(), Some(MenuState::Closed));

    page.open_menu();
    page.click(&[MENU_OVERLAY, ROOT], None);
    assert_eq!(page.state(), Some(MenuState::Closed));
}

#[test]
fn scenario_d_panel_click_keeps_menu_open() {
    let mut page = Page::rendered();
    page.open_menu();

    page.click(
        &[MENU_HEADING, MENU_PANEL, OVERLAY_CONTAINER, MENU_OVERLAY, ROOT],
        None,
    );
    assert_eq!(page.state(), Some(MenuState::Open));

    page.click(&[MENU_PANEL, OVERLAY_CONTAINER, MENU_OVERLAY, ROOT], None);
    assert_eq!(page.state(), Some(MenuState::Open));
}

#[test]
fn scenario_e_outside_click_closes_menu() {
    let mut page = Page::rendered();
    page.open_menu();
    page.click(&[ElementNode::with_id("contact"), ROOT], None);
    assert_eq!(page.state(), Some(MenuState::Closed));
}

#[test]
fn scenario_f_missing_elements_disable_menu() {
    let mut mounted = MountedElements::default();
    mounted.insert(portfolio_core::dom::MENU_BUTTON_ID);
    mounted.insert(portfolio_core::dom::MENU_OVERLAY_ID);
    let mut page = Page::with(mounted);
    assert!(page.menu.is_none());
    assert!(!page.mounted.contains(portfolio_core::dom::HAMBURGER_ICON_ID));

    // No panic, nothing reacts.
    page.click(&[MENU_BUTTON, NAV_BAR, ROOT], None);
    page.click(&[MENU_OVERLAY, ROOT], None);
    page.click(&[ROOT], None);
    assert_eq!(page.state(), None);
}

#[test]
fn both_listeners_on_one_click_close_once() {
    let mut menu = Page::rendered().menu.unwrap();
    menu.toggle();
    let backdrop = ClickPath::from_nodes([MENU_OVERLAY, ROOT]);

    assert_eq!(menu.close_via_overlay_click(&backdrop), Transition::Closed);
    assert_eq!(menu.close_via_outside_click(&backdrop), Transition::Unchanged);
    assert_eq!(menu.state(), MenuState::Closed);
}
