//! Navigation overlay controller.

use crate::dom::{
    ClickPath, MountedElements, GLASS_SELECTOR, MENU_BUTTON_SELECTOR, MENU_OVERLAY_ID,
    MENU_PANEL_SELECTOR, MENU_REQUIRED_IDS, OVERLAY_CONTAINER_CLASS,
};
use crate::navigation::Section;

use super::state::{MenuFlags, MenuState, Transition};

/// Owns the mobile menu state.
///
/// Every trigger goes through [`MenuController::toggle`] or the private
/// `close`, so the mirrored [`MenuFlags`] are always a projection of one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    /// Attach to the rendered menu.
    ///
    /// Returns `None` when any of the toggle button, overlay or the two icons
    /// has not mounted. Callers then ignore every trigger.
    pub fn attach(mounted: &MountedElements) -> Option<Self> {
        if let Some(missing) = mounted.first_missing(&MENU_REQUIRED_IDS) {
            tracing::debug!(element = missing, "Mobile menu not attached, element missing");
            return None;
        }
        tracing::debug!("Mobile menu attached");
        Some(Self {
            state: MenuState::Closed,
        })
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn flags(&self) -> MenuFlags {
        MenuFlags::from(self.state)
    }

    /// Menu button pressed. The only way to open the menu.
    pub fn toggle(&mut self) -> Transition {
        self.state = self.state.toggled();
        tracing::debug!(state = ?self.state, "Mobile menu toggled");
        match self.state {
            MenuState::Open => Transition::Opened,
            MenuState::Closed => Transition::Closed,
        }
    }

    /// A navigation link inside the menu was activated.
    ///
    /// Scrolling to `target` is the caller's job.
    pub fn close_via_link(&mut self, target: Section) -> Transition {
        let transition = self.close();
        if transition.changed() {
            tracing::debug!(section = target.id(), "Mobile menu closed by link");
        }
        transition
    }

    /// A click somewhere within the overlay region.
    ///
    /// Closes only when the target is the backdrop itself or the centering
    /// container and no glass-styled element encloses it.
    pub fn close_via_overlay_click(&mut self, path: &ClickPath) -> Transition {
        let Some(target) = path.target() else {
            return Transition::Unchanged;
        };

        let is_overlay = target.is(MENU_OVERLAY_ID);
        let is_container = target.has_class(OVERLAY_CONTAINER_CLASS);
        // Any glass ancestor counts, not only the menu's own panel.
        let is_menu_content = path.closest(&GLASS_SELECTOR).is_some();

        if (is_overlay || is_container) && !is_menu_content {
            let transition = self.close();
            if transition.changed() {
                tracing::debug!("Mobile menu closed by overlay click");
            }
            transition
        } else {
            Transition::Unchanged
        }
    }

    /// A document-level click.
    ///
    /// While open, closes unless the click is inside the menu panel or on the
    /// toggle button.
    pub fn close_via_outside_click(&mut self, path: &ClickPath) -> Transition {
        if !self.state.is_open() || path.is_empty() {
            return Transition::Unchanged;
        }

        let in_panel = crate::dom::is_inside_content_panel(path, &MENU_PANEL_SELECTOR);
        let on_button = path.closest(&MENU_BUTTON_SELECTOR).is_some();
        if in_panel || on_button {
            return Transition::Unchanged;
        }

        let transition = self.close();
        tracing::debug!("Mobile menu closed by outside click");
        transition
    }

    /// Run both click listeners for one physical click.
    ///
    /// The overlay listener only sees clicks that pass through the overlay;
    /// the document listener sees all of them. A second close is a no-op.
    pub fn dispatch_document_click(&mut self, path: &ClickPath) -> Transition {
        let from_overlay = if path.passes_through(MENU_OVERLAY_ID) {
            self.close_via_overlay_click(path)
        } else {
            Transition::Unchanged
        };
        let from_document = self.close_via_outside_click(path);

        if from_overlay.changed() {
            from_overlay
        } else {
            from_document
        }
    }

    fn close(&mut self) -> Transition {
        match self.state {
            MenuState::Open => {
                self.state = MenuState::Closed;
                Transition::Closed
            }
            MenuState::Closed => Transition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::nodes::*;
    use crate::dom::{ElementNode, CLOSE_ICON_ID, GLASS_CLASS};

    fn attached() -> MenuController {
        let mut mounted = MountedElements::default();
        for id in MENU_REQUIRED_IDS {
            mounted.insert(id);
        }
        MenuController::attach(&mounted).expect("all required elements mounted")
    }

    fn opened() -> MenuController {
        let mut menu = attached();
        assert_eq!(menu.toggle(), Transition::Opened);
        menu
    }

    fn backdrop_click() -> ClickPath {
        ClickPath::from_nodes([MENU_OVERLAY, ROOT])
    }

    fn container_click() -> ClickPath {
        ClickPath::from_nodes([OVERLAY_CONTAINER, MENU_OVERLAY, ROOT])
    }

    fn heading_click() -> ClickPath {
        ClickPath::from_nodes([MENU_HEADING, MENU_PANEL, OVERLAY_CONTAINER, MENU_OVERLAY, ROOT])
    }

    fn button_click() -> ClickPath {
        ClickPath::from_nodes([HAMBURGER_ICON, MENU_BUTTON, NAV_BAR, ROOT])
    }

    #[test]
    fn attach_starts_closed() {
        let menu = attached();
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.flags(), MenuFlags::from(MenuState::Closed));
    }

    #[test]
    fn attach_requires_every_element() {
        let mut mounted = MountedElements::default();
        for id in MENU_REQUIRED_IDS {
            mounted.insert(id);
        }
        mounted.remove(CLOSE_ICON_ID);
        assert!(MenuController::attach(&mounted).is_none());
        assert!(MenuController::attach(&MountedElements::default()).is_none());
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut menu = attached();
        assert_eq!(menu.toggle(), Transition::Opened);
        let flags = menu.flags();
        assert!(flags.overlay_visible);
        assert!(flags.close_icon_visible);
        assert!(!flags.hamburger_visible);
        assert!(flags.blur_background);

        assert_eq!(menu.toggle(), Transition::Closed);
        assert_eq!(menu.flags(), MenuFlags::from(MenuState::Closed));
    }

    #[test]
    fn link_closes_open_menu() {
        let mut menu = opened();
        assert_eq!(menu.close_via_link(Section::Skills), Transition::Closed);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn link_on_closed_menu_is_noop() {
        let mut menu = attached();
        assert_eq!(menu.close_via_link(Section::About), Transition::Unchanged);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn overlay_backdrop_and_container_close() {
        let mut menu = opened();
        assert_eq!(menu.close_via_overlay_click(&backdrop_click()), Transition::Closed);

        let mut menu = opened();
        assert_eq!(menu.close_via_overlay_click(&container_click()), Transition::Closed);
    }

    #[test]
    fn overlay_click_on_panel_keeps_menu_open() {
        let mut menu = opened();
        assert_eq!(menu.close_via_overlay_click(&heading_click()), Transition::Unchanged);

        let panel = ClickPath::from_nodes([MENU_PANEL, OVERLAY_CONTAINER, MENU_OVERLAY, ROOT]);
        assert_eq!(menu.close_via_overlay_click(&panel), Transition::Unchanged);
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn overlay_click_under_any_glass_ancestor_is_ignored() {
        // Backdrop nested inside some unrelated glass element.
        const GLASS_WRAPPER: ElementNode = ElementNode::with_classes(&[GLASS_CLASS]);
        let path = ClickPath::from_nodes([MENU_OVERLAY, GLASS_WRAPPER, ROOT]);

        let mut menu = opened();
        assert_eq!(menu.close_via_overlay_click(&path), Transition::Unchanged);
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn outside_click_closes() {
        let mut menu = opened();
        let path = ClickPath::from_nodes([ElementNode::with_id("about"), ROOT]);
        assert_eq!(menu.close_via_outside_click(&path), Transition::Closed);
    }

    #[test]
    fn outside_click_ignores_panel_and_button() {
        let mut menu = opened();
        assert_eq!(menu.close_via_outside_click(&heading_click()), Transition::Unchanged);
        assert_eq!(menu.close_via_outside_click(&button_click()), Transition::Unchanged);
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn outside_click_on_nav_bar_closes() {
        // Glass, but not the menu's panel.
        let mut menu = opened();
        let path = ClickPath::from_nodes([NAV_BAR, ROOT]);
        assert_eq!(menu.close_via_outside_click(&path), Transition::Closed);
    }

    #[test]
    fn outside_click_when_closed_is_noop() {
        let mut menu = attached();
        assert_eq!(menu.close_via_outside_click(&ClickPath::from_root()), Transition::Unchanged);
    }

    #[test]
    fn dispatch_backdrop_click_closes_once() {
        let mut menu = opened();
        assert_eq!(menu.dispatch_document_click(&backdrop_click()), Transition::Closed);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn dispatch_after_toggle_keeps_menu_open() {
        // The button click bubbles to the document right after opening.
        let mut menu = attached();
        menu.toggle();
        assert_eq!(menu.dispatch_document_click(&button_click()), Transition::Unchanged);
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn dispatch_ignores_empty_path() {
        let mut menu = opened();
        assert_eq!(menu.dispatch_document_click(&ClickPath::new()), Transition::Unchanged);
        assert_eq!(menu.state(), MenuState::Open);
    }
}
