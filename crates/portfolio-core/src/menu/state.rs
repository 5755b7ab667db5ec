//! Menu state and its visual projection.

/// Open/closed state of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// The state `toggle()` moves to.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Visual flags mirrored from [`MenuState`].
///
/// Always computed from the state, never stored beside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuFlags {
    pub overlay_visible: bool,
    pub hamburger_visible: bool,
    pub close_icon_visible: bool,
    /// Page-level `mobile-menu-open` class that blurs the background
    pub blur_background: bool,
}

impl From<MenuState> for MenuFlags {
    fn from(state: MenuState) -> Self {
        let open = state.is_open();
        Self {
            overlay_visible: open,
            hamburger_visible: !open,
            close_icon_visible: open,
            blur_background: open,
        }
    }
}

impl MenuFlags {
    /// CSS class for an element shown only while `visible`
    pub fn visibility_class(visible: bool) -> &'static str {
        if visible {
            ""
        } else {
            "hidden"
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        Self::visibility_class(self.overlay_visible)
    }

    pub fn hamburger_class(&self) -> &'static str {
        Self::visibility_class(self.hamburger_visible)
    }

    pub fn close_icon_class(&self) -> &'static str {
        Self::visibility_class(self.close_icon_visible)
    }

    pub fn page_class(&self) -> &'static str {
        if self.blur_background {
            "mobile-menu-open"
        } else {
            ""
        }
    }
}

/// What a trigger did to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    /// The trigger did not apply, or the menu was already closed
    Unchanged,
}

impl Transition {
    pub fn changed(self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }

    #[test]
    fn closed_flags() {
        let flags = MenuFlags::from(MenuState::Closed);
        assert!(!flags.overlay_visible);
        assert!(flags.hamburger_visible);
        assert!(!flags.close_icon_visible);
        assert!(!flags.blur_background);

        assert_eq!(flags.overlay_class(), "hidden");
        assert_eq!(flags.hamburger_class(), "");
        assert_eq!(flags.close_icon_class(), "hidden");
        assert_eq!(flags.page_class(), "");
    }

    #[test]
    fn open_flags() {
        let flags = MenuFlags::from(MenuState::Open);
        assert!(flags.overlay_visible);
        assert!(!flags.hamburger_visible);
        assert!(flags.close_icon_visible);
        assert!(flags.blur_background);

        assert_eq!(flags.overlay_class(), "");
        assert_eq!(flags.hamburger_class(), "hidden");
        assert_eq!(flags.close_icon_class(), "");
        assert_eq!(flags.page_class(), "mobile-menu-open");
    }

    #[test]
    fn exactly_one_icon_visible() {
        for state in [MenuState::Closed, MenuState::Open] {
            let flags = MenuFlags::from(state);
            assert_ne!(flags.hamburger_visible, flags.close_icon_visible);
        }
    }
}
