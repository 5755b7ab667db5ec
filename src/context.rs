//! Page context providers.
//!
//! The home page owns the page-wide state and shares it with its children
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the page component
//! let page = PageContext::provide();
//!
//! // In child components
//! let mut menu = use_menu();
//! let mut path = use_click_path();
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use portfolio_core::dom::{ClickPath, ElementNode, MountedElements};
use portfolio_core::menu::{MenuController, MenuFlags, MenuState};
use portfolio_core::navigation::Section;
use portfolio_core::reveal::RevealTracker;
use portfolio_core::toast::ToastState;

/// Get the launch settings parsed from the command line.
pub fn get_launch_config() -> crate::LaunchConfig {
    crate::get_launch_config()
}

/// Mounted handles of scroll targets, keyed by section.
pub type SectionAnchors = HashMap<Section, Rc<MountedData>>;

/// Mounted handles of reveal-on-scroll elements.
pub type RevealTargets = HashMap<&'static str, Rc<MountedData>>;

/// Every signal the page shares with its children.
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Attached menu controller; `None` until all required elements mount
    pub menu: Signal<Option<MenuController>>,
    /// Ids of menu elements that have mounted
    pub mounted: Signal<MountedElements>,
    /// Path of the click currently bubbling to the page root
    pub click_path: Signal<ClickPath>,
    pub anchors: Signal<SectionAnchors>,
    pub reveal_targets: Signal<RevealTargets>,
    pub revealed: Signal<RevealTracker<&'static str>>,
    pub toast: Signal<ToastState>,
}

impl PageContext {
    /// Create the page signals and provide each to descendants.
    pub fn provide() -> Self {
        let page = Self {
            menu: use_signal(|| None),
            mounted: use_signal(MountedElements::default),
            click_path: use_signal(ClickPath::new),
            anchors: use_signal(HashMap::new),
            reveal_targets: use_signal(HashMap::new),
            revealed: use_signal(RevealTracker::default),
            toast: use_signal(ToastState::default),
        };

        use_context_provider(|| page.menu);
        use_context_provider(|| page.mounted);
        use_context_provider(|| page.click_path);
        use_context_provider(|| page.anchors);
        use_context_provider(|| page.reveal_targets);
        use_context_provider(|| page.revealed);
        use_context_provider(|| page.toast);
        page
    }
}

/// Hook to access the menu controller from context.
pub fn use_menu() -> Signal<Option<MenuController>> {
    use_context::<Signal<Option<MenuController>>>()
}

/// Current menu flags; the closed projection while the menu is detached.
pub fn menu_flags(menu: &Signal<Option<MenuController>>) -> MenuFlags {
    menu.read()
        .as_ref()
        .map(MenuController::flags)
        .unwrap_or_else(|| MenuFlags::from(MenuState::Closed))
}

/// Hook to access the set of mounted menu elements.
pub fn use_mounted_elements() -> Signal<MountedElements> {
    use_context::<Signal<MountedElements>>()
}

/// Hook to access the bubbling click path.
pub fn use_click_path() -> Signal<ClickPath> {
    use_context::<Signal<ClickPath>>()
}

/// Record `node` on the click currently bubbling.
///
/// Called from each tagged element's onclick, innermost first.
pub fn record_click(mut path: Signal<ClickPath>, node: ElementNode) {
    path.write().push(node);
}

/// Hook to access the section scroll anchors.
pub fn use_section_anchors() -> Signal<SectionAnchors> {
    use_context::<Signal<SectionAnchors>>()
}

/// Smoothly scroll `section` into view. Unmounted sections are ignored.
pub fn scroll_to_section(anchors: Signal<SectionAnchors>, section: Section) {
    let Some(target) = anchors.read().get(&section).cloned() else {
        tracing::debug!(%section, "Scroll target not mounted");
        return;
    };
    spawn(async move {
        if let Err(e) = target.scroll_to(ScrollBehavior::Smooth).await {
            tracing::warn!(%section, "Failed to scroll: {:?}", e);
        }
    });
}

/// Resolve an in-page link's href to the section it targets.
///
/// External URLs and unknown fragments are logged and ignored.
pub fn resolve_anchor(href: &str) -> Option<Section> {
    match Section::from_href(href) {
        Ok(section) => Some(section),
        Err(e) => {
            tracing::debug!(href, "Ignoring link: {}", e);
            None
        }
    }
}

/// Smoothly scroll to the section an in-page href points at.
pub fn scroll_to_anchor(anchors: Signal<SectionAnchors>, href: &str) {
    if let Some(section) = resolve_anchor(href) {
        scroll_to_section(anchors, section);
    }
}

/// Hook to access reveal-on-scroll state.
pub fn use_reveal() -> (Signal<RevealTargets>, Signal<RevealTracker<&'static str>>) {
    (
        use_context::<Signal<RevealTargets>>(),
        use_context::<Signal<RevealTracker<&'static str>>>(),
    )
}

/// Hook to access the copy toast.
pub fn use_toast() -> Signal<ToastState> {
    use_context::<Signal<ToastState>>()
}
