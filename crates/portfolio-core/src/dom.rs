//! Element tree model for click dispatch.
//!
//! A click is described by a [`ClickPath`]: the target element first, then
//! each ancestor up to the page root. Containment questions ("is this click
//! inside the menu panel?") are answered by walking that path with a
//! [`Selector`], so no live element tree is needed to test them.
//!
//! ```text
//! app (root)
//! ├── nav.nav-bar.glass
//! │   └── button#mobile-menu-button
//! │       ├── svg#hamburger-icon
//! │       └── svg#close-icon
//! └── div#mobile-menu                       overlay backdrop
//!     └── div.mobile-overlay-container      centering container
//!         └── div.glass.mobile-menu-panel   content panel
//!             ├── h3.mobile-menu-heading
//!             └── a.mobile-nav-link × N
//! ```

use std::collections::HashSet;

pub const ROOT_ID: &str = "app";
pub const MENU_BUTTON_ID: &str = "mobile-menu-button";
pub const HAMBURGER_ICON_ID: &str = "hamburger-icon";
pub const CLOSE_ICON_ID: &str = "close-icon";
pub const MENU_OVERLAY_ID: &str = "mobile-menu";

pub const GLASS_CLASS: &str = "glass";
pub const OVERLAY_CONTAINER_CLASS: &str = "mobile-overlay-container";
pub const MOBILE_NAV_LINK_CLASS: &str = "mobile-nav-link";

/// Elements the menu controller needs before it will attach.
pub const MENU_REQUIRED_IDS: [&str; 4] = [
    MENU_BUTTON_ID,
    MENU_OVERLAY_ID,
    HAMBURGER_ICON_ID,
    CLOSE_ICON_ID,
];

/// Identity of one element as seen by click dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementNode {
    pub id: Option<&'static str>,
    pub classes: &'static [&'static str],
}

impl ElementNode {
    /// Element identified by id only
    pub const fn with_id(id: &'static str) -> Self {
        Self {
            id: Some(id),
            classes: &[],
        }
    }

    /// Element identified by its class list only
    pub const fn with_classes(classes: &'static [&'static str]) -> Self {
        Self { id: None, classes }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn is(&self, id: &str) -> bool {
        self.id == Some(id)
    }
}

/// Well-known nodes of the rendered page.
pub mod nodes {
    use super::*;

    pub const ROOT: ElementNode = ElementNode::with_id(ROOT_ID);
    pub const NAV_BAR: ElementNode = ElementNode::with_classes(&["nav-bar", GLASS_CLASS]);
    pub const MENU_BUTTON: ElementNode = ElementNode::with_id(MENU_BUTTON_ID);
    pub const HAMBURGER_ICON: ElementNode = ElementNode::with_id(HAMBURGER_ICON_ID);
    pub const CLOSE_ICON: ElementNode = ElementNode::with_id(CLOSE_ICON_ID);
    pub const MENU_OVERLAY: ElementNode = ElementNode::with_id(MENU_OVERLAY_ID);
    pub const OVERLAY_CONTAINER: ElementNode =
        ElementNode::with_classes(&[OVERLAY_CONTAINER_CLASS]);
    pub const MENU_PANEL: ElementNode =
        ElementNode::with_classes(&[GLASS_CLASS, "mobile-menu-panel"]);
    pub const MENU_HEADING: ElementNode = ElementNode::with_classes(&["mobile-menu-heading"]);
    pub const MOBILE_NAV_LINK: ElementNode = ElementNode::with_classes(&[MOBILE_NAV_LINK_CLASS]);
}

/// Minimal selector language: `#id`, `.class` and the descendant combinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    Id(&'static str),
    Class(&'static str),
    /// `ancestor inner`: `inner` matches with some strict ancestor matching `ancestor`
    Descendant(&'static Selector, &'static Selector),
}

/// `.glass` - any glass-styled element
pub const GLASS_SELECTOR: Selector = Selector::Class(GLASS_CLASS);

/// `#mobile-menu .glass` - the menu's own content panel
pub const MENU_PANEL_SELECTOR: Selector =
    Selector::Descendant(&Selector::Id(MENU_OVERLAY_ID), &Selector::Class(GLASS_CLASS));

/// `#mobile-menu-button`
pub const MENU_BUTTON_SELECTOR: Selector = Selector::Id(MENU_BUTTON_ID);

impl Selector {
    /// Does the element at `index` of `path` match?
    fn matches_at(&self, path: &[ElementNode], index: usize) -> bool {
        let Some(node) = path.get(index) else {
            return false;
        };
        match self {
            Selector::Id(id) => node.is(id),
            Selector::Class(class) => node.has_class(class),
            Selector::Descendant(ancestor, inner) => {
                inner.matches_at(path, index)
                    && (index + 1..path.len()).any(|i| ancestor.matches_at(path, i))
            }
        }
    }
}

/// Target-first ancestor chain of a click.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickPath {
    nodes: Vec<ElementNode>,
}

impl ClickPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// A click that landed directly on the page root
    pub fn from_root() -> Self {
        Self::from_nodes([nodes::ROOT])
    }

    /// Build from a target-first sequence of nodes
    pub fn from_nodes(nodes: impl IntoIterator<Item = ElementNode>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    /// Record the next enclosing element as the click bubbles outward.
    pub fn push(&mut self, node: ElementNode) {
        self.nodes.push(node);
    }

    /// Take the recorded path, leaving an empty one for the next click.
    pub fn take(&mut self) -> ClickPath {
        std::mem::take(self)
    }

    pub fn target(&self) -> Option<&ElementNode> {
        self.nodes.first()
    }

    pub fn nodes(&self) -> &[ElementNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nearest ancestor-or-self of the target matching `selector`.
    pub fn closest(&self, selector: &Selector) -> Option<&ElementNode> {
        (0..self.nodes.len())
            .find(|&i| selector.matches_at(&self.nodes, i))
            .map(|i| &self.nodes[i])
    }

    /// Does the path pass through an element with this id?
    pub fn passes_through(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.is(id))
    }
}

/// Whether a click landed inside the content panel matched by `panel`.
pub fn is_inside_content_panel(path: &ClickPath, panel: &Selector) -> bool {
    path.closest(panel).is_some()
}

/// Ids of elements that have been rendered and mounted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountedElements {
    ids: HashSet<&'static str>,
}

impl MountedElements {
    pub fn insert(&mut self, id: &'static str) -> bool {
        self.ids.insert(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// First id in `required` that has not mounted, if any.
    pub fn first_missing<'a>(&self, required: &[&'a str]) -> Option<&'a str> {
        required.iter().copied().find(|id| !self.contains(id))
    }
}
