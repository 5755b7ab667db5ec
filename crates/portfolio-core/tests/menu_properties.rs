//! Property-based tests for the navigation overlay controller
//!
//! Uses proptest to drive the controller with arbitrary trigger sequences and
//! check that its state and visual flags never disagree.

use portfolio_core::dom::nodes::*;
use portfolio_core::dom::{ClickPath, ElementNode, MountedElements, MENU_REQUIRED_IDS};
use portfolio_core::menu::{MenuController, MenuFlags, MenuState, Transition};
use portfolio_core::navigation::NAV_SECTIONS;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Triggers the page can fire at the controller
#[derive(Debug, Clone)]
enum MenuOp {
    Toggle,
    Link(usize),
    OverlayClick(ClickPath),
    OutsideClick(ClickPath),
    DocumentClick(ClickPath),
}

const SECTION_NODE: ElementNode = ElementNode::with_id("skills");

/// Click paths the rendered page can actually produce
fn click_path_strategy() -> impl Strategy<Value = ClickPath> {
    prop::sample::select(vec![
        ClickPath::from_root(),
        ClickPath::from_nodes([SECTION_NODE, ROOT]),
        ClickPath::from_nodes([NAV_BAR, ROOT]),
        ClickPath::from_nodes([MENU_BUTTON, NAV_BAR, ROOT]),
        ClickPath::from_nodes([CLOSE_ICON, MENU_BUTTON, NAV_BAR, ROOT]),
        ClickPath::from_nodes([MENU_OVERLAY, ROOT]),
        ClickPath::from_nodes([OVERLAY_CONTAINER, MENU_OVERLAY, ROOT]),
        ClickPath::from_nodes([MENU_PANEL, OVERLAY_CONTAINER, MENU_OVERLAY, ROOT]),
        ClickPath::from_nodes([MENU_HEADING, MENU_PANEL, OVERLAY_CONTAINER, MENU_OVERLAY, ROOT]),
        ClickPath::from_nodes([
            MOBILE_NAV_LINK,
            MENU_PANEL,
            OVERLAY_CONTAINER,
            MENU_OVERLAY,
            ROOT,
        ]),
    ])
}

fn close_op_strategy() -> impl Strategy<Value = MenuOp> {
    prop_oneof![
        (0..NAV_SECTIONS.len()).prop_map(MenuOp::Link),
        click_path_strategy().prop_map(MenuOp::OverlayClick),
        click_path_strategy().prop_map(MenuOp::OutsideClick),
        click_path_strategy().prop_map(MenuOp::DocumentClick),
    ]
}

fn menu_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<MenuOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(MenuOp::Toggle),
            3 => close_op_strategy(),
        ],
        0..max_ops,
    )
}

fn attached() -> MenuController {
    let mut mounted = MountedElements::default();
    for id in MENU_REQUIRED_IDS {
        mounted.insert(id);
    }
    MenuController::attach(&mounted).expect("all required elements mounted")
}

fn apply(menu: &mut MenuController, op: &MenuOp) -> Transition {
    match op {
        MenuOp::Toggle => menu.toggle(),
        MenuOp::Link(i) => menu.close_via_link(NAV_SECTIONS[*i]),
        MenuOp::OverlayClick(path) => menu.close_via_overlay_click(path),
        MenuOp::OutsideClick(path) => menu.close_via_outside_click(path),
        MenuOp::DocumentClick(path) => menu.dispatch_document_click(path),
    }
}

fn assert_flags_consistent(menu: &MenuController) -> Result<(), TestCaseError> {
    let flags = menu.flags();
    let open = menu.state() == MenuState::Open;
    prop_assert_eq!(flags.overlay_visible, open);
    prop_assert_eq!(flags.close_icon_visible, open);
    prop_assert_eq!(flags.blur_background, open);
    prop_assert_eq!(flags.hamburger_visible, !open);
    Ok(())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// N toggles from closed leave the menu open iff N is odd
    #[test]
    fn toggle_is_an_involution(n in 0usize..64) {
        let mut menu = attached();
        for _ in 0..n {
            menu.toggle();
        }
        let expected = if n % 2 == 1 { MenuState::Open } else { MenuState::Closed };
        prop_assert_eq!(menu.state(), expected);
    }

    /// State and every mirrored flag agree after any trigger sequence
    #[test]
    fn flags_always_mirror_state(ops in menu_ops_strategy(50)) {
        let mut menu = attached();
        assert_flags_consistent(&menu)?;
        for op in &ops {
            apply(&mut menu, op);
            assert_flags_consistent(&menu)?;
        }
    }

    /// Close triggers on a closed menu change nothing
    #[test]
    fn close_triggers_idempotent_when_closed(ops in prop::collection::vec(close_op_strategy(), 0..30)) {
        let mut menu = attached();
        let before: MenuFlags = menu.flags();
        for op in &ops {
            prop_assert_eq!(apply(&mut menu, op), Transition::Unchanged);
            prop_assert_eq!(menu.flags(), before);
        }
    }

    /// Only toggle can open the menu
    #[test]
    fn only_toggle_opens(ops in menu_ops_strategy(50)) {
        let mut menu = attached();
        for op in &ops {
            let was_open = menu.state() == MenuState::Open;
            let transition = apply(&mut menu, op);
            if !matches!(op, MenuOp::Toggle) {
                prop_assert_ne!(transition, Transition::Opened);
                if !was_open {
                    prop_assert_eq!(menu.state(), MenuState::Closed);
                }
            }
        }
    }

    /// Running the same document click twice equals running it once
    #[test]
    fn duplicate_document_clicks_are_safe(open in any::<bool>(), path in click_path_strategy()) {
        let mut once = attached();
        if open {
            once.toggle();
        }
        let mut twice = once.clone();

        once.dispatch_document_click(&path);
        twice.dispatch_document_click(&path);
        prop_assert_eq!(twice.dispatch_document_click(&path), Transition::Unchanged);
        prop_assert_eq!(once, twice);
    }
}
