//! Reveal-on-scroll wrapper.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::reveal::{Bounds, RevealTracker};

use crate::context::{use_reveal, RevealTargets};

/// Fades its children in once they scroll into view.
///
/// `name` must be unique on the page.
#[component]
pub fn Reveal(name: &'static str, #[props(default, into)] class: String, children: Element) -> Element {
    let (mut targets, revealed) = use_reveal();

    let is_revealed = revealed.read().is_revealed(&name);
    let full_class = match (is_revealed, class.is_empty()) {
        (true, true) => "reveal revealed".to_string(),
        (true, false) => format!("reveal revealed {}", class),
        (false, true) => "reveal".to_string(),
        (false, false) => format!("reveal {}", class),
    };

    rsx! {
        div {
            class: "{full_class}",
            onmounted: move |evt| {
                targets.write().insert(name, evt.data());
            },
            {children}
        }
    }
}

/// Measure every unrevealed target against the page viewport.
///
/// Runs after mount and on every scroll of the page root.
pub fn measure_reveals(
    root: Option<Rc<MountedData>>,
    targets: Signal<RevealTargets>,
    mut revealed: Signal<RevealTracker<&'static str>>,
) {
    let Some(root) = root else {
        return;
    };

    spawn(async move {
        let viewport = match root.get_client_rect().await {
            Ok(rect) => Bounds::new(rect.origin.y, rect.size.height),
            Err(e) => {
                tracing::warn!("Failed to measure viewport: {:?}", e);
                return;
            }
        };

        let tracker = revealed.peek();
        let pending: Vec<(&'static str, Rc<MountedData>)> = targets
            .peek()
            .iter()
            .filter(|(name, _)| !tracker.is_revealed(name))
            .map(|(name, target)| (*name, target.clone()))
            .collect();
        drop(tracker);

        for (name, target) in pending {
            let Ok(rect) = target.get_client_rect().await else {
                continue;
            };
            let bounds = Bounds::new(rect.origin.y, rect.size.height);
            if revealed.peek().should_reveal(&name, bounds, viewport) {
                revealed.write().observe(name, bounds, viewport);
                tracing::trace!(name, "Revealed");
            }
        }
    });
}
