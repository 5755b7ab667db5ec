//! Animated starfield behind the page.

use dioxus::prelude::*;
use portfolio_core::starfield::{StarField, DEFAULT_STAR_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::context::get_launch_config;

/// Fixed layer of twinkling stars.
///
/// Generated once per page; `--seed` makes the sky reproducible.
#[component]
pub fn Starfield() -> Element {
    let field = use_hook(|| {
        let mut rng = match get_launch_config().star_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        StarField::generate(&mut rng, DEFAULT_STAR_COUNT)
    });

    rsx! {
        div { class: "stars",
            for (i, star) in field.stars().iter().enumerate() {
                div { key: "{i}", class: "star", style: "{star.style()}" }
            }
        }
    }
}
