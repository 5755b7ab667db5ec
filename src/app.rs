use dioxus::prelude::*;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The whole portfolio; sections are reached by in-page anchors
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
