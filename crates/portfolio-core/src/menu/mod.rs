//! Mobile navigation overlay.
//!
//! The overlay is a full-screen menu opened by a single toggle button and
//! dismissed by several independent triggers:
//!
//! - the toggle button itself
//! - activating a navigation link inside the menu
//! - clicking the overlay backdrop or its centering container
//! - any click outside the menu panel and the toggle button
//!
//! All triggers route through one idempotent close, so two handlers observing
//! the same physical click cannot leave the page in a mixed state.

mod controller;
mod state;

pub use controller::MenuController;
pub use state::{MenuFlags, MenuState, Transition};
