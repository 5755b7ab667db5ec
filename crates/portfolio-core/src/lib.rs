//! Portfolio Core Library
//!
//! UI-free logic behind the single-page portfolio.
//!
//! ## Overview
//!
//! The page itself is rendered by the Dioxus app in the workspace root. This
//! crate holds everything that can be reasoned about without a live element
//! tree:
//!
//! - **Navigation overlay**: the mobile menu state machine and its dismissal
//!   rules ([`menu`])
//! - **Element tree predicates**: ancestor walks over a click path ([`dom`])
//! - **Page effects**: starfield generation, reveal-on-scroll and the copy
//!   toast lifecycle
//! - **Content**: the static profile, skills, education, experience and
//!   projects shown on the page
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::dom::{ClickPath, MountedElements, MENU_REQUIRED_IDS};
//! use portfolio_core::menu::{MenuController, MenuState};
//!
//! let mut mounted = MountedElements::default();
//! for id in MENU_REQUIRED_IDS {
//!     mounted.insert(id);
//! }
//!
//! let mut menu = MenuController::attach(&mounted).expect("all elements mounted");
//! menu.toggle();
//! assert_eq!(menu.state(), MenuState::Open);
//!
//! // A click that bubbles straight to the page root closes the menu.
//! menu.dispatch_document_click(&ClickPath::from_root());
//! assert_eq!(menu.state(), MenuState::Closed);
//! ```

pub mod content;
pub mod dom;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod reveal;
pub mod starfield;
pub mod toast;

// Re-exports
pub use dom::{ClickPath, ElementNode, MountedElements, Selector};
pub use error::{PortfolioError, Result};
pub use menu::{MenuController, MenuFlags, MenuState, Transition};
pub use navigation::Section;
pub use reveal::{Bounds, RevealTracker};
pub use starfield::{Star, StarField};
pub use toast::{ToastPhase, ToastState};
