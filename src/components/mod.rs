//! UI Components for the portfolio.
//!
//! Deep-space glass aesthetic components.

mod copy_toast;
mod icons;
mod mobile_menu;
mod nav_bar;
mod reveal;
pub mod sections;
mod starfield;

pub use copy_toast::{copy_email, CopyToast};
pub use mobile_menu::MobileMenu;
pub use nav_bar::NavBar;
pub use reveal::{measure_reveals, Reveal};
pub use starfield::Starfield;
