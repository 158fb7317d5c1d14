//! Folio Nav
//!
//! Navigation behaviors for the page:
//! - Scroll-driven navbar styling and active-link highlighting
//! - Mobile menu open/close rules
//! - Smooth scrolling with a manual ease-in-out-quadratic animation

pub mod controller;
pub mod handles;
pub mod menu;
pub mod scroll;
pub mod smooth;

pub use controller::NavigationController;
pub use handles::NavHandles;
pub use menu::MobileMenu;
pub use scroll::ScrollCoordinator;
pub use smooth::SmoothScroller;
