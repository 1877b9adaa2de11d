//! Page components: one per interactive region of the page.
//!
//! Each component struct accepts port trait implementations via generic
//! parameters (constructor injection). Components never depend on each other.

pub mod feed_pager;
pub mod like_controller;
pub mod review_panel;
pub mod theme_toggle;

pub use feed_pager::FeedPager;
pub use like_controller::LikeController;
pub use review_panel::{PanelState, ReviewPanel};
pub use theme_toggle::ThemeToggle;
