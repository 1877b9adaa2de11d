//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the page components and the browser.
//! They are defined here (in `app`) so that both the component layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod backend;
pub mod browser;
pub mod dom;
pub mod storage;

pub use backend::{LikeApi, MovieFeed, ReviewApi};
pub use browser::{Notifier, PageReloader};
pub use dom::{CardContainer, ReviewForm, ReviewRegion, ThemeSurface};
pub use storage::PreferenceStore;
