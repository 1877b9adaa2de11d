//! # movierec-app
//!
//! Application layer: page components and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `LikeApi`, `MovieFeed`, `ReviewApi`: calls to the backend endpoints
//!   - `PreferenceStore`: persisted client preferences
//!   - `ThemeSurface`, `CardContainer`, `ReviewRegion`, `ReviewForm`: the
//!     page elements a component reads or patches
//!   - `PageReloader`, `Notifier`: browser-level side effects
//! - Define the **components** driven by page events:
//!   - `ThemeToggle`: apply and flip the persisted theme
//!   - `LikeController`: like or unlike a movie, then reload
//!   - `FeedPager`: append the next page of movie cards
//!   - `ReviewPanel`: list and submit reviews
//! - Report failures to the diagnostic channel (`tracing`)
//!
//! ## Dependency rule
//! Depends on `movierec-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Execution model
//! Everything runs on the browser's single thread. Port futures carry no
//! `Send` bound and components keep their mutable state in `Cell`s so event
//! handlers can share them behind an `Rc`.

pub mod components;
pub mod ports;
