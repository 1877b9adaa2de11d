//! # movierec-domain
//!
//! Pure domain model for the movierec browser client.
//!
//! ## Responsibilities
//! - Foundational types: the opaque [`MovieId`](id::MovieId), error conventions
//! - The persisted [`ThemePreference`](theme::ThemePreference)
//! - Like/unlike actions and their backend endpoints
//! - Transient feed data ([`MovieCard`](movie::MovieCard)) and the
//!   [`PageCursor`](page::PageCursor) that walks the feed
//! - Reviews, review submissions and the receipt returned by the server
//! - HTML markup for everything the client injects into the page
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod markup;

pub mod like;
pub mod movie;
pub mod page;
pub mod review;
pub mod theme;
