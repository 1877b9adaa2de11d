//! # movierec-adapter-web
//!
//! Browser adapter for the movierec client.
//!
//! ## Provided implementations
//!
//! | Port | Implementation | Backed by |
//! |------|----------------|-----------|
//! | `LikeApi`, `MovieFeed`, `ReviewApi` | [`HttpBackend`](api::HttpBackend) | `gloo-net` |
//! | `PreferenceStore` | [`LocalStorage`](storage::LocalStorage) | `window.localStorage` |
//! | `ThemeSurface` | [`BodyTheme`](dom::BodyTheme) | `<body>` class + trigger label |
//! | `CardContainer`, `ReviewRegion` | [`HtmlRegion`](dom::HtmlRegion) | element inner HTML |
//! | `ReviewForm` | [`FormFields`](dom::FormFields) | form controls |
//! | `PageReloader`, `Notifier` | [`BrowserWindow`](dom::BrowserWindow) | `location.reload`, `alert` |
//!
//! [`mount::mount`] wires them to the elements named in
//! [`ClientConfig`](config::ClientConfig) and registers the event handlers;
//! [`mount::mount_when_ready`] defers that until the document is parsed.
//!
//! ## Dependency rule
//!
//! Depends on `movierec-app` (port traits) and `movierec-domain` only.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod mount;
pub mod storage;
