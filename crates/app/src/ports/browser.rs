//! Browser-level side effects.

/// Full page reload, the only refresh mechanism after a like or unlike.
pub trait PageReloader {
    fn reload(&self);
}

/// Blocking user-visible message (an `alert` in the browser).
pub trait Notifier {
    fn alert(&self, message: &str);
}
