//! Page cursor for the paginated movie feed.

/// Page counter owned by a single feed pager.
///
/// Starts at the page the server already rendered (1) and is advanced before
/// every request, so the first request asks for page 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor(u32);

impl Default for PageCursor {
    fn default() -> Self {
        Self(1)
    }
}

impl PageCursor {
    /// Current page number.
    #[must_use]
    pub fn page(self) -> u32 {
        self.0
    }

    /// Move to the next page and return its number.
    pub fn advance(&mut self) -> u32 {
        self.0 = self.0.saturating_add(1);
        self.0
    }
}
