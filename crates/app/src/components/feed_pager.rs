//! Feed pager: appends the next page of movie cards to the feed.

use std::cell::Cell;

use movierec_domain::error::BackendError;
use movierec_domain::movie::CardStyle;
use movierec_domain::page::PageCursor;

use crate::ports::{CardContainer, MovieFeed};

/// Loads further feed pages into an append-only container.
pub struct FeedPager<F, C> {
    feed: F,
    container: C,
    style: CardStyle,
    cursor: Cell<PageCursor>,
}

impl<F: MovieFeed, C: CardContainer> FeedPager<F, C> {
    /// Create a pager whose cursor sits on the server-rendered first page.
    pub fn new(feed: F, container: C, style: CardStyle) -> Self {
        Self {
            feed,
            container,
            style,
            cursor: Cell::new(PageCursor::default()),
        }
    }

    /// Page most recently requested (1 before the first request).
    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        self.cursor.get()
    }

    /// Advance the cursor, fetch that page and append its cards in order.
    ///
    /// The cursor is not rolled back when the fetch fails, so the next call
    /// requests the page after the failed one.
    ///
    /// # Errors
    ///
    /// Returns the [`BackendError`] of a failed fetch. The container is left
    /// unchanged in that case.
    pub async fn load_more(&self) -> Result<usize, BackendError> {
        let mut cursor = self.cursor.get();
        let page = cursor.advance();
        self.cursor.set(cursor);

        let cards = match self.feed.load_page(page).await {
            Ok(cards) => cards,
            Err(err) => {
                tracing::error!(page, error = %err, "error loading more movies");
                return Err(err);
            }
        };

        for card in &cards {
            self.container.append_markup(&card.to_markup(&self.style));
        }
        tracing::debug!(page, count = cards.len(), "appended movie cards");
        Ok(cards.len())
    }
}
