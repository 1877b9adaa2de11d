//! End-to-end flows through the page components.
//!
//! Every port is backed by an in-memory fake that records what the component
//! did to the "page", so the observable behaviour can be asserted without a
//! browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use movierec_app::components::{FeedPager, PanelState, ReviewPanel, ThemeToggle};
use movierec_app::ports::{
    CardContainer, MovieFeed, Notifier, PreferenceStore, ReviewApi, ReviewForm, ReviewRegion,
    ThemeSurface,
};
use movierec_domain::error::BackendError;
use movierec_domain::id::MovieId;
use movierec_domain::movie::{CardStyle, MovieCard};
use movierec_domain::review::{Review, ReviewSubmission, SubmitReceipt, empty_list_markup};
use movierec_domain::theme::ThemePreference;

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
struct SharedStore(Rc<RefCell<HashMap<String, String>>>);

impl PreferenceStore for SharedStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone)]
struct SharedSurface {
    dark: Rc<Cell<bool>>,
    label: Rc<RefCell<String>>,
}

impl Default for SharedSurface {
    fn default() -> Self {
        Self {
            dark: Rc::new(Cell::new(false)),
            label: Rc::new(RefCell::new("Dark Mode".to_string())),
        }
    }
}

impl ThemeSurface for SharedSurface {
    fn current(&self) -> ThemePreference {
        self.dark.get().into()
    }

    fn apply(&self, theme: ThemePreference) {
        self.dark.set(theme.is_dark());
        *self.label.borrow_mut() = theme.trigger_label().to_string();
    }
}

#[derive(Default, Clone)]
struct SharedRegion(Rc<RefCell<Vec<String>>>);

impl CardContainer for SharedRegion {
    fn append_markup(&self, markup: &str) {
        self.0.borrow_mut().push(markup.to_string());
    }
}

impl ReviewRegion for SharedRegion {
    fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn append_markup(&self, markup: &str) {
        self.0.borrow_mut().push(markup.to_string());
    }

    fn replace_markup(&self, markup: &str) {
        *self.0.borrow_mut() = vec![markup.to_string()];
    }
}

#[derive(Default, Clone)]
struct Backend {
    pages: Rc<HashMap<u32, Vec<MovieCard>>>,
    reviews: Rc<RefCell<Vec<Review>>>,
    requested_pages: Rc<RefCell<Vec<u32>>>,
    review_fetches: Rc<Cell<u32>>,
}

impl MovieFeed for Backend {
    async fn load_page(&self, page: u32) -> Result<Vec<MovieCard>, BackendError> {
        self.requested_pages.borrow_mut().push(page);
        Ok(self.pages.get(&page).cloned().unwrap_or_default())
    }
}

impl ReviewApi for Backend {
    async fn get_reviews(&self, _movie_id: &MovieId) -> Result<Vec<Review>, BackendError> {
        self.review_fetches.set(self.review_fetches.get() + 1);
        Ok(self.reviews.borrow().clone())
    }

    async fn submit_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<SubmitReceipt, BackendError> {
        self.reviews.borrow_mut().push(Review {
            username: "me".to_string(),
            rating: submission.rating.parse().unwrap_or_default(),
            review_text: Some(submission.review_text.clone()),
        });
        Ok(SubmitReceipt {
            message: "Review submitted successfully!".to_string(),
        })
    }
}

#[derive(Clone)]
struct SharedForm {
    rating: Rc<RefCell<String>>,
    text: Rc<RefCell<String>>,
}

impl ReviewForm for SharedForm {
    fn rating(&self) -> String {
        self.rating.borrow().clone()
    }

    fn review_text(&self) -> String {
        self.text.borrow().clone()
    }

    fn reset(&self) {
        self.rating.borrow_mut().clear();
        self.text.borrow_mut().clear();
    }
}

#[derive(Default, Clone)]
struct Alerts(Rc<RefCell<Vec<String>>>);

impl Notifier for Alerts {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

fn review(username: &str, rating: i64, text: &str) -> Review {
    Review {
        username: username.to_string(),
        rating,
        review_text: Some(text.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[test]
fn should_restore_label_and_stored_value_when_toggled_twice() {
    let store = SharedStore::default();
    store.save("darkMode", "enabled");
    let surface = SharedSurface::default();
    let toggle = ThemeToggle::new(store.clone(), surface.clone(), "darkMode");

    toggle.initialize();
    let label_before = surface.label.borrow().clone();

    toggle.toggle();
    toggle.toggle();

    assert_eq!(*surface.label.borrow(), label_before);
    assert_eq!(store.load("darkMode").as_deref(), Some("enabled"));
}

#[test]
fn should_show_light_mode_label_and_dark_presentation_when_enabled_is_stored() {
    let store = SharedStore::default();
    store.save("darkMode", "enabled");
    let surface = SharedSurface::default();
    let toggle = ThemeToggle::new(store, surface.clone(), "darkMode");

    toggle.initialize();

    assert_eq!(*surface.label.borrow(), "Light Mode");
    assert!(surface.dark.get());
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

fn review_panel(
    backend: &Backend,
) -> (
    ReviewPanel<Backend, SharedRegion, SharedForm, Alerts>,
    SharedRegion,
    SharedForm,
    Alerts,
) {
    let region = SharedRegion::default();
    let form = SharedForm {
        rating: Rc::new(RefCell::new("9".to_string())),
        text: Rc::new(RefCell::new("Masterpiece".to_string())),
    };
    let alerts = Alerts::default();
    let panel = ReviewPanel::new(
        backend.clone(),
        region.clone(),
        form.clone(),
        alerts.clone(),
        MovieId::Numeric(27),
    );
    (panel, region, form, alerts)
}

#[tokio::test]
async fn should_render_single_placeholder_when_no_reviews() {
    let backend = Backend::default();
    let (panel, region, _, _) = review_panel(&backend);

    let count = panel.fetch_reviews().await.unwrap();

    assert_eq!(count, 0);
    assert_eq!(*region.0.borrow(), vec![empty_list_markup()]);
    assert!(!region.0.borrow()[0].contains("class=\"review\""));
}

#[tokio::test]
async fn should_render_every_review_in_response_order() {
    let backend = Backend::default();
    backend.reviews.borrow_mut().extend([
        review("ana", 9, "Superb"),
        review("bo", 4, "Too long"),
        review("cy", 7, "Solid"),
    ]);
    let (panel, region, _, _) = review_panel(&backend);

    panel.fetch_reviews().await.unwrap();

    let entries = region.0.borrow();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].contains("<strong>ana</strong> - 9/10<p>Superb</p>"));
    assert!(entries[1].contains("<strong>bo</strong> - 4/10<p>Too long</p>"));
    assert!(entries[2].contains("<strong>cy</strong> - 7/10<p>Solid</p>"));
    assert!(entries.iter().all(|entry| entry.contains("<hr>")));
}

#[tokio::test]
async fn should_refresh_once_and_clear_form_after_successful_submission() {
    let backend = Backend::default();
    let (panel, region, form, alerts) = review_panel(&backend);
    panel.fetch_reviews().await.unwrap();
    let fetches_before = backend.review_fetches.get();

    panel.submit_review().await.unwrap();

    assert_eq!(backend.review_fetches.get(), fetches_before + 1);
    assert_eq!(form.rating(), "");
    assert_eq!(form.review_text(), "");
    assert_eq!(
        *alerts.0.borrow(),
        vec!["Review submitted successfully!".to_string()]
    );
    assert!(region.0.borrow()[0].contains("Masterpiece"));
    assert_eq!(panel.state(), PanelState::Rendered);
}

// ---------------------------------------------------------------------------
// Feed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_request_consecutive_pages_and_append_cumulatively() {
    let pages = (2..=4)
        .map(|page| {
            let card = MovieCard {
                id: MovieId::Numeric(i64::from(page)),
                title: format!("Movie {page}"),
                poster_path: None,
                overview: None,
            };
            (page, vec![card])
        })
        .collect();
    let backend = Backend {
        pages: Rc::new(pages),
        ..Default::default()
    };
    let container = SharedRegion::default();
    let pager = FeedPager::new(backend.clone(), container.clone(), CardStyle::default());

    for _ in 0..3 {
        pager.load_more().await.unwrap();
    }

    assert_eq!(*backend.requested_pages.borrow(), vec![2, 3, 4]);
    let cards = container.0.borrow();
    assert_eq!(cards.len(), 3);
    assert!(cards[0].contains("Movie 2"));
    assert!(cards[1].contains("Movie 3"));
    assert!(cards[2].contains("Movie 4"));
}

#[tokio::test]
async fn should_show_first_hundred_characters_and_ellipsis() {
    let card = MovieCard {
        id: MovieId::Numeric(5),
        title: "X".to_string(),
        poster_path: Some("/p.jpg".to_string()),
        overview: Some("A".repeat(150)),
    };
    let backend = Backend {
        pages: Rc::new(HashMap::from([(2, vec![card])])),
        ..Default::default()
    };
    let container = SharedRegion::default();
    let pager = FeedPager::new(backend, container.clone(), CardStyle::default());

    assert_eq!(pager.load_more().await.unwrap(), 1);

    let cards = container.0.borrow();
    assert_eq!(cards.len(), 1);
    let expected = format!("<p class=\"card-text\">{}...</p>", "A".repeat(100));
    assert!(cards[0].contains(&expected));
}
