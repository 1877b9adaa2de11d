//! DOM ports: handles on the page elements each component owns.
//!
//! Components receive these through their constructors instead of looking
//! elements up globally, so they can be driven without a real document.

use movierec_domain::theme::ThemePreference;

/// The document presentation plus the theme trigger's label.
pub trait ThemeSurface {
    /// Theme currently shown on the page.
    fn current(&self) -> ThemePreference;

    /// Show `theme` and label the trigger accordingly.
    fn apply(&self, theme: ThemePreference);
}

/// Append-only container receiving movie cards.
pub trait CardContainer {
    /// Insert `markup` after the container's last child.
    fn append_markup(&self, markup: &str);
}

/// Region displaying the reviews of one movie.
pub trait ReviewRegion {
    /// Remove everything currently displayed.
    fn clear(&self);

    /// Add `markup` after the current content.
    fn append_markup(&self, markup: &str);

    /// Replace the whole content with `markup`.
    fn replace_markup(&self, markup: &str);
}

/// The review form's fields.
pub trait ReviewForm {
    /// Raw value of the rating field.
    fn rating(&self) -> String;

    /// Raw value of the review text field.
    fn review_text(&self) -> String;

    /// Restore every field to its initial value.
    fn reset(&self);
}
