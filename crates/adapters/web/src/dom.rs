//! Element handles implementing the DOM and browser ports.
//!
//! Browser calls that throw are logged and otherwise ignored: a component
//! must never take the page down with it.

use movierec_app::ports::{
    CardContainer, Notifier, PageReloader, ReviewForm, ReviewRegion, ThemeSurface,
};
use movierec_domain::theme::ThemePreference;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

/// `<body>` presentation class plus the optional theme trigger.
#[derive(Debug, Clone)]
pub struct BodyTheme {
    body: HtmlElement,
    trigger: Option<HtmlElement>,
    dark_class: String,
}

impl BodyTheme {
    #[must_use]
    pub fn new(body: HtmlElement, trigger: Option<HtmlElement>, dark_class: impl Into<String>) -> Self {
        Self {
            body,
            trigger,
            dark_class: dark_class.into(),
        }
    }
}

impl ThemeSurface for BodyTheme {
    fn current(&self) -> ThemePreference {
        self.body.class_list().contains(&self.dark_class).into()
    }

    fn apply(&self, theme: ThemePreference) {
        if let Err(err) = self
            .body
            .class_list()
            .toggle_with_force(&self.dark_class, theme.is_dark())
        {
            tracing::warn!(?err, "failed to switch presentation class");
        }
        if let Some(trigger) = &self.trigger {
            trigger.set_text_content(Some(theme.trigger_label()));
        }
    }
}

/// Element whose content is patched with markup fragments.
#[derive(Debug, Clone)]
pub struct HtmlRegion {
    element: Element,
}

impl HtmlRegion {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    fn insert_at_end(&self, markup: &str) {
        if let Err(err) = self.element.insert_adjacent_html("beforeend", markup) {
            tracing::warn!(?err, "failed to insert markup");
        }
    }
}

impl CardContainer for HtmlRegion {
    fn append_markup(&self, markup: &str) {
        self.insert_at_end(markup);
    }
}

impl ReviewRegion for HtmlRegion {
    fn clear(&self) {
        self.element.set_inner_html("");
    }

    fn append_markup(&self, markup: &str) {
        self.insert_at_end(markup);
    }

    fn replace_markup(&self, markup: &str) {
        self.element.set_inner_html(markup);
    }
}

/// The review form and its two fields.
///
/// Missing fields read as empty strings; the server decides what to accept.
#[derive(Debug, Clone)]
pub struct FormFields {
    form: HtmlFormElement,
    rating: Option<Element>,
    text: Option<Element>,
}

impl FormFields {
    #[must_use]
    pub fn new(form: HtmlFormElement, rating: Option<Element>, text: Option<Element>) -> Self {
        Self { form, rating, text }
    }
}

/// Current value of an `<input>`, `<select>` or `<textarea>`.
fn control_value(element: Option<&Element>) -> String {
    let Some(element) = element else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

impl ReviewForm for FormFields {
    fn rating(&self) -> String {
        control_value(self.rating.as_ref())
    }

    fn review_text(&self) -> String {
        control_value(self.text.as_ref())
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Window-level side effects.
#[derive(Debug, Clone)]
pub struct BrowserWindow {
    window: Window,
}

impl BrowserWindow {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl PageReloader for BrowserWindow {
    fn reload(&self) {
        if let Err(err) = self.window.location().reload() {
            tracing::warn!(?err, "failed to reload page");
        }
    }
}

impl Notifier for BrowserWindow {
    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(?err, "failed to show alert");
        }
    }
}
