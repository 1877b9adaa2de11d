//! Attach the components to the elements present on the current page.
//!
//! Every component is mounted independently. A missing element skips that
//! component (logged at debug level) and never affects the others.

use std::rc::Rc;

use movierec_app::components::{FeedPager, LikeController, ReviewPanel, ThemeToggle};
use movierec_domain::id::MovieId;
use movierec_domain::like::LikeAction;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlFormElement, Window};

use crate::api::HttpBackend;
use crate::config::ClientConfig;
use crate::dom::{BodyTheme, BrowserWindow, FormFields, HtmlRegion};
use crate::error::WebError;
use crate::storage::LocalStorage;

/// What got mounted on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountReport {
    /// The theme trigger received its click handler.
    pub theme_toggle: bool,
    /// Number of like triggers wired.
    pub like_triggers: u32,
    /// Number of unlike triggers wired.
    pub unlike_triggers: u32,
    /// The feed trigger and container were both found.
    pub feed_pager: bool,
    /// The review form and region were both found.
    pub review_panel: bool,
}

/// Mount the components once the document has been parsed.
///
/// Mounts immediately when the script runs after parsing (`defer`, module,
/// or end of `<body>`), otherwise waits for `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error when the `DOMContentLoaded` listener cannot be registered.
pub fn mount_when_ready(window: &Window, config: ClientConfig) -> Result<(), WebError> {
    let Some(document) = window.document() else {
        tracing::warn!("no document, nothing mounted");
        return Ok(());
    };
    if !is_loading(&document.ready_state()) {
        mount(window, &config);
        return Ok(());
    }

    tracing::debug!("document still loading, waiting for DOMContentLoaded");
    let window = window.clone();
    listen(&document, "DOMContentLoaded", move |_| {
        mount(&window, &config);
    })
}

fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Mount every component the page has elements for.
///
/// Components are mounted independently: one that fails is logged and
/// reported as not mounted, and the remaining ones are still attempted.
pub fn mount(window: &Window, config: &ClientConfig) -> MountReport {
    let Some(document) = window.document() else {
        tracing::warn!("no document, nothing mounted");
        return MountReport::default();
    };
    let backend = HttpBackend::new(config.api.base_url.clone());

    let report = MountReport {
        theme_toggle: isolate("theme toggle", mount_theme_toggle(window, &document, config)),
        like_triggers: isolate(
            "like triggers",
            mount_like_triggers(
                window,
                &document,
                &backend,
                LikeAction::Like,
                &config.selectors.like_trigger,
            ),
        ),
        unlike_triggers: isolate(
            "unlike triggers",
            mount_like_triggers(
                window,
                &document,
                &backend,
                LikeAction::Unlike,
                &config.selectors.unlike_trigger,
            ),
        ),
        feed_pager: isolate("feed pager", mount_feed_pager(&document, &backend, config)),
        review_panel: isolate(
            "review panel",
            mount_review_panel(window, &document, &backend, config),
        ),
    };
    tracing::info!(?report, "components mounted");
    report
}

/// Unwrap one component's mount result, logging a failure as "not mounted".
fn isolate<T: Default>(component: &'static str, result: Result<T, WebError>) -> T {
    result.unwrap_or_else(|err| {
        tracing::error!(component, error = %err, "failed to mount component");
        T::default()
    })
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| WebError::from_js(&err))?;
    closure.forget();
    Ok(())
}

fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn mount_theme_toggle(
    window: &Window,
    document: &Document,
    config: &ClientConfig,
) -> Result<bool, WebError> {
    let Some(body) = document.body() else {
        tracing::debug!("no <body>, theme toggle skipped");
        return Ok(false);
    };
    let trigger = html_element_by_id(document, &config.selectors.theme_trigger_id);
    let toggle = Rc::new(ThemeToggle::new(
        LocalStorage::from_window(window),
        BodyTheme::new(body, trigger.clone(), config.theme.dark_class.clone()),
        config.theme.storage_key.clone(),
    ));
    toggle.initialize();

    let Some(trigger) = trigger else {
        tracing::debug!(id = %config.selectors.theme_trigger_id, "theme trigger not found, handler skipped");
        return Ok(false);
    };
    listen(&trigger, "click", move |_| {
        toggle.toggle();
    })?;
    Ok(true)
}

fn mount_like_triggers(
    window: &Window,
    document: &Document,
    backend: &HttpBackend,
    action: LikeAction,
    selector: &str,
) -> Result<u32, WebError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| WebError::from_js(&err))?;
    if nodes.length() == 0 {
        tracing::debug!(selector, "no triggers found");
        return Ok(0);
    }

    let controller = Rc::new(LikeController::new(
        backend.clone(),
        BrowserWindow::new(window.clone()),
        action,
    ));
    let mut wired = 0;
    for index in 0..nodes.length() {
        let Some(trigger) = nodes.item(index) else {
            continue;
        };
        let controller = Rc::clone(&controller);
        listen(&trigger, "click", move |event: Event| {
            let raw = event
                .current_target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
                .and_then(|el| el.dataset().get("movieId"));
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                let _ = controller.activate_from_attribute(raw.as_deref()).await;
            });
        })?;
        wired += 1;
    }
    Ok(wired)
}

fn mount_feed_pager(
    document: &Document,
    backend: &HttpBackend,
    config: &ClientConfig,
) -> Result<bool, WebError> {
    let selectors = &config.selectors;
    let (Some(trigger), Some(container)) = (
        document.get_element_by_id(&selectors.feed_trigger_id),
        document.get_element_by_id(&selectors.feed_container_id),
    ) else {
        tracing::debug!("feed trigger or container not found, pager skipped");
        return Ok(false);
    };

    let pager = Rc::new(FeedPager::new(
        backend.clone(),
        HtmlRegion::new(container),
        config.card_style(),
    ));
    listen(&trigger, "click", move |_| {
        let pager = Rc::clone(&pager);
        spawn_local(async move {
            let _ = pager.load_more().await;
        });
    })?;
    Ok(true)
}

fn mount_review_panel(
    window: &Window,
    document: &Document,
    backend: &HttpBackend,
    config: &ClientConfig,
) -> Result<bool, WebError> {
    let selectors = &config.selectors;
    let (Some(form), Some(region)) = (
        document
            .get_element_by_id(&selectors.review_form_id)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok()),
        document.get_element_by_id(&selectors.review_region_id),
    ) else {
        tracing::debug!("review form or region not found, panel skipped");
        return Ok(false);
    };
    let movie_id = match form.dataset().get("movieId").unwrap_or_default().parse::<MovieId>() {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(error = %err, "review form has no movie id, panel skipped");
            return Ok(false);
        }
    };

    let fields = FormFields::new(
        form.clone(),
        document.get_element_by_id(&selectors.rating_field_id),
        document.get_element_by_id(&selectors.text_field_id),
    );
    let panel = Rc::new(ReviewPanel::new(
        backend.clone(),
        HtmlRegion::new(region),
        fields,
        BrowserWindow::new(window.clone()),
        movie_id,
    ));

    {
        let panel = Rc::clone(&panel);
        spawn_local(async move {
            let _ = panel.fetch_reviews().await;
        });
    }

    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let panel = Rc::clone(&panel);
        spawn_local(async move {
            let _ = panel.submit_review().await;
        });
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax_error() -> WebError {
        WebError::Js("SyntaxError: '[[[' is not a valid selector".to_string())
    }

    #[test]
    fn should_report_failed_component_as_not_mounted() {
        let wired: u32 = isolate("like triggers", Err(syntax_error()));
        assert_eq!(wired, 0);
        assert!(!isolate::<bool>("feed pager", Err(syntax_error())));
    }

    #[test]
    fn should_keep_mounted_component_result() {
        assert!(isolate("review panel", Ok(true)));
        assert_eq!(isolate("unlike triggers", Ok(3_u32)), 3);
    }

    #[test]
    fn should_build_report_from_mixed_outcomes() {
        let report = MountReport {
            theme_toggle: isolate("theme toggle", Ok(true)),
            like_triggers: isolate("like triggers", Err(syntax_error())),
            unlike_triggers: isolate("unlike triggers", Ok(2)),
            feed_pager: isolate("feed pager", Ok(true)),
            review_panel: isolate("review panel", Ok(true)),
        };
        assert_eq!(
            report,
            MountReport {
                theme_toggle: true,
                like_triggers: 0,
                unlike_triggers: 2,
                feed_pager: true,
                review_panel: true,
            }
        );
    }

    #[test]
    fn should_wait_only_while_document_is_loading() {
        assert!(is_loading("loading"));
        assert!(!is_loading("interactive"));
        assert!(!is_loading("complete"));
    }
}
