//! Small conveniences over `web-sys`.

use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::WebError;

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn select<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn select_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|position| nodes.get(position))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Log a failed DOM call. Surface methods have no error channel; a failed
/// attribute write must not take the page down.
pub fn report<T>(result: Result<T, JsValue>, action: &'static str) {
    if let Err(error) = result {
        tracing::warn!(action, ?error, "DOM call failed");
    }
}

/// Remove `element` from the document after `ttl`. Removing an element that
/// is already gone does nothing.
pub fn remove_after(window: &Window, element: Element, ttl: Duration) {
    let callback = Closure::once_into_js(move || element.remove());
    let delay = i32::try_from(ttl.as_millis()).unwrap_or(i32::MAX);
    report(
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay,
        ),
        "schedule transient removal",
    );
}

/// Create a polite `role=status` element carrying `text`.
pub fn status_element(
    document: &Document,
    class: Option<&str>,
    text: &str,
) -> Result<HtmlElement, WebError> {
    let element = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::UnexpectedElement("div"))?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    element.set_attribute("role", "status")?;
    element.set_attribute("aria-live", "polite")?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Event listeners that stay attached for as long as this value lives.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<(EventTarget, &'static str, Closure<dyn FnMut(Event)>)>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("attached", &self.attached.len())
            .finish()
    }
}

impl Listeners {
    pub fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), WebError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(
            event,
            closure.as_ref().unchecked_ref(),
        )?;
        self.attached.push((target.clone(), event, closure));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (target, event, closure) in self.attached.drain(..) {
            report(
                target.remove_event_listener_with_callback(
                    event,
                    closure.as_ref().unchecked_ref(),
                ),
                "detach listener",
            );
        }
    }
}
