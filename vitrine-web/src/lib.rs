//! # Vitrine Web
//!
//! Mounts the Vitrine carousel and contact form on the campaign page.
//!
//! The module starts itself once loaded (`#[wasm_bindgen(start)]`) and waits
//! for `DOMContentLoaded` if the document is still parsing. Each component is
//! optional: when its markup is missing it is skipped and the rest of the
//! page still boots.
//!
//! Configuration is read from the `data-vitrine-config` attribute on
//! `<body>`, as TOML or JSON. A broken document is logged and replaced by the
//! defaults.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_config::PageConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

mod carousel;
mod dom;
mod driver;
mod error;
mod form;
mod logging;
mod scheduler;

pub use carousel::{DomCarousel, DomCarouselSurface};
pub use driver::{Driver, Update};
pub use error::WebError;
pub use form::{DomForm, DomFormSurface};
pub use scheduler::{Dispatcher, DomScheduler};

const CONFIG_ATTRIBUTE: &str = "data-vitrine-config";
const CAMPAIGN_VIDEO_ID: &str = "campaign-video";

/// Everything that must outlive `boot`: the controllers and the listeners
/// that feed them.
#[derive(Debug)]
struct Page {
    carousel: Option<Rc<Driver<DomCarousel>>>,
    form: Option<Rc<Driver<DomForm>>>,
    _listeners: dom::Listeners,
}

impl Page {
    fn suspend(&self) {
        if let Some(carousel) = &self.carousel {
            carousel.with(|carousel| carousel.shutdown());
        }
        if let Some(form) = &self.form {
            form.with(|form| form.shutdown());
        }
    }

    fn resume(&self) {
        if let Some(carousel) = &self.carousel {
            carousel.with(|carousel| carousel.resume());
        }
        if let Some(form) = &self.form {
            form.with(|form| form.resume());
        }
    }
}

fn with_page(f: impl FnOnce(&Page)) {
    PAGE.with(|page| {
        if let Some(page) = page.borrow().as_ref() {
            f(page);
        }
    });
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Entry point run by the generated JS glue once the module is loaded.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(error) = boot() {
                web_sys::console::error_1(&JsValue::from(error));
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.unchecked_ref(),
        )?;
    } else {
        boot()?;
    }
    Ok(())
}

fn boot() -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    let body = document.body().ok_or(WebError::NoBody)?;

    let raw = body.get_attribute(CONFIG_ATTRIBUTE);
    let resolved = PageConfig::resolve(raw.as_deref());
    let config = match &resolved {
        Ok((config, _, _)) => config.clone(),
        Err(_) => PageConfig::default(),
    };

    logging::init(&config.log_filter);
    match resolved {
        Ok((_, source, warnings)) => {
            for warning in warnings.iter() {
                tracing::warn!(?source, "{warning}");
            }
            tracing::debug!(?source, "page config loaded");
        }
        Err(error) => {
            tracing::error!(%error, "invalid page config; falling back to defaults");
        }
    }

    let mut listeners = dom::Listeners::default();
    let carousel = carousel::mount(&window, &document, &config, &mut listeners)?;

    if document.get_element_by_id(CAMPAIGN_VIDEO_ID).is_some() {
        tracing::info!("accessible campaign video initialized");
    }

    let form = form::mount(&window, &document, &config, &mut listeners)?;

    // Timers stop while the page sits in the back/forward cache.
    listeners.listen(&window, "pagehide", |_| with_page(Page::suspend))?;
    listeners.listen(&window, "pageshow", |_| with_page(Page::resume))?;

    tracing::info!(
        carousel = carousel.is_some(),
        form = form.is_some(),
        "vitrine mounted"
    );

    PAGE.with(|page| {
        *page.borrow_mut() = Some(Page {
            carousel,
            form,
            _listeners: listeners,
        });
    });
    Ok(())
}
