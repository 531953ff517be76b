//! Carousel surface over the page markup and its event wiring.

use std::rc::Rc;
use std::time::Duration;

use vitrine_config::PageConfig;
use vitrine_contracts::prelude::{CarouselSurface, PauseControl};
use vitrine_core::{CarouselController, CarouselMessage};
use vitrine_model::{CarouselTarget, Key, SlideIndex};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, KeyboardEvent, Window};

use crate::dom::{self, Listeners, report};
use crate::driver::Driver;
use crate::error::WebError;
use crate::scheduler::{Dispatcher, DomScheduler};

const ROOT: &str = ".carousel";
const SLIDES: &str = ".carousel-slide";
const INDICATORS: &str = ".carousel-indicator";
const PREVIOUS_ID: &str = "carousel-prev-btn";
const NEXT_ID: &str = "carousel-next-btn";
const PAUSE_ID: &str = "carousel-pause-btn";

/// The carousel controller as mounted on the page.
pub type DomCarousel =
    CarouselController<DomCarouselSurface, DomScheduler<CarouselMessage>>;

/// [`CarouselSurface`] over the carousel markup.
#[derive(Debug)]
pub struct DomCarouselSurface {
    window: Window,
    document: Document,
    root: HtmlElement,
    slides: Vec<HtmlElement>,
    indicators: Vec<HtmlElement>,
    previous: HtmlElement,
    next: HtmlElement,
    pause: HtmlElement,
}

impl DomCarouselSurface {
    /// Find the carousel on the page. `None` when the root or any of its
    /// three controls is missing.
    pub fn locate(window: &Window, document: &Document) -> Option<Self> {
        let root = dom::select::<HtmlElement>(document, ROOT)?;
        let previous = dom::by_id::<HtmlElement>(document, PREVIOUS_ID)?;
        let next = dom::by_id::<HtmlElement>(document, NEXT_ID)?;
        let pause = dom::by_id::<HtmlElement>(document, PAUSE_ID)?;

        Some(Self {
            window: window.clone(),
            document: document.clone(),
            root,
            slides: dom::select_all(document, SLIDES),
            indicators: dom::select_all(document, INDICATORS),
            previous,
            next,
            pause,
        })
    }
}

impl CarouselSurface for DomCarouselSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn supports_announcements(&self) -> bool {
        self.root
            .get_attribute("aria-live")
            .is_some_and(|value| !value.is_empty())
    }

    fn set_slide_visible(&mut self, index: SlideIndex, visible: bool) {
        let Some(slide) = self.slides.get(index.get()) else {
            return;
        };
        let display = if visible { "block" } else { "none" };
        report(
            slide.style().set_property("display", display),
            "set slide display",
        );
        report(
            slide.set_attribute("aria-hidden", if visible { "false" } else { "true" }),
            "set slide aria-hidden",
        );
    }

    fn set_indicator_active(&mut self, index: SlideIndex, active: bool) {
        let Some(indicator) = self.indicators.get(index.get()) else {
            return;
        };
        let classes = indicator.class_list();
        report(
            if active {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            },
            "toggle indicator class",
        );
        report(
            indicator
                .set_attribute("aria-current", if active { "true" } else { "false" }),
            "set indicator aria-current",
        );
    }

    fn set_pause_control(&mut self, control: &PauseControl) {
        report(
            self.pause.set_attribute(
                "aria-pressed",
                if control.pressed { "true" } else { "false" },
            ),
            "set pause aria-pressed",
        );
        self.pause.set_text_content(Some(&control.label));
        self.pause.set_title(&control.title);
    }

    fn announce(&mut self, text: &str, ttl: Duration) {
        let Some(body) = self.document.body() else {
            return;
        };
        let region = match dom::status_element(&self.document, None, text) {
            Ok(region) => region,
            Err(error) => {
                tracing::warn!(%error, "could not create announcement");
                return;
            }
        };
        // Off-screen but still read out.
        let style = region.style();
        report(style.set_property("position", "absolute"), "position announcement");
        report(style.set_property("left", "-10000px"), "position announcement");

        report(body.append_child(&region), "append announcement");
        dom::remove_after(&self.window, region.into(), ttl);
    }

    fn focus_previous_control(&mut self) {
        report(self.previous.focus(), "focus previous control");
    }
}

/// Locate the carousel, wire its controls and mount it.
///
/// Returns `Ok(None)` when the page has no usable carousel.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    listeners: &mut Listeners,
) -> Result<Option<Rc<Driver<DomCarousel>>>, WebError> {
    let Some(surface) = DomCarouselSurface::locate(window, document) else {
        tracing::debug!("no carousel on this page");
        return Ok(None);
    };

    let root = surface.root.clone();
    let previous = surface.previous.clone();
    let next = surface.next.clone();
    let pause = surface.pause.clone();
    let indicators = surface.indicators.clone();

    let dispatcher = Dispatcher::<CarouselMessage>::default();
    let scheduler = DomScheduler::new(window.clone(), dispatcher.clone());
    let controller = match CarouselController::new(surface, scheduler, config) {
        Ok(controller) => controller,
        Err(error) => {
            tracing::debug!(%error, "carousel not mounted");
            return Ok(None);
        }
    };

    let driver = Driver::new(controller);
    let weak = Rc::downgrade(&driver);
    dispatcher.bind(move |message| {
        if let Some(driver) = weak.upgrade() {
            driver.send(message);
        }
    });

    on_click(listeners, &previous, &driver, CarouselMessage::Previous)?;
    on_click(listeners, &next, &driver, CarouselMessage::Next)?;
    on_click(listeners, &pause, &driver, CarouselMessage::ToggleAutoPlay)?;
    for (position, indicator) in indicators.iter().enumerate() {
        on_click(
            listeners,
            indicator,
            &driver,
            CarouselMessage::GoTo(position as i64),
        )?;
    }

    let keys = Rc::clone(&driver);
    let pause_target = JsValue::from(pause);
    listeners.listen(&root, "keydown", move |event| {
        let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = Key::from_dom_key(&keyboard.key());
        if key == Key::Other {
            return;
        }
        let on_pause = event
            .target()
            .is_some_and(|target| JsValue::from(target) == pause_target);
        let target = if on_pause {
            CarouselTarget::PauseButton
        } else {
            CarouselTarget::Other
        };
        let outcome = keys.send(CarouselMessage::Key { key, target });
        if outcome.is_some_and(|outcome| outcome.should_prevent_default()) {
            event.prevent_default();
        }
    })?;

    for (event, message) in [
        ("mouseenter", CarouselMessage::PointerEnter),
        ("mouseleave", CarouselMessage::PointerLeave),
    ] {
        let hover = Rc::clone(&driver);
        listeners.listen(&root, event, move |_| {
            hover.send(message.clone());
        })?;
    }

    driver.with(|carousel| carousel.mount());
    Ok(Some(driver))
}

fn on_click(
    listeners: &mut Listeners,
    element: &HtmlElement,
    driver: &Rc<Driver<DomCarousel>>,
    message: CarouselMessage,
) -> Result<(), WebError> {
    let driver = Rc::clone(driver);
    listeners.listen(element, "click", move |_| {
        driver.send(message.clone());
    })
}
