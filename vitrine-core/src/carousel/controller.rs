//! Carousel controller
//!
//! Owns the active slide and the autoplay timer. All input arrives as
//! [`CarouselMessage`]s through [`CarouselController::update`].
//!
//! Two invariants hold after every call:
//! - exactly one slide is visible and exactly one indicator is active, both
//!   at `current`;
//! - at most one autoplay timer is live. Starting always clears the previous
//!   handle first.

use vitrine_config::{CarouselConfig, CopyConfig, PageConfig};
use vitrine_contracts::prelude::{
    CarouselSurface, PauseControl, Scheduler, TimerHandle,
};
use vitrine_model::{CarouselTarget, Key, ModelError, SlideCount, SlideIndex};

use super::messages::CarouselMessage;
use crate::outcome::EventOutcome;

/// State machine behind the slide carousel.
#[derive(Debug)]
pub struct CarouselController<S, T> {
    surface: S,
    scheduler: T,
    settings: CarouselConfig,
    copy: CopyConfig,
    count: SlideCount,
    current: SlideIndex,
    /// User-selected mode. Hover suspends the timer without touching this.
    autoplay_enabled: bool,
    /// Pointer is over the carousel; autoplay stays suspended.
    hovered: bool,
    timer: Option<TimerHandle>,
}

impl<S, T> CarouselController<S, T>
where
    S: CarouselSurface,
    T: Scheduler<CarouselMessage>,
{
    /// Build a controller over an existing set of slides.
    ///
    /// Fails when the surface has no slides, or when it has indicators that
    /// do not pair one-to-one with the slides. A surface without indicators
    /// is accepted.
    pub fn new(
        surface: S,
        scheduler: T,
        config: &PageConfig,
    ) -> Result<Self, ModelError> {
        let count = SlideCount::new(surface.slide_count())?;
        let indicators = surface.indicator_count();
        if indicators != 0 && indicators != count.get() {
            return Err(ModelError::IndicatorMismatch {
                slides: count.get(),
                indicators,
            });
        }

        Ok(Self {
            surface,
            scheduler,
            settings: config.carousel.clone(),
            copy: config.copy.clone(),
            count,
            current: SlideIndex::FIRST,
            autoplay_enabled: config.carousel.autoplay_on_mount,
            hovered: false,
            timer: None,
        })
    }

    /// First render: show slide 0, put focus on the previous-slide control
    /// and start autoplay if enabled. Nothing is announced.
    pub fn mount(&mut self) {
        self.render();
        self.surface.focus_previous_control();
        self.sync_pause_control();
        if self.autoplay_enabled {
            self.start_autoplay();
        }
        tracing::info!(
            slides = self.count.get(),
            autoplay = self.autoplay_enabled,
            "carousel mounted"
        );
    }

    /// Single entry point for every carousel command.
    pub fn update(&mut self, message: CarouselMessage) -> EventOutcome {
        tracing::trace!(?message, "carousel update");
        match message {
            CarouselMessage::Next => {
                self.next_slide();
                EventOutcome::Handled
            }
            CarouselMessage::Previous => {
                self.previous_slide();
                EventOutcome::Handled
            }
            CarouselMessage::GoTo(position) => {
                self.go_to_slide(position);
                EventOutcome::Handled
            }
            CarouselMessage::ToggleAutoPlay => {
                self.toggle_autoplay();
                EventOutcome::Handled
            }
            CarouselMessage::StartAutoPlay => {
                self.start_autoplay();
                EventOutcome::Handled
            }
            CarouselMessage::PauseAutoPlay => {
                self.pause_autoplay();
                EventOutcome::Handled
            }
            CarouselMessage::Tick => self.on_tick(),
            CarouselMessage::Key { key, target } => self.on_key(key, target),
            CarouselMessage::PointerEnter => {
                self.hovered = true;
                if self.autoplay_enabled {
                    self.pause_autoplay();
                }
                EventOutcome::Handled
            }
            CarouselMessage::PointerLeave => {
                self.hovered = false;
                // Re-read the flag: a pause clicked while hovering must stick.
                if self.autoplay_enabled {
                    self.start_autoplay();
                }
                EventOutcome::Handled
            }
        }
    }

    /// Show the slide at `position`, wrapped into range, and announce it.
    pub fn go_to_slide(&mut self, position: i64) {
        self.show(SlideIndex::wrap(position, self.count));
    }

    /// Show the following slide, wrapping after the last.
    pub fn next_slide(&mut self) {
        self.show(self.current.next(self.count));
    }

    /// Show the preceding slide, wrapping before the first.
    pub fn previous_slide(&mut self) {
        self.show(self.current.previous(self.count));
    }

    /// Flip the user-selected autoplay mode and start or stop the timer to
    /// match.
    pub fn toggle_autoplay(&mut self) {
        self.autoplay_enabled = !self.autoplay_enabled;
        self.sync_pause_control();
        if self.autoplay_enabled {
            self.start_autoplay();
        } else {
            self.pause_autoplay();
        }
        tracing::debug!(enabled = self.autoplay_enabled, "autoplay toggled");
    }

    /// (Re)start the autoplay timer. Never leaves two timers running.
    pub fn start_autoplay(&mut self) {
        if let Some(previous) = self.timer.take() {
            self.scheduler.clear(previous);
        }
        self.timer = Some(self.scheduler.set_interval(
            self.settings.autoplay_interval(),
            CarouselMessage::Tick,
        ));
    }

    /// Stop the autoplay timer if one is running.
    pub fn pause_autoplay(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.clear(handle);
        }
    }

    /// Cancel any live timer. The controller stays usable; autoplay resumes
    /// on the next start or toggle.
    pub fn shutdown(&mut self) {
        self.pause_autoplay();
    }

    /// Restart autoplay after [`shutdown`](CarouselController::shutdown),
    /// unless the user paused it or the pointer is still over the carousel.
    pub fn resume(&mut self) {
        if self.autoplay_enabled && !self.hovered && !self.is_playing() {
            self.start_autoplay();
            tracing::debug!("autoplay resumed");
        }
    }

    /// The slide on display.
    pub fn current_index(&self) -> SlideIndex {
        self.current
    }

    /// Number of slides, fixed at construction.
    pub fn slide_count(&self) -> SlideCount {
        self.count
    }

    /// The user-selected autoplay mode.
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// Whether the pointer is over the carousel.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a timer is live right now (false while hover-suspended).
    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// The page surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The page surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The timer scheduler.
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// The timer scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    fn on_tick(&mut self) -> EventOutcome {
        if self.timer.is_none() {
            tracing::warn!("autoplay tick without a live timer; ignoring");
            return EventOutcome::Ignored;
        }
        self.next_slide();
        EventOutcome::Handled
    }

    fn on_key(&mut self, key: Key, target: CarouselTarget) -> EventOutcome {
        match key {
            Key::ArrowLeft => {
                self.previous_slide();
                EventOutcome::PreventDefault
            }
            Key::ArrowRight => {
                self.next_slide();
                EventOutcome::PreventDefault
            }
            Key::Space | Key::Enter => {
                // The pause control turns this key into a click of its own.
                if target == CarouselTarget::PauseButton {
                    return EventOutcome::Ignored;
                }
                self.toggle_autoplay();
                EventOutcome::PreventDefault
            }
            Key::Other => EventOutcome::Ignored,
        }
    }

    fn show(&mut self, index: SlideIndex) {
        self.current = index;
        self.render();
        self.announce();
        tracing::debug!(
            index = index.get(),
            total = self.count.get(),
            "carousel moved"
        );
    }

    fn render(&mut self) {
        let indicators = self.surface.indicator_count();
        for position in 0..self.count.get() {
            let index = SlideIndex::wrap(position as i64, self.count);
            let active = index == self.current;
            self.surface.set_slide_visible(index, active);
            if indicators != 0 {
                self.surface.set_indicator_active(index, active);
            }
        }
    }

    fn announce(&mut self) {
        if !self.surface.supports_announcements() {
            return;
        }
        let text = self
            .copy
            .slide_announcement(self.current.ordinal(), self.count.get());
        self.surface.announce(&text, self.settings.announcement_ttl());
    }

    fn sync_pause_control(&mut self) {
        let control = if self.autoplay_enabled {
            PauseControl {
                pressed: false,
                label: self.copy.pause_label.clone(),
                title: self.copy.pause_title.clone(),
            }
        } else {
            PauseControl {
                pressed: true,
                label: self.copy.resume_label.clone(),
                title: self.copy.resume_title.clone(),
            }
        };
        self.surface.set_pause_control(&control);
    }
}
