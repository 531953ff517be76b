//! Recording doubles for the page surfaces

use std::collections::BTreeMap;
use std::time::Duration;

use vitrine_contracts::prelude::{CarouselSurface, FormSurface, PauseControl};
use vitrine_model::{
    CampaignChoice, FieldId, FocusTarget, FormValues, Markup, SlideIndex,
};

/// One call made on a [`RecordingCarouselSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum CarouselCall {
    SetSlideVisible(usize, bool),
    SetIndicatorActive(usize, bool),
    SetPauseControl(PauseControl),
    Announce(String),
    FocusPrevious,
}

/// In-memory carousel that mirrors what the page would display.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct RecordingCarouselSurface {
    pub slides: Vec<bool>,
    pub indicators: Vec<bool>,
    pub live_region: bool,
    pub pause_control: Option<PauseControl>,
    pub announcements: Vec<(String, Duration)>,
    pub previous_focus_count: usize,
    pub calls: Vec<CarouselCall>,
}

impl RecordingCarouselSurface {
    /// `slides` slides, as many indicators, and a live region.
    pub fn new(slides: usize) -> Self {
        Self::with_indicators(slides, slides)
    }

    /// Any number of indicators, including a mismatched one.
    pub fn with_indicators(slides: usize, indicators: usize) -> Self {
        Self {
            slides: vec![false; slides],
            indicators: vec![false; indicators],
            live_region: true,
            pause_control: None,
            announcements: Vec::new(),
            previous_focus_count: 0,
            calls: Vec::new(),
        }
    }

    /// Drop the live region, so nothing is announced.
    pub fn without_live_region(mut self) -> Self {
        self.live_region = false;
        self
    }

    /// Positions of the slides currently shown.
    pub fn visible_slides(&self) -> Vec<usize> {
        flagged(&self.slides)
    }

    /// Positions of the indicators currently active.
    pub fn active_indicators(&self) -> Vec<usize> {
        flagged(&self.indicators)
    }
}

fn flagged(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(position, on)| on.then_some(position))
        .collect()
}

impl CarouselSurface for RecordingCarouselSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn supports_announcements(&self) -> bool {
        self.live_region
    }

    fn set_slide_visible(&mut self, index: SlideIndex, visible: bool) {
        if let Some(slot) = self.slides.get_mut(index.get()) {
            *slot = visible;
        }
        self.calls
            .push(CarouselCall::SetSlideVisible(index.get(), visible));
    }

    fn set_indicator_active(&mut self, index: SlideIndex, active: bool) {
        if let Some(slot) = self.indicators.get_mut(index.get()) {
            *slot = active;
        }
        self.calls
            .push(CarouselCall::SetIndicatorActive(index.get(), active));
    }

    fn set_pause_control(&mut self, control: &PauseControl) {
        self.pause_control = Some(control.clone());
        self.calls.push(CarouselCall::SetPauseControl(control.clone()));
    }

    fn announce(&mut self, text: &str, ttl: Duration) {
        self.announcements.push((text.to_string(), ttl));
        self.calls.push(CarouselCall::Announce(text.to_string()));
    }

    fn focus_previous_control(&mut self) {
        self.previous_focus_count += 1;
        self.calls.push(CarouselCall::FocusPrevious);
    }
}

/// One call made on a [`RecordingFormSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FormCall {
    ReportValidity,
    ShowFieldError(FieldId, String),
    ClearFieldError(FieldId),
    ClearAllErrors,
    Focus(FocusTarget),
    ShowReview,
    HideReview,
    ShowSuccess,
    HideSuccess,
    ShowNotification(String),
    ResetFields,
    SetOtherCampaignVisible(bool),
}

/// In-memory contact form.
///
/// `values` holds what the controls currently contain and `defaults` what a
/// reset restores them to. `natively_valid` stands in for the browser's
/// required/format checks and defaults to passing.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct RecordingFormSurface {
    pub values: FormValues,
    pub defaults: FormValues,
    pub natively_valid: bool,
    pub report_validity_count: usize,
    pub field_errors: BTreeMap<FieldId, String>,
    pub review: Option<Markup>,
    pub success_visible: bool,
    pub notifications: Vec<(String, Duration)>,
    pub reset_count: usize,
    pub other_campaign_visible: Option<bool>,
    pub calls: Vec<FormCall>,
}

impl Default for RecordingFormSurface {
    fn default() -> Self {
        Self {
            values: FormValues::default(),
            defaults: FormValues::default(),
            natively_valid: true,
            report_validity_count: 0,
            field_errors: BTreeMap::new(),
            review: None,
            success_visible: false,
            notifications: Vec::new(),
            reset_count: 0,
            other_campaign_visible: None,
            calls: Vec::new(),
        }
    }
}

impl RecordingFormSurface {
    /// A form whose markup ships with `values` already in its controls.
    pub fn prefilled(values: FormValues) -> Self {
        Self {
            defaults: values.clone(),
            values,
            ..Self::default()
        }
    }

    /// Inline error shown next to `field`.
    pub fn field_error(&self, field: FieldId) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    /// Most recent focus move.
    pub fn focused(&self) -> Option<FocusTarget> {
        self.calls.iter().rev().find_map(|call| match call {
            FormCall::Focus(target) => Some(*target),
            _ => None,
        })
    }
}

impl FormSurface for RecordingFormSurface {
    fn field_value(&self, field: FieldId) -> String {
        self.values.get(field).to_string()
    }

    fn selected_campaign(&self) -> Option<CampaignChoice> {
        self.values.campaign.clone()
    }

    fn check_validity(&self) -> bool {
        self.natively_valid
    }

    fn report_validity(&mut self) {
        self.report_validity_count += 1;
        self.calls.push(FormCall::ReportValidity);
    }

    fn show_field_error(&mut self, field: FieldId, message: &str) {
        self.field_errors.insert(field, message.to_string());
        self.calls
            .push(FormCall::ShowFieldError(field, message.to_string()));
    }

    fn clear_field_error(&mut self, field: FieldId) {
        self.field_errors.remove(&field);
        self.calls.push(FormCall::ClearFieldError(field));
    }

    fn clear_all_errors(&mut self) {
        self.field_errors.clear();
        self.calls.push(FormCall::ClearAllErrors);
    }

    fn focus(&mut self, target: FocusTarget) {
        self.calls.push(FormCall::Focus(target));
    }

    fn show_review(&mut self, dialog: &Markup) {
        self.review = Some(dialog.clone());
        self.calls.push(FormCall::ShowReview);
    }

    fn hide_review(&mut self) {
        self.review = None;
        self.calls.push(FormCall::HideReview);
    }

    fn show_success(&mut self) {
        self.success_visible = true;
        self.calls.push(FormCall::ShowSuccess);
    }

    fn hide_success(&mut self) {
        self.success_visible = false;
        self.calls.push(FormCall::HideSuccess);
    }

    fn show_notification(&mut self, text: &str, ttl: Duration) {
        self.notifications.push((text.to_string(), ttl));
        self.calls.push(FormCall::ShowNotification(text.to_string()));
    }

    fn reset_fields(&mut self) {
        self.values = self.defaults.clone();
        self.reset_count += 1;
        self.calls.push(FormCall::ResetFields);
    }

    fn set_other_campaign_visible(&mut self, visible: bool) {
        self.other_campaign_visible = Some(visible);
        self.calls.push(FormCall::SetOtherCampaignVisible(visible));
    }
}
