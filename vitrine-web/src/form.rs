//! Contact form surface over the page markup and its event wiring.

use std::rc::Rc;
use std::time::Duration;

use vitrine_config::PageConfig;
use vitrine_contracts::prelude::{FormSurface, SystemClock};
use vitrine_core::{FormController, FormMessage, LogSubmissionSink};
use vitrine_model::{CampaignChoice, FieldId, FocusTarget, Markup};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, Window,
};

use crate::dom::{self, Listeners, report};
use crate::driver::Driver;
use crate::error::WebError;
use crate::scheduler::{Dispatcher, DomScheduler};

const FORM_ID: &str = "contact-form";
const SUBMIT: &str = r#"button[type="submit"]"#;
const CAMPAIGN_RADIOS: &str = r#"input[name="campagne"]"#;
const OTHER_CAMPAIGN_GROUP_ID: &str = "autre-campagne-group";
const SUCCESS_ID: &str = "successModal";
const SUCCESS_CLOSE_ID: &str = "modal-close-btn";

const REVIEW_CLASS: &str = "modal review-dialog";
const REVIEW_SELECTOR: &str = ".review-dialog";

const FIELD_GROUP: &str = ".form-group";
const ERROR_MESSAGE: &str = ".error-message";

/// The contact form controller as mounted on the page.
pub type DomForm = FormController<
    DomFormSurface,
    DomScheduler<FormMessage>,
    LogSubmissionSink,
    SystemClock,
>;

/// [`FormSurface`] over the contact form markup.
#[derive(Debug)]
pub struct DomFormSurface {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    submit: Option<HtmlElement>,
    other_campaign_group: Option<HtmlElement>,
    success: Option<HtmlElement>,
    success_close: Option<HtmlElement>,
    review: Option<Element>,
}

impl DomFormSurface {
    /// Find the contact form. `None` when `#contact-form` is missing.
    pub fn locate(window: &Window, document: &Document) -> Option<Self> {
        let form = dom::by_id::<HtmlFormElement>(document, FORM_ID)?;
        let success = dom::by_id::<HtmlElement>(document, SUCCESS_ID);
        let success_close = success
            .as_ref()
            .and_then(|modal| modal.query_selector(".modal-close").ok().flatten())
            .and_then(|close| close.dyn_into::<HtmlElement>().ok())
            .or_else(|| dom::by_id(document, SUCCESS_CLOSE_ID));

        Some(Self {
            window: window.clone(),
            document: document.clone(),
            submit: form
                .query_selector(SUBMIT)
                .ok()
                .flatten()
                .and_then(|button| button.dyn_into().ok()),
            other_campaign_group: dom::by_id(document, OTHER_CAMPAIGN_GROUP_ID),
            success,
            success_close,
            review: None,
            form,
        })
    }

    fn field(&self, field: FieldId) -> Option<HtmlElement> {
        dom::by_id(&self.document, field.dom_id())
    }

    /// The field and its enclosing `.form-group`, when both exist.
    fn field_and_group(&self, field: FieldId) -> Option<(HtmlElement, Element)> {
        let input = self.field(field)?;
        let group = input.closest(FIELD_GROUP).ok().flatten()?;
        Some((input, group))
    }
}

impl FormSurface for DomFormSurface {
    fn field_value(&self, field: FieldId) -> String {
        self.field(field)
            .and_then(|element| control_value(&element))
            .unwrap_or_default()
    }

    fn selected_campaign(&self) -> Option<CampaignChoice> {
        let checked = self
            .form
            .query_selector(&format!("{CAMPAIGN_RADIOS}:checked"))
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        Some(CampaignChoice::from_radio_value(&checked.value()))
    }

    fn check_validity(&self) -> bool {
        self.form.check_validity()
    }

    fn report_validity(&mut self) {
        self.form.report_validity();
    }

    fn show_field_error(&mut self, field: FieldId, message: &str) {
        let Some((input, group)) = self.field_and_group(field) else {
            return;
        };

        let existing = group.query_selector(ERROR_MESSAGE).ok().flatten();
        let error = match existing {
            Some(error) => error,
            None => {
                let Ok(error) = self.document.create_element("span") else {
                    return;
                };
                error.set_class_name("error-message");
                report(error.set_attribute("role", "alert"), "set error role");
                report(group.append_child(&error), "append field error");
                error
            }
        };
        error.set_text_content(Some(message));

        report(input.class_list().add_1("error"), "mark field invalid");
        report(group.class_list().add_1("has-error"), "mark group invalid");
    }

    fn clear_field_error(&mut self, field: FieldId) {
        let Some((input, group)) = self.field_and_group(field) else {
            return;
        };
        if let Ok(Some(error)) = group.query_selector(ERROR_MESSAGE) {
            error.remove();
        }
        report(input.class_list().remove_1("error"), "unmark field");
        report(group.class_list().remove_1("has-error"), "unmark group");
    }

    fn clear_all_errors(&mut self) {
        if let Ok(marked) = self.form.query_selector_all(".error, .has-error") {
            for position in 0..marked.length() {
                if let Some(element) =
                    marked.get(position).and_then(|node| node.dyn_into::<Element>().ok())
                {
                    report(
                        element.class_list().remove_2("error", "has-error"),
                        "unmark element",
                    );
                }
            }
        }
        if let Ok(messages) = self.form.query_selector_all(ERROR_MESSAGE) {
            for position in 0..messages.length() {
                if let Some(element) =
                    messages.get(position).and_then(|node| node.dyn_into::<Element>().ok())
                {
                    element.remove();
                }
            }
        }
    }

    fn focus(&mut self, target: FocusTarget) {
        let element = match target {
            FocusTarget::Field(field) => self.field(field),
            FocusTarget::SubmitButton => self.submit.clone(),
            FocusTarget::SuccessClose => self.success_close.clone(),
            FocusTarget::ReviewCancel => self
                .review
                .as_ref()
                .and_then(|review| review.query_selector("#cancel-btn").ok().flatten())
                .and_then(|button| button.dyn_into::<HtmlElement>().ok()),
        };
        if let Some(element) = element {
            report(element.focus(), "move focus");
        }
    }

    fn show_review(&mut self, dialog: &Markup) {
        self.hide_review();
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(root) = self.document.create_element("div") else {
            return;
        };
        root.set_class_name(REVIEW_CLASS);
        report(root.set_attribute("role", "dialog"), "set dialog role");
        report(root.set_attribute("aria-modal", "true"), "set aria-modal");
        report(
            root.set_attribute("aria-labelledby", "confirm-title"),
            "set dialog label",
        );
        root.set_inner_html(dialog.as_str());
        report(body.append_child(&root), "append review dialog");
        self.review = Some(root);
    }

    fn hide_review(&mut self) {
        if let Some(review) = self.review.take() {
            review.remove();
        }
    }

    fn show_success(&mut self) {
        if let Some(success) = &self.success {
            success.set_hidden(false);
        }
    }

    fn hide_success(&mut self) {
        if let Some(success) = &self.success {
            success.set_hidden(true);
        }
    }

    fn show_notification(&mut self, text: &str, ttl: Duration) {
        let Some(body) = self.document.body() else {
            return;
        };
        match dom::status_element(&self.document, Some("notification success"), text) {
            Ok(notification) => {
                report(body.append_child(&notification), "append notification");
                dom::remove_after(&self.window, notification.into(), ttl);
            }
            Err(error) => tracing::warn!(%error, "could not create notification"),
        }
    }

    fn reset_fields(&mut self) {
        self.form.reset();
    }

    fn set_other_campaign_visible(&mut self, visible: bool) {
        if let Some(group) = &self.other_campaign_group {
            group.set_hidden(!visible);
        }
    }
}

/// Current value of a text input or textarea.
fn control_value(target: &EventTarget) -> Option<String> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

/// Locate the contact form, wire its fields and dialogs.
///
/// Returns `Ok(None)` when the page has no contact form.
pub fn mount(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    listeners: &mut Listeners,
) -> Result<Option<Rc<Driver<DomForm>>>, WebError> {
    let Some(surface) = DomFormSurface::locate(window, document) else {
        tracing::debug!("no contact form on this page");
        return Ok(None);
    };
    let form = surface.form.clone();

    let dispatcher = Dispatcher::<FormMessage>::default();
    let scheduler = DomScheduler::new(window.clone(), dispatcher.clone());
    let driver = Driver::new(FormController::new(
        surface,
        scheduler,
        LogSubmissionSink,
        SystemClock,
        config,
    ));
    let weak = Rc::downgrade(&driver);
    dispatcher.bind(move |message| {
        if let Some(driver) = weak.upgrade() {
            driver.send(message);
        }
    });

    for field in FieldId::ALL {
        let Some(element) = dom::by_id::<HtmlElement>(document, field.dom_id()) else {
            continue;
        };

        let input = Rc::clone(&driver);
        listeners.listen(&element, "input", move |event| {
            if let Some(value) = event.target().as_ref().and_then(control_value) {
                input.send(FormMessage::FieldInput { field, value });
            }
        })?;

        if field == FieldId::BirthDate {
            let change = Rc::clone(&driver);
            listeners.listen(&element, "change", move |event| {
                if let Some(value) = event.target().as_ref().and_then(control_value) {
                    change.send(FormMessage::FieldCommitted { field, value });
                }
            })?;
        }

        if field.is_validated() {
            let blur = Rc::clone(&driver);
            listeners.listen(&element, "blur", move |_| {
                blur.send(FormMessage::FieldBlur(field));
            })?;
        }
    }

    for radio in dom::select_all::<HtmlInputElement>(document, CAMPAIGN_RADIOS) {
        let campaign = Rc::clone(&driver);
        let source = radio.clone();
        listeners.listen(&radio, "change", move |_| {
            if source.checked() {
                campaign.send(FormMessage::CampaignSelected(
                    CampaignChoice::from_radio_value(&source.value()),
                ));
            }
        })?;
    }

    let submit = Rc::clone(&driver);
    listeners.listen(&form, "submit", move |event| {
        let outcome = submit.send(FormMessage::Submit);
        // The page never submits natively, even when the message was queued.
        if outcome.is_none_or(|outcome| outcome.should_prevent_default()) {
            event.prevent_default();
        }
    })?;

    // The review dialog is created on demand, so its buttons are handled by
    // delegation from the document.
    let clicks = Rc::clone(&driver);
    listeners.listen(document, "click", move |event| {
        let Some(element) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        if let Some(message) = dialog_message(&element) {
            clicks.send(message);
        }
    })?;

    tracing::debug!(listeners = listeners.len(), "contact form wired");
    Ok(Some(driver))
}

fn dialog_message(element: &Element) -> Option<FormMessage> {
    let matches = |selector: &str| {
        element
            .closest(selector)
            .ok()
            .flatten()
            .is_some()
    };

    if matches(&format!("{REVIEW_SELECTOR} #confirm-btn")) {
        Some(FormMessage::Confirm)
    } else if matches(&format!("{REVIEW_SELECTOR} #cancel-btn"))
        || matches(&format!("{REVIEW_SELECTOR} .modal-close"))
    {
        Some(FormMessage::Cancel)
    } else if matches(&format!("#{SUCCESS_CLOSE_ID}"))
        || matches(&format!("#{SUCCESS_ID} .modal-close"))
    {
        Some(FormMessage::CloseSuccess)
    } else {
        None
    }
}
