//! Browser DOM implementations of the form surface and share target
//!
//! Visual styling is left to the page's CSS: the surface only toggles the
//! classes `invalid`, `focused`, `autofilled`, `show`, `active` and
//! `completed`, and creates `.error-text`, `.tooltip`, `.progress-steps`,
//! `.loading-overlay` and `.notification` elements.

use heartform::config::TimingConfig;
use heartform::{
    FormSurface, Notification, NotificationKind, ProgressSteps, ShareError, SharePayload, ShareTarget, StepState,
};
use heartform_rules::FieldId;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, Window};

const AUTOFILL_HIGHLIGHT_MS: i32 = 300;
const LOADING_TEXT: &str = "Menganalisis data kesehatan...";

fn warn(context: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(context), err);
}

/// Runs `callback` once after `ms` milliseconds
pub(crate) fn after(window: &Window, ms: i32, callback: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(callback);
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms) {
        warn("setTimeout failed", &err);
    }
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// Appends a notification to `<body>` and removes it after `duration_ms`
fn show_notification(window: &Window, document: &Document, notification: &Notification, duration_ms: i32) {
    let kind = match notification.kind {
        NotificationKind::Info => "info",
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    };
    let Some(body) = document.body() else {
        return;
    };
    let node = match create(document, "div", &format!("notification notification-{kind}")) {
        Ok(node) => node,
        Err(err) => return warn("could not create notification", &err),
    };
    node.set_text_content(Some(&notification.message));
    if let Err(err) = body.append_child(&node) {
        return warn("could not show notification", &err);
    }
    after(window, duration_ms, move || node.remove());
}

fn read_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else {
        element.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
    }
}

fn write_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    }
}

/// The `<form>` element on the page
pub struct DomForm {
    window: Window,
    document: Document,
    form: Element,
    progress: Option<Element>,
    overlay: Option<Element>,
    notification_duration_ms: i32,
}

impl DomForm {
    pub fn attach(form_id: &str, timing: &TimingConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let form = document
            .get_element_by_id(form_id)
            .ok_or_else(|| JsValue::from_str(&format!("form #{form_id} not found")))?;

        Ok(Self {
            window,
            document,
            form,
            progress: None,
            overlay: None,
            notification_duration_ms: i32::try_from(timing.notification_duration_ms).unwrap_or(i32::MAX),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn field(&self, field: FieldId) -> Option<Element> {
        self.form
            .query_selector(&format!("[name=\"{}\"]", field.as_str()))
            .ok()
            .flatten()
    }

    /// The wrapper around a field, where messages and tooltips go
    fn group(&self, field: FieldId) -> Option<Element> {
        self.field(field).and_then(|element| element.parent_element())
    }

    fn progress_container(&mut self, step_count: usize) -> Result<Element, JsValue> {
        if let Some(container) = &self.progress {
            return Ok(container.clone());
        }
        let container = create(&self.document, "div", "progress-steps")?;
        for number in 1..=step_count {
            let step = create(&self.document, "div", "step")?;
            step.set_text_content(Some(&number.to_string()));
            container.append_child(&step)?;
        }
        self.form.insert_before(&container, self.form.first_child().as_ref())?;
        self.progress = Some(container.clone());
        Ok(container)
    }

    fn loading_overlay(&mut self) -> Result<Element, JsValue> {
        if let Some(overlay) = &self.overlay {
            return Ok(overlay.clone());
        }
        let overlay = create(&self.document, "div", "loading-overlay")?;
        overlay.set_inner_html(&format!(
            r#"<div class="loading-content"><div class="loading-spinner"></div><div class="loading-text">{LOADING_TEXT}</div></div>"#
        ));
        if let Some(body) = self.document.body() {
            body.append_child(&overlay)?;
        }
        self.overlay = Some(overlay.clone());
        Ok(overlay)
    }
}

impl FormSurface for DomForm {
    fn field_value(&self, field: FieldId) -> Option<String> {
        self.field(field).as_ref().and_then(read_value)
    }

    fn set_field_value(&mut self, field: FieldId, value: &str) {
        if let Some(element) = self.field(field) {
            write_value(&element, value);
        }
    }

    fn show_field_error(&mut self, field: FieldId, message: &str) {
        self.clear_field_error(field);
        let (Some(element), Some(group)) = (self.field(field), self.group(field)) else {
            return;
        };
        let _ = element.class_list().add_1("invalid");
        let result = create(&self.document, "div", "error-text").and_then(|error| {
            error.set_text_content(Some(message));
            group.append_child(&error).map(|_| ())
        });
        if let Err(err) = result {
            warn("could not show field error", &err);
        }
    }

    fn clear_field_error(&mut self, field: FieldId) {
        if let Some(element) = self.field(field) {
            let _ = element.class_list().remove_1("invalid");
        }
        if let Some(existing) = self
            .group(field)
            .and_then(|group| group.query_selector(".error-text").ok().flatten())
        {
            existing.remove();
        }
    }

    fn scroll_to_first_error(&mut self) {
        if let Ok(Some(first)) = self.form.query_selector(".error-text") {
            first.scroll_into_view();
        }
    }

    fn set_field_focused(&mut self, field: FieldId, focused: bool) {
        if let Some(group) = self.group(field) {
            let classes = group.class_list();
            let _ = if focused {
                classes.add_1("focused")
            } else {
                classes.remove_1("focused")
            };
        }
    }

    fn attach_tooltip(&mut self, field: FieldId, text: &str) {
        let Some(group) = self.group(field) else {
            return;
        };
        if matches!(group.query_selector(".tooltip"), Ok(Some(_))) {
            return;
        }
        let result = create(&self.document, "div", "tooltip").and_then(|tooltip| {
            tooltip.set_text_content(Some(text));
            group.append_child(&tooltip)?;
            group.class_list().add_1("has-tooltip")
        });
        if let Err(err) = result {
            warn("could not attach tooltip", &err);
        }
    }

    fn render_progress(&mut self, steps: &ProgressSteps) {
        let container = match self.progress_container(steps.step_count()) {
            Ok(container) => container,
            Err(err) => return warn("could not create progress steps", &err),
        };
        let children = container.children();
        for index in 0..children.length() {
            let Some(step) = children.item(index) else {
                continue;
            };
            let classes = step.class_list();
            let _ = classes.remove_2("active", "completed");
            let _ = match steps.state(index as usize) {
                StepState::Completed => classes.add_1("completed"),
                StepState::Active => classes.add_1("active"),
                StepState::Pending => Ok(()),
            };
        }
    }

    fn set_processing(&mut self, visible: bool) {
        let overlay = match self.loading_overlay() {
            Ok(overlay) => overlay,
            Err(err) => return warn("could not create loading overlay", &err),
        };
        let classes = overlay.class_list();
        let _ = if visible { classes.add_1("show") } else { classes.remove_1("show") };
    }

    fn notify(&mut self, notification: &Notification) {
        show_notification(&self.window, &self.document, notification, self.notification_duration_ms);
    }

    fn highlight_autofill(&mut self, field: FieldId) {
        let Some(element) = self.field(field) else {
            return;
        };
        let _ = element.class_list().add_1("autofilled");
        after(&self.window, AUTOFILL_HIGHLIGHT_MS, move || {
            let _ = element.class_list().remove_1("autofilled");
        });
    }
}

#[derive(Serialize)]
struct ShareData<'a> {
    title: &'a str,
    text: &'a str,
    url: &'a str,
}

/// `navigator.share`, `navigator.clipboard` and `window.prompt`
pub struct DomShare {
    window: Window,
    notification_duration_ms: i32,
}

impl DomShare {
    pub fn new(window: Window, timing: &TimingConfig) -> Self {
        Self {
            window,
            notification_duration_ms: i32::try_from(timing.notification_duration_ms).unwrap_or(i32::MAX),
        }
    }

    fn clipboard(&self) -> Option<JsValue> {
        js_sys::Reflect::get(&self.window.navigator(), &JsValue::from_str("clipboard"))
            .ok()
            .filter(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
    }
}

fn method(owner: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(owner, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn rejected(err: JsValue) -> ShareError {
    ShareError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Attaches `on_rejected` to a returned promise
fn on_rejection(returned: JsValue, on_rejected: impl FnMut(JsValue) + 'static) {
    let Ok(promise) = returned.dyn_into::<js_sys::Promise>() else {
        return;
    };
    let handler = Closure::<dyn FnMut(JsValue)>::new(on_rejected);
    let _ = promise.catch(&handler);
    handler.forget();
}

impl ShareTarget for DomShare {
    fn can_share(&self) -> bool {
        method(&self.window.navigator(), "share").is_some()
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        let navigator = self.window.navigator();
        let share = method(&navigator, "share").ok_or(ShareError::Unavailable)?;
        let data = serde_wasm_bindgen::to_value(&ShareData {
            title: &payload.title,
            text: &payload.text,
            url: &payload.url,
        })
        .map_err(|err| ShareError::Rejected(err.to_string()))?;

        let returned = share.call1(&navigator, &data).map_err(rejected)?;
        // Dismissing the share sheet rejects the promise; that is only logged
        on_rejection(returned, |err| warn("Error sharing:", &err));
        Ok(())
    }

    fn can_copy(&self) -> bool {
        self.clipboard()
            .is_some_and(|clipboard| method(&clipboard, "writeText").is_some())
    }

    /// Reports success once the clipboard accepts the write; a later
    /// rejection adds the failure notice
    fn copy_text(&mut self, text: &str) -> Result<(), ShareError> {
        let clipboard = self.clipboard().ok_or(ShareError::Unavailable)?;
        let write = method(&clipboard, "writeText").ok_or(ShareError::Unavailable)?;
        let returned = write.call1(&clipboard, &JsValue::from_str(text)).map_err(rejected)?;

        let window = self.window.clone();
        let duration = self.notification_duration_ms;
        on_rejection(returned, move |err| {
            warn("clipboard write failed", &err);
            if let Some(document) = window.document() {
                let notice = Notification::error(heartform::share::COPY_FAILED_MESSAGE);
                show_notification(&window, &document, &notice, duration);
            }
        });
        Ok(())
    }

    fn prompt_copy(&mut self, message: &str, text: &str) {
        if let Err(err) = self.window.prompt_with_message_and_default(message, text) {
            warn("prompt failed", &err);
        }
    }
}
