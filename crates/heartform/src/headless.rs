//! In-memory form surface and share target
//!
//! Records everything the controller does so tests and the CLI can drive
//! the form without a browser.

use std::collections::{BTreeMap, BTreeSet};

use heartform_rules::FieldId;

use crate::progress::ProgressSteps;
use crate::share::{ShareError, SharePayload, ShareTarget};
use crate::surface::{FormSurface, Notification};

/// A form held in memory
#[derive(Debug, Clone, Default)]
pub struct HeadlessForm {
    values: BTreeMap<FieldId, String>,
    errors: BTreeMap<FieldId, String>,
    focused: BTreeSet<FieldId>,
    tooltips: BTreeMap<FieldId, String>,
    highlighted: Vec<FieldId>,
    notifications: Vec<Notification>,
    progress: Option<ProgressSteps>,
    scrolled_to: Option<FieldId>,
    processing: bool,
}

impl HeadlessForm {
    /// Empty form with the given inputs on the page
    pub fn with_fields(fields: impl IntoIterator<Item = FieldId>) -> Self {
        Self {
            values: fields.into_iter().map(|field| (field, String::new())).collect(),
            ..Self::default()
        }
    }

    /// Empty form with all thirteen inputs
    pub fn standard() -> Self {
        Self::with_fields(FieldId::ALL)
    }

    /// Sets a value the way a user typing would, without firing events
    pub fn type_value(&mut self, field: FieldId, value: &str) {
        if let Some(slot) = self.values.get_mut(&field) {
            *slot = value.to_string();
        }
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<FieldId, String> {
        &self.errors
    }

    pub fn is_focused(&self, field: FieldId) -> bool {
        self.focused.contains(&field)
    }

    pub fn tooltip(&self, field: FieldId) -> Option<&str> {
        self.tooltips.get(&field).map(String::as_str)
    }

    pub fn highlighted(&self) -> &[FieldId] {
        &self.highlighted
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn progress(&self) -> Option<&ProgressSteps> {
        self.progress.as_ref()
    }

    pub fn scrolled_to(&self) -> Option<FieldId> {
        self.scrolled_to
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }
}

impl FormSurface for HeadlessForm {
    fn field_value(&self, field: FieldId) -> Option<String> {
        self.values.get(&field).cloned()
    }

    fn set_field_value(&mut self, field: FieldId, value: &str) {
        self.type_value(field, value);
    }

    fn show_field_error(&mut self, field: FieldId, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn clear_field_error(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    fn scroll_to_first_error(&mut self) {
        self.scrolled_to = self.errors.keys().next().copied();
    }

    fn set_field_focused(&mut self, field: FieldId, focused: bool) {
        if focused {
            self.focused.insert(field);
        } else {
            self.focused.remove(&field);
        }
    }

    fn attach_tooltip(&mut self, field: FieldId, text: &str) {
        self.tooltips.insert(field, text.to_string());
    }

    fn render_progress(&mut self, steps: &ProgressSteps) {
        self.progress = Some(steps.clone());
    }

    fn set_processing(&mut self, visible: bool) {
        self.processing = visible;
    }

    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }

    fn highlight_autofill(&mut self, field: FieldId) {
        self.highlighted.push(field);
    }
}

/// Whether a share mechanism exists and how it behaves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Missing,
    Works,
    Fails(String),
}

impl Availability {
    fn exists(&self) -> bool {
        !matches!(self, Availability::Missing)
    }

    fn attempt(&self) -> Result<(), ShareError> {
        match self {
            Availability::Missing => Err(ShareError::Unavailable),
            Availability::Works => Ok(()),
            Availability::Fails(reason) => Err(ShareError::Rejected(reason.clone())),
        }
    }
}

/// Share target with scripted availability
#[derive(Debug, Clone, Default)]
pub struct HeadlessShare {
    pub native: Availability,
    pub clipboard: Availability,
    pub shared: Vec<SharePayload>,
    pub clipboard_text: Option<String>,
    pub prompted: Option<String>,
}

impl HeadlessShare {
    pub fn new(native: Availability, clipboard: Availability) -> Self {
        Self {
            native,
            clipboard,
            ..Self::default()
        }
    }
}

impl ShareTarget for HeadlessShare {
    fn can_share(&self) -> bool {
        self.native.exists()
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        self.native.attempt()?;
        self.shared.push(payload.clone());
        Ok(())
    }

    fn can_copy(&self) -> bool {
        self.clipboard.exists()
    }

    fn copy_text(&mut self, text: &str) -> Result<(), ShareError> {
        self.clipboard.attempt()?;
        self.clipboard_text = Some(text.to_string());
        Ok(())
    }

    fn prompt_copy(&mut self, _message: &str, text: &str) {
        self.prompted = Some(text.to_string());
    }
}
