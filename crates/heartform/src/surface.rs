// File: src/surface.rs
// Purpose: The UI operations the form controller needs from a toolkit

use heartform_rules::FieldId;
use serde::Serialize;

use crate::progress::ProgressSteps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// Transient message shown in a corner of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// A rendered form the controller can read and decorate
///
/// Implemented by the browser DOM binding and by [`crate::HeadlessForm`].
/// Methods are infallible: a field missing from the page is skipped, as
/// the page does for an absent element.
pub trait FormSurface {
    /// Current raw value, `None` if the field is not on the page
    fn field_value(&self, field: FieldId) -> Option<String>;

    fn set_field_value(&mut self, field: FieldId, value: &str);

    /// Marks the field invalid and shows `message` next to it
    fn show_field_error(&mut self, field: FieldId, message: &str);

    fn clear_field_error(&mut self, field: FieldId);

    /// Brings the first visible error message into view
    fn scroll_to_first_error(&mut self);

    fn set_field_focused(&mut self, field: FieldId, focused: bool);

    fn attach_tooltip(&mut self, field: FieldId, text: &str);

    fn render_progress(&mut self, steps: &ProgressSteps);

    /// Shows or hides the blocking "processing" overlay
    fn set_processing(&mut self, visible: bool);

    fn notify(&mut self, notification: &Notification);

    /// Brief highlight after a value was filled in programmatically
    fn highlight_autofill(&mut self, field: FieldId);
}
