// heartform - form interaction layer for the heart-disease risk form
// Validation, progress steps, tooltips, sample autofill and result sharing
// over any UI toolkit that implements FormSurface

pub mod config;
pub mod controller;
pub mod events;
pub mod headless;
pub mod progress;
pub mod share;
pub mod surface;
pub mod tooltip;

// Re-export framework types
pub use config::FormConfig;
pub use controller::FormController;
pub use events::{EventOutcome, FormEvent, SubmitOutcome};
pub use headless::{Availability, HeadlessForm, HeadlessShare};
pub use progress::{ProgressSteps, StepState};
pub use share::{share_result, ShareError, ShareOutcome, SharePayload, ShareTarget};
pub use surface::{FormSurface, Notification, NotificationKind};
pub use tooltip::TooltipTable;

// Re-export the rules crate
pub use heartform_rules as rules;
pub use heartform_rules::{FieldId, FormRuleValidator, FormValues, SampleProfile, ValidationResult};
