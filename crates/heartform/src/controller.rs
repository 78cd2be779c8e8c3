// File: src/controller.rs
// Purpose: Event handlers wiring the rule validator to a form surface

use heartform_rules::{FieldId, FormReport, FormRuleValidator, FormValues, SampleProfile, ValidationResult};
use tracing::{debug, info};

use crate::config::FormConfig;
use crate::events::{EventOutcome, FormEvent, SubmitOutcome};
use crate::progress::ProgressSteps;
use crate::share::{share_result, ShareOutcome, SharePayload, ShareTarget};
use crate::surface::{FormSurface, Notification};
use crate::tooltip::TooltipTable;

/// Drives one form: validation on blur and submit, progress, autofill, share
///
/// Each handler runs to completion within a single UI event. Timed effects
/// (the processing overlay, notification lifetime) are left to the host,
/// which reads the delays from [`FormConfig::timing`].
pub struct FormController<S> {
    surface: S,
    validator: FormRuleValidator,
    tooltips: TooltipTable,
    config: FormConfig,
    processing: bool,
}

impl<S: FormSurface> FormController<S> {
    pub fn new(surface: S, validator: FormRuleValidator, tooltips: TooltipTable, config: FormConfig) -> Self {
        Self {
            surface,
            validator,
            tooltips,
            config,
            processing: false,
        }
    }

    /// Controller with the standard rule and tooltip tables
    pub fn with_config(surface: S, config: FormConfig) -> Self {
        Self::new(surface, FormRuleValidator::standard(), TooltipTable::standard(), config)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn validator(&self) -> &FormRuleValidator {
        &self.validator
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Sample profiles to list in the autofill menu
    pub fn offered_samples(&self) -> &[SampleProfile] {
        &self.config.samples.offered
    }

    /// Attaches tooltips and draws the initial progress
    pub fn mount(&mut self) -> ProgressSteps {
        for (field, text) in self.tooltips.iter() {
            if self.surface.field_value(field).is_some() {
                self.surface.attach_tooltip(field, text);
            }
        }
        self.update_progress()
    }

    /// Snapshot of every ruled field currently on the page
    pub fn values(&self) -> FormValues {
        self.validator
            .table()
            .iter()
            .filter_map(|rule| self.surface.field_value(rule.field).map(|value| (rule.field, value)))
            .collect()
    }

    /// Validates one field and shows or clears its inline error
    pub fn validate_field(&mut self, field: FieldId) -> ValidationResult {
        let raw = self.surface.field_value(field).unwrap_or_default();
        let result = self.validator.validate(field, &raw);
        match result.message.as_deref() {
            Some(message) if !result.valid => self.surface.show_field_error(field, message),
            _ => self.surface.clear_field_error(field),
        }
        result
    }

    /// Whether the page carries an input for `field`
    fn on_page(&self, field: FieldId) -> bool {
        self.surface.field_value(field).is_some()
    }

    /// Progress over the required fields present on the page
    pub fn update_progress(&mut self) -> ProgressSteps {
        let ratio = self
            .validator
            .completion_ratio_where(&self.values(), |field| self.on_page(field));
        let steps = ProgressSteps::new(ratio, self.config.progress.step_count);
        self.surface.render_progress(&steps);
        steps
    }

    pub fn on_focus(&mut self, field: FieldId) -> ProgressSteps {
        self.surface.set_field_focused(field, true);
        self.update_progress()
    }

    pub fn on_blur(&mut self, field: FieldId) -> ValidationResult {
        self.surface.set_field_focused(field, false);
        let result = self.validate_field(field);
        self.update_progress();
        result
    }

    /// Typing clears a stale error; the value is re-checked on blur
    pub fn on_input(&mut self, field: FieldId) -> ProgressSteps {
        self.surface.clear_field_error(field);
        self.update_progress()
    }

    pub fn on_change(&mut self, field: FieldId) -> ProgressSteps {
        self.on_input(field)
    }

    /// Validates the whole form before it posts
    ///
    /// Only fields present on the page are checked. On failure every error is shown and the first one scrolled into view.
    /// On success the processing overlay goes up until
    /// [`finish_processing`](Self::finish_processing).
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let values = self.values();
        let report = self.validator.validate_where(&values, |field| self.on_page(field));
        self.render_report(&report);

        if !report.is_valid() {
            info!(errors = report.error_count(), "submit blocked by invalid fields");
            self.surface.scroll_to_first_error();
            return SubmitOutcome::Blocked { report };
        }

        info!("form valid, submitting");
        self.processing = true;
        self.surface.set_processing(true);
        SubmitOutcome::Proceed { values }
    }

    pub fn finish_processing(&mut self) {
        if self.processing {
            self.processing = false;
            self.surface.set_processing(false);
        }
    }

    /// Writes a predefined record into the form
    pub fn fill_sample(&mut self, profile: SampleProfile) -> ProgressSteps {
        let values = profile.values();
        for (field, value) in values.iter() {
            if self.surface.field_value(field).is_none() {
                debug!(field = %field, "sample field not on page, skipped");
                continue;
            }
            self.surface.set_field_value(field, value);
            self.surface.clear_field_error(field);
            self.surface.highlight_autofill(field);
        }
        info!(profile = %profile, "filled sample data");

        let steps = self.update_progress();
        self.surface.notify(&Notification::success(format!(
            "Data contoh {} telah diisi!",
            profile.risk_label()
        )));
        steps
    }

    /// Shares a rendered prediction, downgrading failures to notifications
    pub fn share_result<T: ShareTarget + ?Sized>(
        &mut self,
        target: &mut T,
        result: &str,
        confidence: &str,
        url: &str,
        origin: &str,
    ) -> ShareOutcome {
        let payload = SharePayload::new(&self.config.share.title, result, confidence, url, origin);
        share_result(target, &mut self.surface, &payload)
    }

    pub fn dispatch(&mut self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::Focus(field) => EventOutcome::Progress(self.on_focus(field)),
            FormEvent::Blur(field) => EventOutcome::Validated(self.on_blur(field)),
            FormEvent::Input(field) => EventOutcome::Progress(self.on_input(field)),
            FormEvent::Change(field) => EventOutcome::Progress(self.on_change(field)),
            FormEvent::Submit => EventOutcome::Submitted(self.on_submit()),
            FormEvent::FillSample(profile) => EventOutcome::Progress(self.fill_sample(profile)),
            FormEvent::ProcessingElapsed => {
                self.finish_processing();
                EventOutcome::ProcessingFinished
            }
        }
    }

    fn render_report(&mut self, report: &FormReport) {
        for (field, result) in report.iter() {
            match result.message.as_deref() {
                Some(message) if !result.valid => self.surface.show_field_error(field, message),
                _ => self.surface.clear_field_error(field),
            }
        }
    }
}
