//! `HeartFormApp`: a form controller bound to the page's DOM

use std::cell::RefCell;
use std::rc::Rc;

use heartform::{FieldId, FormConfig, FormController, SampleProfile, ShareOutcome};
use wasm_bindgen::prelude::*;

use crate::dom::{after, DomForm, DomShare};

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn field(name: &str) -> Result<FieldId, JsValue> {
    name.parse().map_err(js_error)
}

/// Form controller exposed to JavaScript
///
/// The page registers its own listeners and forwards them:
///
/// ```javascript
/// const app = new HeartFormApp('heartForm');
/// app.mount();
/// for (const input of form.querySelectorAll('input, select')) {
///     input.addEventListener('focus', () => app.onFocus(input.name));
///     input.addEventListener('blur', () => app.onBlur(input.name));
///     input.addEventListener('input', () => app.onInput(input.name));
/// }
/// form.addEventListener('submit', (e) => { if (!app.onSubmit()) e.preventDefault(); });
/// ```
#[wasm_bindgen]
pub struct HeartFormApp {
    /// Shared with the timer that ends the processing overlay
    controller: Rc<RefCell<FormController<DomForm>>>,
    share: DomShare,
    processing_delay_ms: i32,
}

#[wasm_bindgen]
impl HeartFormApp {
    /// Binds to `<form id={form_id}>`, with an optional heartform.toml body
    #[wasm_bindgen(constructor)]
    pub fn new(form_id: &str, config_toml: Option<String>) -> Result<HeartFormApp, JsValue> {
        let config = match config_toml {
            Some(toml) => FormConfig::from_toml_str(&toml).map_err(|err| js_error(format!("{err:#}")))?,
            None => FormConfig::default(),
        };
        let surface = DomForm::attach(form_id, &config.timing)?;
        let share = DomShare::new(surface.window().clone(), &config.timing);
        let processing_delay_ms = i32::try_from(config.timing.processing_delay_ms).unwrap_or(i32::MAX);

        Ok(Self {
            controller: Rc::new(RefCell::new(FormController::with_config(surface, config))),
            share,
            processing_delay_ms,
        })
    }

    /// Attaches tooltips and draws the progress steps
    pub fn mount(&mut self) {
        self.controller.borrow_mut().mount();
    }

    /// Returns whether the field is valid
    #[wasm_bindgen(js_name = onBlur)]
    pub fn on_blur(&mut self, name: &str) -> Result<bool, JsValue> {
        Ok(self.controller.borrow_mut().on_blur(field(name)?).valid)
    }

    #[wasm_bindgen(js_name = onFocus)]
    pub fn on_focus(&mut self, name: &str) -> Result<(), JsValue> {
        self.controller.borrow_mut().on_focus(field(name)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = onInput)]
    pub fn on_input(&mut self, name: &str) -> Result<(), JsValue> {
        self.controller.borrow_mut().on_input(field(name)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, name: &str) -> Result<(), JsValue> {
        self.controller.borrow_mut().on_change(field(name)?);
        Ok(())
    }

    /// Returns true when the form may post
    ///
    /// The processing overlay is taken down after the configured delay.
    #[wasm_bindgen(js_name = onSubmit)]
    pub fn on_submit(&mut self) -> bool {
        let mut controller = self.controller.borrow_mut();
        if !controller.on_submit().is_proceed() {
            return false;
        }
        let window = controller.surface().window().clone();
        let pending = Rc::downgrade(&self.controller);
        after(&window, self.processing_delay_ms, move || {
            if let Some(controller) = pending.upgrade() {
                if let Ok(mut controller) = controller.try_borrow_mut() {
                    controller.finish_processing();
                }
            }
        });
        true
    }

    /// Ends the processing overlay early
    #[wasm_bindgen(js_name = finishProcessing)]
    pub fn finish_processing(&mut self) {
        self.controller.borrow_mut().finish_processing();
    }

    #[wasm_bindgen(js_name = isProcessing)]
    pub fn is_processing(&self) -> bool {
        self.controller.borrow().is_processing()
    }

    /// Fills `high_risk`, `medium_risk` or `low_risk`
    #[wasm_bindgen(js_name = fillSample)]
    pub fn fill_sample(&mut self, profile: &str) -> Result<(), JsValue> {
        let profile: SampleProfile = profile.parse().map_err(js_error)?;
        self.controller.borrow_mut().fill_sample(profile);
        Ok(())
    }

    /// `[{profile, summary}]` for the autofill menu
    #[wasm_bindgen(js_name = offeredSamples)]
    pub fn offered_samples(&self) -> Result<JsValue, JsValue> {
        let offered: Vec<_> = self
            .controller
            .borrow()
            .offered_samples()
            .iter()
            .map(|profile| crate::SampleOption {
                profile: profile.as_str(),
                summary: profile.summary(),
            })
            .collect();
        crate::to_js(&offered)
    }

    /// Shares the prediction; reads `.prediction-title` and
    /// `.confidence-text` from the page when not given
    #[wasm_bindgen(js_name = shareResult)]
    pub fn share_result(&mut self, result: Option<String>, confidence: Option<String>) -> Result<String, JsValue> {
        let window = self.controller.borrow().surface().window().clone();
        let document = window.document().ok_or_else(|| JsValue::from_str("window has no document"))?;
        let text_of = |selector: &str| {
            document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|element| element.text_content())
                .unwrap_or_default()
        };
        let result = result.unwrap_or_else(|| text_of(".prediction-title"));
        let confidence = confidence.unwrap_or_else(|| text_of(".confidence-text"));
        let location = window.location();
        let url = location.href()?;
        let origin = location.origin()?;

        let outcome = self
            .controller
            .borrow_mut()
            .share_result(&mut self.share, &result, &confidence, &url, &origin);
        Ok(match outcome {
            ShareOutcome::Shared => "shared",
            ShareOutcome::ShareFailed(_) => "share_failed",
            ShareOutcome::Copied => "copied",
            ShareOutcome::CopyFailed(_) => "copy_failed",
            ShareOutcome::Prompted => "prompted",
        }
        .to_string())
    }
}
