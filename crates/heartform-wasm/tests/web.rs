//! Browser tests for the JavaScript exports and the DOM surface.
//! Run with `wasm-pack test --headless --firefox crates/heartform-wasm`.

#![cfg(target_arch = "wasm32")]

use heartform_wasm::{completion_ratio, sample_data, step_index, validate_field, validate_form, HeartFormApp};
use serde::Deserialize;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize, Debug)]
struct FieldResult {
    valid: bool,
    message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct FormResult {
    valid: bool,
    fields: BTreeMap<String, FieldResult>,
}

#[wasm_bindgen_test]
fn validate_field_reports_message() {
    let result: FieldResult = serde_wasm_bindgen::from_value(validate_field("age", "150").unwrap()).unwrap();
    assert!(!result.valid);
    assert_eq!(result.message.as_deref(), Some("Usia harus antara 1-120 tahun"));

    assert!(validate_field("umur", "65").is_err());
}

#[wasm_bindgen_test]
fn sample_data_validates_as_form() {
    let data = sample_data("high_risk").unwrap();
    let result: FormResult = serde_wasm_bindgen::from_value(validate_form(data.clone()).unwrap()).unwrap();
    assert!(result.valid);
    assert_eq!(result.fields.len(), 13);
    assert_eq!(completion_ratio(data.clone()).unwrap(), 1.0);
    assert_eq!(step_index(data, 4).unwrap(), 4);
}

#[wasm_bindgen_test]
fn exports_are_plain_objects() {
    let sample = sample_data("high_risk").unwrap();
    assert!(!sample.is_instance_of::<js_sys::Map>());
    assert_eq!(js_sys::Object::keys(sample.unchecked_ref()).length(), 13);
    assert_eq!(js_sys::Reflect::get(&sample, &"age".into()).unwrap().as_string().as_deref(), Some("65"));

    let report = validate_form(sample).unwrap();
    let fields = js_sys::Reflect::get(&report, &"fields".into()).unwrap();
    assert!(!fields.is_instance_of::<js_sys::Map>());
    let age = js_sys::Reflect::get(&fields, &"age".into()).unwrap();
    assert!(age.is_object());
    assert_eq!(js_sys::Reflect::get(&age, &"valid".into()).unwrap().as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn medium_risk_is_exported() {
    assert!(sample_data("medium_risk").is_ok());
    assert!(sample_data("extreme").is_err());
}

fn build_form(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let form = document.create_element("form").unwrap();
    form.set_id(id);
    let mut html = String::new();
    for name in heartform_wasm::field_names() {
        html.push_str(&format!(r#"<div class="form-group"><input name="{name}" required></div>"#));
    }
    form.set_inner_html(&html);
    document.body().unwrap().append_child(&form).unwrap();
    form
}

#[wasm_bindgen_test]
fn app_blocks_empty_submit_and_accepts_sample() {
    let form = build_form("heartForm");
    let mut app = HeartFormApp::new("heartForm", None).unwrap();
    app.mount();

    assert!(!app.on_submit());
    assert_eq!(form.query_selector_all(".error-text").unwrap().length(), 13);

    app.fill_sample("low_risk").unwrap();
    let age = form
        .query_selector("[name=\"age\"]")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    assert_eq!(age.value(), "35");
    assert_eq!(form.query_selector_all(".error-text").unwrap().length(), 0);
    assert!(app.on_submit());

    form.remove();
}

#[wasm_bindgen_test]
async fn processing_overlay_ends_after_delay() {
    let form = build_form("heartFormTimed");
    let config = "[timing]\nprocessing_delay_ms = 20\n".to_string();
    let mut app = HeartFormApp::new("heartFormTimed", Some(config)).unwrap();
    app.fill_sample("medium_risk").unwrap();

    assert!(app.on_submit());
    assert!(app.is_processing());
    let document = web_sys::window().unwrap().document().unwrap();
    let overlays = document.query_selector_all(".loading-overlay").unwrap();
    let overlay = overlays
        .item(overlays.length() - 1)
        .unwrap()
        .dyn_into::<web_sys::Element>()
        .unwrap();
    assert!(overlay.class_list().contains("show"));

    gloo_timers::future::TimeoutFuture::new(100).await;
    assert!(!app.is_processing());
    assert!(!overlay.class_list().contains("show"));

    form.remove();
}
