use crate::dom::query_all;
use crate::error::WebError;
use course_activity_core::forms::{check_password_confirmation, PASSWORD_MISMATCH_MESSAGE};
use gloo::dialogs::{alert, confirm};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Tooltip", catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

fn bootstrap_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("bootstrap")).unwrap_or(false)
}

/// Activate Bootstrap tooltips on `[data-bs-toggle="tooltip"]`
pub fn setup_tooltips(document: &Document) -> Result<usize, WebError> {
    let triggers = query_all(document, r#"[data-bs-toggle="tooltip"]"#)?;
    if triggers.is_empty() {
        return Ok(0);
    }
    if !bootstrap_loaded() {
        tracing::warn!("Bootstrap is not loaded, skipping {} tooltips", triggers.len());
        return Ok(0);
    }

    let mut activated = 0;
    for trigger in &triggers {
        match Tooltip::new(trigger) {
            Ok(_) => activated += 1,
            Err(e) => tracing::warn!("Tooltip failed: {:?}", e),
        }
    }
    Ok(activated)
}

/// Ask for confirmation before following a `[data-confirm]` element
pub fn setup_delete_confirmations(document: &Document) -> Result<(), WebError> {
    for button in query_all(document, "[data-confirm]")? {
        let target = button.clone();
        EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let message = target.get_attribute("data-confirm").unwrap_or_default();
                if !confirm(&message) {
                    event.prevent_default();
                }
            },
        )
        .forget();
    }
    Ok(())
}

/// Native validity on `.needs-validation` forms and the password check on
/// `.password-confirm-form` forms
pub fn setup_form_validation(document: &Document) -> Result<(), WebError> {
    for element in query_all(document, ".needs-validation")? {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if !target.check_validity() {
                    event.prevent_default();
                    event.stop_propagation();
                }
                if let Err(e) = target.class_list().add_1("was-validated") {
                    tracing::warn!("Could not flag form as validated: {:?}", e);
                }
            },
        )
        .forget();
    }

    for form in query_all(document, ".password-confirm-form")? {
        let target = form.clone();
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let password = input_value(&target, ".password");
                let confirmation = input_value(&target, ".confirm-password");
                let check = check_password_confirmation(password.as_deref(), confirmation.as_deref());
                if check.blocks_submit() {
                    event.prevent_default();
                    alert(PASSWORD_MISMATCH_MESSAGE);
                }
            },
        )
        .forget();
    }
    Ok(())
}

fn input_value(form: &Element, selector: &str) -> Option<String> {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}
