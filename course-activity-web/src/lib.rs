//! # Course Activity Web
//!
//! Browser entry point: wires the page widgets and the activity recorder once
//! the document is ready.

pub mod capabilities;
pub mod dom;
pub mod error;
pub mod filters;
pub mod page;
pub mod recording;
pub mod widgets;

use course_activity_core::RecorderConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use error::WebError;
pub use page::read_page_context;
pub use recording::setup_activity_recording;

#[wasm_bindgen(start)]
pub fn start() {
    tracing_wasm::set_as_global_default();

    match dom::document() {
        Ok(document) => {
            let ready = document.clone();
            dom::on_document_ready(&document, move || {
                init_page(&ready, &RecorderConfig::new());
            });
        }
        Err(e) => tracing::error!("Page scripts not started: {}", e),
    }
}

/// Which page setup steps ran and which failed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub completed: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

impl InitReport {
    fn record<T>(&mut self, step: &'static str, result: Result<T, WebError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.completed.push(step);
                Some(value)
            }
            Err(e) => {
                tracing::warn!("{}: {}", step, e);
                self.failed.push(step);
                None
            }
        }
    }
}

/// Wire every widget on an already parsed document.
///
/// A failing step is logged and does not stop the others.
pub fn init_page(document: &Document, config: &RecorderConfig) -> InitReport {
    let mut report = InitReport::default();

    if let Some(count) = report.record("tooltips", widgets::setup_tooltips(document)) {
        if count > 0 {
            tracing::debug!("Activated {} tooltips", count);
        }
    }
    report.record(
        "delete confirmations",
        widgets::setup_delete_confirmations(document),
    );
    report.record("form validation", widgets::setup_form_validation(document));
    report.record(
        "activity recording",
        recording::setup_activity_recording(document, config),
    );
    report.record("course filters", filters::setup_course_filters(document));

    report
}
