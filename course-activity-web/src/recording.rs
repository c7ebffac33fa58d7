use crate::capabilities::{BeforeUnload, FetchTransport, LocalSpawner};
use crate::dom::window;
use crate::error::WebError;
use crate::page::read_page_context;
use course_activity_core::{
    register_activity_recording, Capabilities, InstantClock, RecorderConfig, Registration,
};
use std::rc::Rc;
use web_sys::Document;

/// Arm the activity recorder for this page if it qualifies.
///
/// Returns `Ok(None)` when the page is not a student learning page or has no
/// usable course id.
pub fn setup_activity_recording(
    document: &Document,
    config: &RecorderConfig,
) -> Result<Option<Registration>, WebError> {
    let page = read_page_context(document, config)?;
    let capabilities = Capabilities::new(
        Rc::new(InstantClock),
        Rc::new(FetchTransport),
        Rc::new(LocalSpawner),
    );
    let mut unload = BeforeUnload::new(window()?);

    match register_activity_recording(&page, config, capabilities, &mut unload) {
        Ok(registration) => {
            tracing::info!(course_id = %registration.course_id(), "Recording learning activity");
            Ok(Some(registration))
        }
        Err(e) if e.is_misconfiguration() => {
            tracing::warn!("Activity recording disabled: {}", e);
            Ok(None)
        }
        Err(e) => {
            tracing::debug!("Activity recording not armed: {}", e);
            Ok(None)
        }
    }
}
