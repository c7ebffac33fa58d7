use crate::dom::window;
use crate::error::WebError;
use course_activity_core::{PageContext, RecorderConfig};
use web_sys::Document;

/// Read the recorder's inbound page contract from the live document
pub fn read_page_context(
    document: &Document,
    config: &RecorderConfig,
) -> Result<PageContext, WebError> {
    let is_student_learning_page = document.query_selector(&config.page_marker)?.is_some();
    let course_id = document
        .query_selector(&config.course_meta_selector())?
        .and_then(|meta| meta.get_attribute("content"));

    Ok(PageContext {
        is_student_learning_page,
        course_id,
        path: window()?.location().pathname()?,
        title: document.title(),
    })
}
