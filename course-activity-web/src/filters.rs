use crate::dom::window;
use crate::error::WebError;
use course_activity_core::filters::course_filter_href;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlSelectElement};

pub const COURSE_FILTER_ID: &str = "courseFilter";

/// Reload the page with `course_id` following the `#courseFilter` selection.
///
/// Returns whether a filter was wired.
pub fn setup_course_filters(document: &Document) -> Result<bool, WebError> {
    let Some(element) = document.get_element_by_id(COURSE_FILTER_ID) else {
        return Ok(false);
    };
    let Ok(select) = element.dyn_into::<HtmlSelectElement>() else {
        tracing::warn!("#{} is not a <select>", COURSE_FILTER_ID);
        return Ok(false);
    };

    let target = select.clone();
    EventListener::new(&select, "change", move |_| {
        if let Err(e) = navigate_to_course(&target.value()) {
            tracing::error!("Course filter navigation failed: {}", e);
        }
    })
    .forget();
    Ok(true)
}

fn navigate_to_course(selected: &str) -> Result<(), WebError> {
    let location = window()?.location();
    let href = course_filter_href(&location.pathname()?, &location.search()?, selected);
    tracing::debug!(%href, "Applying course filter");
    location.set_href(&href)?;
    Ok(())
}
