use super::recorder::{ActivityRecorder, SubmitOutcome};
use crate::capabilities::{Capabilities, UnloadSource};
use crate::config::{ConfigError, RecorderConfig};
use crate::domain::{CourseId, CourseIdError, PageContext, PageMetadata};
use std::cell::RefCell;
use std::rc::Rc;

/// Why recording was not armed for a page
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ArmError {
    #[error("Page is not a student learning page")]
    NotStudentPage,

    #[error(transparent)]
    CourseId(#[from] CourseIdError),

    #[error("Invalid recorder configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ArmError {
    /// The page qualified but the recorder's own configuration is broken
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, ArmError::Config(_))
    }
}

/// Handle to an armed recorder
#[derive(Clone)]
pub struct Registration {
    course_id: CourseId,
    recorder: Rc<RefCell<ActivityRecorder>>,
}

impl Registration {
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn is_sent(&self) -> bool {
        self.recorder.borrow().is_sent()
    }

    pub fn recorder(&self) -> Rc<RefCell<ActivityRecorder>> {
        Rc::clone(&self.recorder)
    }
}

/// Wire up activity recording for the current view.
///
/// Starts timing and registers one unload handler when the page is a student
/// learning page with a numeric course id. Otherwise nothing is started or
/// registered.
pub fn register_activity_recording(
    page: &PageContext,
    config: &RecorderConfig,
    capabilities: Capabilities,
    unload: &mut dyn UnloadSource,
) -> Result<Registration, ArmError> {
    config.validate()?;

    if !page.is_student_learning_page {
        return Err(ArmError::NotStudentPage);
    }

    let raw = page.course_id.as_deref().ok_or(CourseIdError::Missing)?;
    let course_id = CourseId::parse(raw)?;

    let recorder = Rc::new(RefCell::new(ActivityRecorder::start(
        course_id,
        PageMetadata::new(page.path.clone(), page.title.clone()),
        config.endpoint.clone(),
        capabilities,
    )));

    let handler_recorder = Rc::clone(&recorder);
    unload.on_unload(Box::new(move || {
        let Ok(mut recorder) = handler_recorder.try_borrow_mut() else {
            tracing::warn!("Unload fired while the recorder was busy");
            return;
        };
        match recorder.submit_activity() {
            SubmitOutcome::Sent { duration } => {
                tracing::debug!(duration, "Activity beacon dispatched on unload")
            }
            outcome => tracing::trace!(?outcome, "No activity beacon on unload"),
        }
    }));

    Ok(Registration {
        course_id,
        recorder,
    })
}
