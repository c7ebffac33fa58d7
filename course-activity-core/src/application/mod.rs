mod recorder;
mod registration;

pub use recorder::{ActivityRecorder, SubmitOutcome, MIN_REPORTABLE_SECS};
pub use registration::{register_activity_recording, ArmError, Registration};
