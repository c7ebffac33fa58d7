//! # Course Activity Core
//!
//! Platform-independent pieces of the course analytics frontend: the page-view
//! activity recorder, the capabilities it runs on, and the small pure helpers
//! behind the page widgets.

pub mod application;
pub mod capabilities;
pub mod config;
pub mod domain;
pub mod filters;
pub mod forms;

pub use application::{
    register_activity_recording, ActivityRecorder, ArmError, Registration, SubmitOutcome,
    MIN_REPORTABLE_SECS,
};
pub use capabilities::{
    BeaconRequest, Capabilities, Clock, InstantClock, Spawner, Transport, TransportError,
    UnloadSource,
};
pub use config::{ConfigError, RecorderConfig};
pub use domain::{
    ActivityRecord, ActivityType, CourseId, CourseIdError, PageContext, PageMetadata, Timestamp,
};
