pub mod page;
pub mod record;
pub mod timestamp;

pub use page::PageContext;
pub use record::{ActivityRecord, ActivityType, CourseId, CourseIdError, PageMetadata};
pub use timestamp::Timestamp;
