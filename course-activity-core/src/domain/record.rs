use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course identifier as declared by the page template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CourseId(i64);

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CourseIdError {
    #[error("Course id is missing")]
    Missing,

    #[error("Course id is not numeric: {0:?}")]
    NotNumeric(String),
}

impl CourseId {
    pub fn new(id: i64) -> Self {
        CourseId(id)
    }

    /// Parse the raw meta tag content (surrounding whitespace is ignored)
    pub fn parse(raw: &str) -> Result<Self, CourseIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CourseIdError::Missing);
        }

        trimmed
            .parse::<i64>()
            .map(CourseId)
            .map_err(|_| CourseIdError::NotNumeric(raw.to_string()))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for CourseId {
    type Err = CourseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseId::parse(s)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of learning activity reported to the analytics endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Time spent with a learning page open
    PageView,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::PageView => write!(f, "page_view"),
        }
    }
}

/// Page details captured when recording starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageMetadata {
    pub page_url: String,
    pub page_title: String,
}

impl PageMetadata {
    pub fn new(page_url: impl Into<String>, page_title: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            page_title: page_title.into(),
        }
    }
}

/// Body of the activity beacon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityRecord {
    pub course_id: CourseId,

    pub activity_type: ActivityType,

    /// Whole seconds; zero until the record is about to be sent
    pub duration: u64,

    pub metadata: PageMetadata,
}

impl ActivityRecord {
    /// Start a page-view record with a zero duration
    pub fn page_view(course_id: CourseId, metadata: PageMetadata) -> Self {
        Self {
            course_id,
            activity_type: ActivityType::PageView,
            duration: 0,
            metadata,
        }
    }

    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// JSON schema of the beacon body
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ActivityRecord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_id() {
        assert_eq!(CourseId::parse("42"), Ok(CourseId::new(42)));
        assert_eq!(CourseId::parse(" 7 \n"), Ok(CourseId::new(7)));
        assert_eq!(CourseId::parse("-3"), Ok(CourseId::new(-3)));
    }

    #[test]
    fn test_parse_course_id_missing() {
        assert_eq!(CourseId::parse(""), Err(CourseIdError::Missing));
        assert_eq!(CourseId::parse("   "), Err(CourseIdError::Missing));
    }

    #[test]
    fn test_parse_course_id_not_numeric() {
        assert_eq!(
            CourseId::parse("abc"),
            Err(CourseIdError::NotNumeric("abc".to_string()))
        );
        assert!(matches!(
            CourseId::parse("42abc"),
            Err(CourseIdError::NotNumeric(_))
        ));
        assert!(matches!(
            "4.2".parse::<CourseId>(),
            Err(CourseIdError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_page_view_record_wire_format() {
        let record = ActivityRecord::page_view(
            CourseId::new(42),
            PageMetadata::new("/course/42/chapter/1", "Chapter 1"),
        )
        .with_duration(12);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "course_id": 42,
                "activity_type": "page_view",
                "duration": 12,
                "metadata": {
                    "page_url": "/course/42/chapter/1",
                    "page_title": "Chapter 1"
                }
            })
        );
    }

    #[test]
    fn test_new_record_has_zero_duration() {
        let record = ActivityRecord::page_view(CourseId::new(1), PageMetadata::new("/", "Home"));
        assert_eq!(record.duration, 0);
        assert_eq!(record.activity_type, ActivityType::PageView);
        assert_eq!(record.activity_type.to_string(), "page_view");
    }

    #[test]
    fn test_json_schema_lists_wire_fields() {
        let schema = serde_json::to_value(ActivityRecord::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();

        for field in ["course_id", "activity_type", "duration", "metadata"] {
            assert!(properties.contains_key(field), "missing {}", field);
        }
    }
}
