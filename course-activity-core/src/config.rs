/// Default path of the activity beacon, baked in at build time
pub const DEFAULT_ENDPOINT: &str = env!("ACTIVITY_ENDPOINT");
pub const DEFAULT_PAGE_MARKER: &str = ".student-learning-page";
pub const DEFAULT_COURSE_META_NAME: &str = "course-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Same-origin path the activity beacon is posted to
    pub endpoint: String,
    /// Selector of the element that marks a student learning page
    pub page_marker: String,
    /// `name` attribute of the meta tag carrying the course id
    pub course_meta_name: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Endpoint must be an absolute path, got {0:?}")]
    RelativeEndpoint(String),

    #[error("Page marker selector cannot be empty")]
    EmptyPageMarker,

    #[error("Course meta name cannot be empty")]
    EmptyCourseMetaName,
}

impl RecorderConfig {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_marker: DEFAULT_PAGE_MARKER.to_string(),
            course_meta_name: DEFAULT_COURSE_META_NAME.to_string(),
        }
    }

    /// Like [`RecorderConfig::new`], but a runtime `ACTIVITY_ENDPOINT`
    /// overrides the baked-in endpoint
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("ACTIVITY_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            ..Self::new()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_page_marker(mut self, selector: impl Into<String>) -> Self {
        self.page_marker = selector.into();
        self
    }

    pub fn with_course_meta_name(mut self, name: impl Into<String>) -> Self {
        self.course_meta_name = name.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.starts_with('/') {
            return Err(ConfigError::RelativeEndpoint(self.endpoint.clone()));
        }
        if self.page_marker.trim().is_empty() {
            return Err(ConfigError::EmptyPageMarker);
        }
        if self.course_meta_name.trim().is_empty() {
            return Err(ConfigError::EmptyCourseMetaName);
        }
        Ok(())
    }

    /// Selector matching the course-id meta tag
    pub fn course_meta_selector(&self) -> String {
        format!("meta[name=\"{}\"]", self.course_meta_name)
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self::new()
    }
}
