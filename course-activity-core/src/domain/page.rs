/// What the recorder needs to know about the page it runs on.
///
/// Built from the document by the web crate; tests build it directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageContext {
    /// The template marked this page as a student learning page
    pub is_student_learning_page: bool,
    /// Raw content of the course-id meta tag, if the tag exists
    pub course_id: Option<String>,
    /// Path component of the current URL
    pub path: String,
    /// Document title
    pub title: String,
}

impl PageContext {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn student_learning_page(mut self) -> Self {
        self.is_student_learning_page = true;
        self
    }

    pub fn with_course_id(mut self, raw: impl Into<String>) -> Self {
        self.course_id = Some(raw.into());
        self
    }
}
