//! Query-string rewrite behind the course filter dropdown.

use std::fmt;
use url::form_urlencoded;

pub const COURSE_FILTER_PARAM: &str = "course_id";

/// Ordered `application/x-www-form-urlencoded` parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string; a leading `?` is optional
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(search.as_bytes())
            .into_owned()
            .collect();

        Self { pairs }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first `name` in place and drop later ones, or append
    pub fn set(&mut self, name: &str, value: &str) {
        let mut seen = false;
        self.pairs.retain_mut(|(n, v)| {
            if n != name {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.to_string();
            true
        });

        if !seen {
            self.pairs.push((name.to_string(), value.to_string()));
        }
    }

    pub fn delete(&mut self, name: &str) {
        self.pairs.retain(|(n, _)| n != name);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let serialized = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&serialized)
    }
}

/// Target of the course filter: the current path with `course_id` set to the
/// selected course, or removed when the selection is empty
pub fn course_filter_href(pathname: &str, search: &str, selected: &str) -> String {
    let mut params = QueryParams::parse(search);

    if selected.is_empty() {
        params.delete(COURSE_FILTER_PARAM);
    } else {
        params.set(COURSE_FILTER_PARAM, selected);
    }

    if params.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_course_on_empty_query() {
        assert_eq!(
            course_filter_href("/analytics", "", "42"),
            "/analytics?course_id=42"
        );
    }

    #[test]
    fn test_replaces_existing_course_in_place() {
        assert_eq!(
            course_filter_href("/analytics", "?course_id=1&tab=overview", "42"),
            "/analytics?course_id=42&tab=overview"
        );
    }

    #[test]
    fn test_drops_duplicate_courses() {
        assert_eq!(
            course_filter_href("/a", "?tab=x&course_id=1&course_id=2", "3"),
            "/a?tab=x&course_id=3"
        );
    }

    #[test]
    fn test_empty_selection_removes_course() {
        assert_eq!(
            course_filter_href("/analytics", "?course_id=1&tab=overview", ""),
            "/analytics?tab=overview"
        );
        assert_eq!(course_filter_href("/analytics", "?course_id=1", ""), "/analytics");
    }

    #[test]
    fn test_preserves_encoded_values() {
        assert_eq!(
            course_filter_href("/search", "?q=rust+basics&page=2", "7"),
            "/search?q=rust+basics&page=2&course_id=7"
        );
    }

    #[test]
    fn test_serializes_like_url_search_params() {
        assert_eq!(
            course_filter_href("/a", "?q=a*b~c", "1"),
            "/a?q=a*b%7Ec&course_id=1"
        );
        assert_eq!(
            course_filter_href("/a", "?q=%E4%B8%AD+x%26y", "1"),
            "/a?q=%E4%B8%AD+x%26y&course_id=1"
        );
    }

    #[test]
    fn test_parse() {
        let params = QueryParams::parse("a=1&&b&c=%E4%B8%AD");
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some(""));
        assert_eq!(params.get("c"), Some("中"));
        assert_eq!(params.get("d"), None);
    }
}
