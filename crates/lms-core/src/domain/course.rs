//! Course Entity
//!
//! Courses as browsed on the course explorer, decoded from the remote API.

/// A course with its (optional) module outline
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: u64,
    /// Display name, "Untitled Course" when the API sent none
    pub name: String,
    /// Price as sent by the API, without currency symbol
    pub price: String,
    pub is_published: bool,
    /// None when the API sent no module outline at all
    pub modules: Option<Vec<CourseModule>>,
}

impl Course {
    pub const UNTITLED: &'static str = "Untitled Course";

    pub fn display_price(&self) -> String {
        format!("₹{}", self.price)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_published { "Published" } else { "Unpublished" }
    }

    /// Whether the card shows an expand toggle
    pub fn has_modules(&self) -> bool {
        self.modules.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseModule {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub content_items: Vec<ContentItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    Video,
    #[default]
    Document,
}

impl ContentType {
    pub fn from_str(s: &str) -> Self {
        match s {
            "video" => ContentType::Video,
            _ => ContentType::Document,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ContentType::Video => "🎥",
            ContentType::Document => "📄",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: u64,
    pub name: String,
    pub content_type: ContentType,
    pub content_url: String,
}

/// Course choice offered in assignment selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOption {
    pub id: u64,
    pub name: String,
}

impl CourseOption {
    /// Use the course name, or `Course #id` when it has none
    pub fn from_course(id: u64, name: Option<&str>) -> Self {
        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("Course #{}", id),
        };
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_option_falls_back_to_id() {
        assert_eq!(CourseOption::from_course(7, None).name, "Course #7");
        assert_eq!(CourseOption::from_course(7, Some("")).name, "Course #7");
        assert_eq!(CourseOption::from_course(7, Some("Rust 101")).name, "Rust 101");
    }

    #[test]
    fn test_content_type_icon() {
        assert_eq!(ContentType::from_str("video").icon(), "🎥");
        assert_eq!(ContentType::from_str("pdf").icon(), "📄");
    }

    #[test]
    fn test_course_labels() {
        let course = Course {
            id: 1,
            name: Course::UNTITLED.to_string(),
            price: "4999".to_string(),
            is_published: false,
            modules: None,
        };
        assert_eq!(course.display_price(), "₹4999");
        assert_eq!(course.status_label(), "Unpublished");
        assert!(!course.has_modules());
    }
}
