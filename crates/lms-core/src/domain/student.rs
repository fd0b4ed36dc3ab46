//! Student Entity
//!
//! Students and their course enrollments, managed on the students page.

use chrono::{DateTime, SecondsFormat, Utc};

use super::course::CourseOption;
use super::date::date_part;
use super::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledCourse {
    pub id: u64,
    pub name: String,
    /// RFC 3339 timestamp, empty when unknown
    pub purchase_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub enrolled_courses: Vec<EnrolledCourse>,
}

impl Student {
    /// "First Last", or the username when both names are blank
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Date of the most recent enrollment, or "N/A"
    pub fn last_enrolled(&self) -> String {
        self.enrolled_courses
            .last()
            .and_then(|course| date_part(&course.purchase_date))
            .unwrap_or("N/A")
            .to_string()
    }

    pub fn is_enrolled(&self, course_id: u64) -> bool {
        self.enrolled_courses.iter().any(|c| c.id == course_id)
    }

    /// Enroll in a course, rejecting duplicates
    pub fn assign_course(&mut self, course: &CourseOption, now: DateTime<Utc>) -> DomainResult<()> {
        if self.is_enrolled(course.id) {
            return Err(DomainError::Conflict("Course already assigned.".to_string()));
        }
        self.enrolled_courses.push(EnrolledCourse {
            id: course.id,
            name: course.name.clone(),
            purchase_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        Ok(())
    }

    /// Remove one enrollment, returning it
    pub fn remove_course(&mut self, course_id: u64) -> DomainResult<EnrolledCourse> {
        let index = self
            .enrolled_courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or_else(|| DomainError::NotFound(format!("course {} for {}", course_id, self.email)))?;
        Ok(self.enrolled_courses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_student() -> Student {
        Student {
            id: 1,
            email: "ana@example.com".to_string(),
            username: "ana".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            enrolled_courses: vec![],
        }
    }

    fn rust_course() -> CourseOption {
        CourseOption { id: 3, name: "Rust".to_string() }
    }

    #[test]
    fn test_display_name_fallback() {
        let mut student = make_student();
        assert_eq!(student.display_name(), "ana");
        student.first_name = "Ana".to_string();
        assert_eq!(student.display_name(), "Ana");
        student.last_name = "Lima".to_string();
        assert_eq!(student.display_name(), "Ana Lima");
    }

    #[test]
    fn test_assign_and_last_enrolled() {
        let mut student = make_student();
        assert_eq!(student.last_enrolled(), "N/A");

        let now = Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap();
        student.assign_course(&rust_course(), now).unwrap();
        assert_eq!(student.enrolled_courses.len(), 1);
        assert_eq!(student.enrolled_courses[0].purchase_date, "2024-05-02T09:30:00.000Z");
        assert_eq!(student.last_enrolled(), "2024-05-02");
    }

    #[test]
    fn test_assign_duplicate_is_conflict() {
        let mut student = make_student();
        let now = Utc::now();
        student.assign_course(&rust_course(), now).unwrap();
        let err = student.assign_course(&rust_course(), now).unwrap_err();
        assert_eq!(err, DomainError::Conflict("Course already assigned.".to_string()));
        assert_eq!(student.enrolled_courses.len(), 1);
    }

    #[test]
    fn test_remove_course() {
        let mut student = make_student();
        student.assign_course(&rust_course(), Utc::now()).unwrap();
        let removed = student.remove_course(3).unwrap();
        assert_eq!(removed.name, "Rust");
        assert!(student.enrolled_courses.is_empty());
        assert!(matches!(student.remove_course(3), Err(DomainError::NotFound(_))));
    }
}
