//! DTOs for course create, update and response bodies.
//!
//! The two request types carry the two validation rule sets: every field of
//! [`CreateCourseRequest`] is declared `Option` so a missing field surfaces
//! as a collected `required` violation instead of a deserialization error,
//! while [`UpdateCourseRequest`] applies the same per-field constraints only
//! to the fields actually present.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::{
    Course, CourseModule, CoursePatch, CourseStatus, Instructor, NewCourse, Statistics,
};

/// Compiled regex for slug validation.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Request body for course creation. All constraints required.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(required(message = "Course title is required"))]
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: Option<String>,

    #[validate(required(message = "Batch name is required"))]
    #[validate(length(min = 1, message = "Batch name is required"))]
    pub batch_name: Option<String>,

    #[validate(required(message = "Course description is required"))]
    #[validate(length(min = 10, message = "Description must be at least 10 characters long"))]
    pub description: Option<String>,

    #[validate(required(message = "Course slug is required"))]
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "Slug can only contain lowercase letters, numbers, and hyphens"
    ))]
    pub slug: Option<String>,

    #[validate(required(message = "Course image URL is required"))]
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(required(message = "Course type is required"))]
    #[validate(length(min = 1, message = "Course type is required"))]
    pub course_type: Option<String>,

    // Defaults to published (0) when absent.
    #[validate(range(min = 0, max = 1, message = "Upcoming course must be either 0 or 1"))]
    pub upcoming_course: Option<i16>,

    #[validate(required(message = "Course statistics are required"))]
    #[validate(nested)]
    pub statistics: Option<StatisticsPayload>,

    #[validate(required(message = "At least one instructor is required"))]
    #[validate(length(min = 1, message = "At least one instructor is required"))]
    #[validate(nested)]
    pub instructors: Option<Vec<InstructorPayload>>,

    #[validate(required(message = "Course features are required"))]
    #[validate(length(min = 1, message = "At least one course feature is required"))]
    #[validate(custom(function = non_empty_features))]
    pub course_features: Option<Vec<String>>,

    #[validate(required(message = "Course modules are required"))]
    #[validate(length(min = 1, message = "At least one course module is required"))]
    #[validate(nested)]
    pub course_modules: Option<Vec<CourseModulePayload>>,

    #[validate(custom(function = non_empty_assignments))]
    pub assignments: Option<Vec<String>>,

    #[validate(custom(function = non_empty_projects))]
    pub projects: Option<Vec<String>>,
}

impl CreateCourseRequest {
    /// Converts a validated payload into domain input. Returns `None` only
    /// when a required field is absent, which validation has already ruled
    /// out.
    pub fn into_new_course(self) -> Option<NewCourse> {
        Some(NewCourse {
            title: self.title?,
            batch_name: self.batch_name?,
            description: self.description?,
            slug: self.slug?,
            image_url: self.image_url?,
            course_type: self.course_type?,
            upcoming_course: CourseStatus::try_from(self.upcoming_course.unwrap_or(0)).ok()?,
            statistics: self.statistics?.into_statistics()?,
            instructors: self
                .instructors?
                .into_iter()
                .filter_map(InstructorPayload::into_instructor)
                .collect(),
            course_features: self.course_features?,
            course_modules: self
                .course_modules?
                .into_iter()
                .filter_map(CourseModulePayload::into_module)
                .collect(),
            assignments: self.assignments.unwrap_or_default(),
            projects: self.projects.unwrap_or_default(),
        })
    }
}

/// Request body for partial course updates. Absent fields are skipped;
/// present fields obey the same constraints as creation.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Batch name cannot be empty"))]
    pub batch_name: Option<String>,

    #[validate(length(min = 10, message = "Description must be at least 10 characters long"))]
    pub description: Option<String>,

    #[validate(regex(
        path = *SLUG_REGEX,
        message = "Slug can only contain lowercase letters, numbers, and hyphens"
    ))]
    pub slug: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(length(min = 1, message = "Course type cannot be empty"))]
    pub course_type: Option<String>,

    #[validate(range(min = 0, max = 1, message = "Upcoming course must be either 0 or 1"))]
    pub upcoming_course: Option<i16>,

    #[validate(nested)]
    pub statistics: Option<StatisticsPayload>,

    #[validate(length(min = 1, message = "At least one instructor is required"))]
    #[validate(nested)]
    pub instructors: Option<Vec<InstructorPayload>>,

    #[validate(length(min = 1, message = "At least one course feature is required"))]
    #[validate(custom(function = non_empty_features))]
    pub course_features: Option<Vec<String>>,

    #[validate(length(min = 1, message = "At least one course module is required"))]
    #[validate(nested)]
    pub course_modules: Option<Vec<CourseModulePayload>>,

    #[validate(custom(function = non_empty_assignments))]
    pub assignments: Option<Vec<String>>,

    #[validate(custom(function = non_empty_projects))]
    pub projects: Option<Vec<String>>,
}

impl UpdateCourseRequest {
    /// Converts a validated payload into a domain patch.
    pub fn into_patch(self) -> CoursePatch {
        CoursePatch {
            title: self.title,
            batch_name: self.batch_name,
            description: self.description,
            slug: self.slug,
            image_url: self.image_url,
            course_type: self.course_type,
            upcoming_course: self
                .upcoming_course
                .and_then(|raw| CourseStatus::try_from(raw).ok()),
            statistics: self.statistics.and_then(StatisticsPayload::into_statistics),
            instructors: self.instructors.map(|instructors| {
                instructors
                    .into_iter()
                    .filter_map(InstructorPayload::into_instructor)
                    .collect()
            }),
            course_features: self.course_features,
            course_modules: self.course_modules.map(|modules| {
                modules
                    .into_iter()
                    .filter_map(CourseModulePayload::into_module)
                    .collect()
            }),
            assignments: self.assignments,
            projects: self.projects,
        }
    }
}

/// Statistics sub-document on the wire.
///
/// The derived counters (`moduleCount`, `assignmentCount`, `projectCount`)
/// are accepted for compatibility but discarded; they are recomputed from
/// the owning course before every write.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsPayload {
    #[validate(range(min = 0, message = "Enrolled students must be a positive number"))]
    pub enrolled_students: Option<i64>,

    pub module_count: Option<i64>,
    pub project_count: Option<i64>,
    pub assignment_count: Option<i64>,

    #[validate(required(message = "Price is required"))]
    #[validate(range(min = 0.0, message = "Price must be a positive number"))]
    pub price: Option<f64>,

    #[validate(required(message = "Original price is required"))]
    #[validate(range(min = 0.0, message = "Original price must be a positive number"))]
    pub original_price: Option<f64>,
}

impl StatisticsPayload {
    fn into_statistics(self) -> Option<Statistics> {
        Some(Statistics {
            enrolled_students: self.enrolled_students.unwrap_or(0),
            module_count: 0,
            project_count: 0,
            assignment_count: 0,
            price: self.price?,
            original_price: self.original_price?,
        })
    }
}

/// Instructor sub-document on the wire.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InstructorPayload {
    #[validate(required(message = "Instructor name is required"))]
    #[validate(length(min = 1, message = "Instructor name is required"))]
    pub name: Option<String>,

    #[validate(required(message = "Instructor role is required"))]
    #[validate(length(min = 1, message = "Instructor role is required"))]
    pub role: Option<String>,

    #[validate(required(message = "Instructor bio is required"))]
    #[validate(length(min = 1, message = "Instructor bio is required"))]
    pub bio: Option<String>,

    #[validate(required(message = "Instructor image URL is required"))]
    #[validate(url(message = "Instructor image URL must be a valid URL"))]
    pub image_url: Option<String>,
}

impl InstructorPayload {
    fn into_instructor(self) -> Option<Instructor> {
        Some(Instructor {
            name: self.name?,
            role: self.role?,
            bio: self.bio?,
            image_url: self.image_url?,
        })
    }
}

/// Course module sub-document on the wire.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseModulePayload {
    #[validate(required(message = "Module title is required"))]
    #[validate(length(min = 1, message = "Module title is required"))]
    pub title: Option<String>,

    #[validate(required(message = "At least one lesson is required per module"))]
    #[validate(length(min = 1, message = "At least one lesson is required per module"))]
    #[validate(custom(function = non_empty_lessons))]
    pub lessons: Option<Vec<String>>,
}

impl CourseModulePayload {
    fn into_module(self) -> Option<CourseModule> {
        Some(CourseModule {
            title: self.title?,
            lessons: self.lessons?,
        })
    }
}

/// JSON representation of a full course, including the read-side derived
/// `totalLessons`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub batch_name: String,
    pub description: String,
    pub slug: String,
    pub image_url: String,
    pub course_type: String,
    pub upcoming_course: CourseStatus,
    pub statistics: Statistics,
    pub instructors: Vec<Instructor>,
    pub course_features: Vec<String>,
    pub course_modules: Vec<CourseModule>,
    pub assignments: Vec<String>,
    pub projects: Vec<String>,
    pub total_lessons: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let total_lessons = course.total_lessons();
        Self {
            id: course.id,
            title: course.title,
            batch_name: course.batch_name,
            description: course.description,
            slug: course.slug,
            image_url: course.image_url,
            course_type: course.course_type,
            upcoming_course: course.upcoming_course,
            statistics: course.statistics,
            instructors: course.instructors,
            course_features: course.course_features,
            course_modules: course.course_modules,
            assignments: course.assignments,
            projects: course.projects,
            total_lessons,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// Listing payload: one page of courses plus pagination metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListData {
    pub courses: Vec<CourseResponse>,
    pub pagination: PaginationMeta,
}

/// Payload returned after a hard delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCourseData {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
}

impl From<Course> for DeletedCourseData {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            slug: course.slug,
        }
    }
}

fn all_items_non_empty(
    items: &[String],
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.trim().is_empty()) {
        return Err(ValidationError::new(code).with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

fn non_empty_features(items: &[String]) -> Result<(), ValidationError> {
    all_items_non_empty(items, "course_feature", "Course feature cannot be empty")
}

fn non_empty_lessons(items: &[String]) -> Result<(), ValidationError> {
    all_items_non_empty(items, "lesson", "Lesson content cannot be empty")
}

fn non_empty_assignments(items: &[String]) -> Result<(), ValidationError> {
    all_items_non_empty(items, "assignment", "Assignment content cannot be empty")
}

fn non_empty_projects(items: &[String]) -> Result<(), ValidationError> {
    all_items_non_empty(items, "project", "Project content cannot be empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    fn valid_create_payload() -> serde_json::Value {
        json!({
            "title": "Intro to Systems",
            "batchName": "Fall-24",
            "description": "A ten-plus character description",
            "slug": "intro-to-systems",
            "imageUrl": "https://x.test/i.png",
            "courseType": "self-paced",
            "upcomingCourse": 0,
            "statistics": { "price": 100, "originalPrice": 150 },
            "instructors": [
                { "name": "A", "role": "Lead", "bio": "bio text", "imageUrl": "https://x.test/a.png" }
            ],
            "courseFeatures": ["Feature A"],
            "courseModules": [
                { "title": "M1", "lessons": ["L1", "L2"] }
            ]
        })
    }

    fn violations(request: &impl Validate) -> Vec<(String, String)> {
        let AppError::Validation { errors, .. } =
            AppError::from(request.validate().unwrap_err())
        else {
            panic!("expected validation error");
        };
        errors.into_iter().map(|e| (e.field, e.message)).collect()
    }

    #[test]
    fn test_valid_create_payload_passes_and_converts() {
        let request: CreateCourseRequest =
            serde_json::from_value(valid_create_payload()).unwrap();
        request.validate().unwrap();

        let new_course = request.into_new_course().unwrap();
        assert_eq!(new_course.slug, "intro-to-systems");
        assert_eq!(new_course.upcoming_course, CourseStatus::Published);
        assert_eq!(new_course.instructors.len(), 1);
        assert_eq!(new_course.course_modules[0].lessons.len(), 2);
        assert!(new_course.assignments.is_empty());
        assert!(new_course.projects.is_empty());
    }

    #[test]
    fn test_create_ignores_caller_supplied_counters() {
        let mut payload = valid_create_payload();
        payload["statistics"]["moduleCount"] = json!(99);
        payload["statistics"]["assignmentCount"] = json!(99);

        let request: CreateCourseRequest = serde_json::from_value(payload).unwrap();
        request.validate().unwrap();

        let new_course = request.into_new_course().unwrap();
        assert_eq!(new_course.statistics.module_count, 0);
        assert_eq!(new_course.statistics.assignment_count, 0);
    }

    #[test]
    fn test_create_empty_modules_rejected() {
        let mut payload = valid_create_payload();
        payload["courseModules"] = json!([]);

        let request: CreateCourseRequest = serde_json::from_value(payload).unwrap();
        let errors = violations(&request);

        assert!(errors.iter().any(|(field, message)| {
            field == "courseModules" && message == "At least one course module is required"
        }));
    }

    #[test]
    fn test_create_missing_fields_collected_not_fail_fast() {
        let request: CreateCourseRequest = serde_json::from_value(json!({
            "description": "short",
            "slug": "Bad Slug"
        }))
        .unwrap();

        let errors = violations(&request);

        // One entry per violated rule, all collected.
        assert!(errors.iter().any(|(f, m)| f == "title" && m == "Course title is required"));
        assert!(errors.iter().any(|(f, _)| f == "batchName"));
        assert!(errors.iter().any(|(f, m)| {
            f == "description" && m == "Description must be at least 10 characters long"
        }));
        assert!(errors.iter().any(|(f, m)| {
            f == "slug" && m == "Slug can only contain lowercase letters, numbers, and hyphens"
        }));
        assert!(errors.iter().any(|(f, _)| f == "courseModules"));
        assert!(errors.len() >= 8);
    }

    #[test]
    fn test_create_nested_instructor_violation_path() {
        let mut payload = valid_create_payload();
        payload["instructors"][0]["imageUrl"] = json!("not-a-url");

        let request: CreateCourseRequest = serde_json::from_value(payload).unwrap();
        let errors = violations(&request);

        assert!(errors.iter().any(|(field, message)| {
            field == "instructors[0].imageUrl"
                && message == "Instructor image URL must be a valid URL"
        }));
    }

    #[test]
    fn test_create_empty_lesson_content_rejected() {
        let mut payload = valid_create_payload();
        payload["courseModules"][0]["lessons"] = json!(["L1", "  "]);

        let request: CreateCourseRequest = serde_json::from_value(payload).unwrap();
        let errors = violations(&request);

        assert!(errors.iter().any(|(field, message)| {
            field == "courseModules[0].lessons" && message == "Lesson content cannot be empty"
        }));
    }

    #[test]
    fn test_create_invalid_upcoming_value() {
        let mut payload = valid_create_payload();
        payload["upcomingCourse"] = json!(2);

        let request: CreateCourseRequest = serde_json::from_value(payload).unwrap();
        let errors = violations(&request);

        assert!(errors.iter().any(|(field, message)| {
            field == "upcomingCourse" && message == "Upcoming course must be either 0 or 1"
        }));
    }

    #[test]
    fn test_update_absent_fields_skip_validation() {
        let request: UpdateCourseRequest = serde_json::from_value(json!({})).unwrap();
        request.validate().unwrap();

        let patch = request.into_patch();
        assert!(patch.title.is_none());
        assert!(patch.statistics.is_none());
    }

    #[test]
    fn test_update_present_fields_still_constrained() {
        let request: UpdateCourseRequest = serde_json::from_value(json!({
            "title": "ab",
            "instructors": []
        }))
        .unwrap();

        let errors = violations(&request);
        assert!(errors.iter().any(|(f, _)| f == "title"));
        assert!(errors.iter().any(|(f, m)| {
            f == "instructors" && m == "At least one instructor is required"
        }));
    }

    #[test]
    fn test_update_converts_to_patch() {
        let request: UpdateCourseRequest = serde_json::from_value(json!({
            "title": "Advanced Systems",
            "upcomingCourse": 1,
            "statistics": { "price": 10, "originalPrice": 20, "enrolledStudents": 5 }
        }))
        .unwrap();
        request.validate().unwrap();

        let patch = request.into_patch();
        assert_eq!(patch.title.as_deref(), Some("Advanced Systems"));
        assert_eq!(patch.upcoming_course, Some(CourseStatus::Upcoming));
        let stats = patch.statistics.unwrap();
        assert_eq!(stats.enrolled_students, 5);
        assert_eq!(stats.price, 10.0);
        // Derived counters always start from zero; the entity recomputes them.
        assert_eq!(stats.module_count, 0);
    }

    #[test]
    fn test_course_response_includes_total_lessons() {
        let course = crate::domain::entities::fixtures::sample_course();
        let response = CourseResponse::from(course);

        assert_eq!(response.total_lessons, 2);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalLessons"], 2);
        assert_eq!(json["batchName"], "Fall-24");
        assert_eq!(json["upcomingCourse"], 0);
    }
}
