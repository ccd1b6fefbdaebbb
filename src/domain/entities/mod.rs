//! Core domain entities representing the catalog data model.
//!
//! [`Course`] is the aggregate root; [`Instructor`], [`Statistics`] and
//! [`CourseModule`] are owned value types with no identity of their own.
//! Separate structs cover creation ([`NewCourse`]) and partial updates
//! ([`CoursePatch`]).

pub mod course;
pub mod values;

pub use course::{Course, CoursePatch, CourseStatus, CourseSummary, NewCourse};
pub use values::{CourseModule, Instructor, Statistics};

/// Shared course fixture for unit tests across the crate.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    pub(crate) fn sample_course() -> Course {
        let now = Utc::now();
        Course {
            id: Uuid::new_v4(),
            title: "Intro to Systems".to_string(),
            batch_name: "Fall-24".to_string(),
            description: "A ten-plus character description".to_string(),
            slug: "intro-to-systems".to_string(),
            image_url: "https://x.test/i.png".to_string(),
            course_type: "self-paced".to_string(),
            upcoming_course: CourseStatus::Published,
            statistics: Statistics {
                enrolled_students: 0,
                module_count: 0,
                project_count: 0,
                assignment_count: 0,
                price: 100.0,
                original_price: 150.0,
            },
            instructors: vec![Instructor {
                name: "A".to_string(),
                role: "Lead".to_string(),
                bio: "bio text".to_string(),
                image_url: "https://x.test/a.png".to_string(),
            }],
            course_features: vec!["Feature A".to_string()],
            course_modules: vec![CourseModule {
                title: "M1".to_string(),
                lessons: vec!["L1".to_string(), "L2".to_string()],
            }],
            assignments: vec![],
            projects: vec![],
            created_at: now,
            updated_at: now,
        }
    }
}
