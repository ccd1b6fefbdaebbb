//! Course aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{CourseModule, Instructor, Statistics};

/// Publication state of a course, carried on the wire as `0` or `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum CourseStatus {
    /// Published and running (`0`).
    #[default]
    Published,
    /// Announced but not yet live (`1`).
    Upcoming,
}

impl TryFrom<i16> for CourseStatus {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CourseStatus::Published),
            1 => Ok(CourseStatus::Upcoming),
            other => Err(format!("invalid course status: {other}")),
        }
    }
}

impl From<CourseStatus> for i16 {
    fn from(status: CourseStatus) -> Self {
        match status {
            CourseStatus::Published => 0,
            CourseStatus::Upcoming => 1,
        }
    }
}

/// A course with its owned instructors, modules and statistics.
///
/// The aggregate is the sole access path to its value types; nothing outside
/// references an instructor or module independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Total number of lessons across all modules. Computed on read, never
    /// persisted.
    pub fn total_lessons(&self) -> usize {
        self.course_modules.iter().map(|m| m.lessons.len()).sum()
    }

    /// Recomputes the derived statistics counters from the current array
    /// lengths. Must run immediately before every persistence write so an
    /// update that adds or removes modules, assignments or projects keeps
    /// the statistics consistent.
    pub fn derive_statistics(&mut self) {
        self.statistics.derive_counts(
            self.course_modules.len(),
            self.assignments.len(),
            self.projects.len(),
        );
    }

    /// Merges a partial update into the course. Absent fields are left
    /// unchanged; a present `statistics` replaces the whole value (its
    /// derived counters are recomputed before the write regardless).
    pub fn apply_patch(&mut self, patch: CoursePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(batch_name) = patch.batch_name {
            self.batch_name = batch_name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(course_type) = patch.course_type {
            self.course_type = course_type;
        }
        if let Some(upcoming_course) = patch.upcoming_course {
            self.upcoming_course = upcoming_course;
        }
        if let Some(statistics) = patch.statistics {
            self.statistics = statistics;
        }
        if let Some(instructors) = patch.instructors {
            self.instructors = instructors;
        }
        if let Some(course_features) = patch.course_features {
            self.course_features = course_features;
        }
        if let Some(course_modules) = patch.course_modules {
            self.course_modules = course_modules;
        }
        if let Some(assignments) = patch.assignments {
            self.assignments = assignments;
        }
        if let Some(projects) = patch.projects {
            self.projects = projects;
        }
    }

    /// Reduced projection for list displays.
    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            batch_name: self.batch_name.clone(),
            image_url: self.image_url.clone(),
            course_type: self.course_type.clone(),
            upcoming_course: self.upcoming_course,
            statistics: self.statistics.clone(),
            instructor_count: self.instructors.len(),
            module_count: self.statistics.module_count,
            total_lessons: self.total_lessons(),
        }
    }
}

/// Input data for creating a new course. Shape-validated upstream; derived
/// statistics are recomputed before the insert.
#[derive(Debug, Clone)]
pub struct NewCourse {
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
}

impl NewCourse {
    /// See [`Course::derive_statistics`].
    pub fn derive_statistics(&mut self) {
        self.statistics.derive_counts(
            self.course_modules.len(),
            self.assignments.len(),
            self.projects.len(),
        );
    }
}

/// Partial update for an existing course. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub batch_name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub course_type: Option<String>,
    pub upcoming_course: Option<CourseStatus>,
    pub statistics: Option<Statistics>,
    pub instructors: Option<Vec<Instructor>>,
    pub course_features: Option<Vec<String>>,
    pub course_modules: Option<Vec<CourseModule>>,
    pub assignments: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
}

/// Reduced course view exposed by [`Course::summary`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub batch_name: String,
    pub image_url: String,
    pub course_type: String,
    pub upcoming_course: CourseStatus,
    pub statistics: Statistics,
    pub instructor_count: usize,
    pub module_count: i64,
    pub total_lessons: usize,
}
