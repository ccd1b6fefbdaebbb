//! Repository trait for course data access.

use crate::domain::entities::{Course, CourseStatus, NewCourse};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Listing filter composed only from the parameters actually supplied.
///
/// `None` fields impose no constraint. `search` uses the store's text-search
/// capability over title and description (relevance-ranked, not substring
/// matching).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub upcoming: Option<CourseStatus>,
    pub course_type: Option<String>,
    pub search: Option<String>,
}

/// Repository interface for course storage.
///
/// Provides CRUD operations plus the slug uniqueness probe and filtered,
/// paginated listing. The store is the sole arbiter of atomicity; the
/// unique index on `slug` backs up the application-level pre-check under
/// concurrent writers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Inserts a new course and returns the stored entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug collides with the unique
    /// index (the race fallback behind [`Self::slug_exists`]).
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Finds a course by its canonical identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, AppError>;

    /// Finds a course by its slug, matched verbatim.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, AppError>;

    /// Returns `true` if any course other than `exclude_id` already uses the
    /// slug. `exclude_id` is the entity's own id during updates, so keeping
    /// an unchanged slug never reads as a collision.
    async fn slug_exists(&self, slug: &str, exclude_id: Option<Uuid>) -> Result<bool, AppError>;

    /// Lists courses matching `filter`, newest first.
    ///
    /// An offset beyond the last matching row yields an empty set, not an
    /// error.
    async fn list(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, AppError>;

    /// Counts all courses matching `filter`, independent of pagination.
    async fn count(&self, filter: &CourseFilter) -> Result<i64, AppError>;

    /// Persists the full state of an existing course and refreshes its
    /// `updated_at`. Returns the stored entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course no longer exists.
    /// Returns [`AppError::Conflict`] on a slug unique-index violation.
    async fn update(&self, course: &Course) -> Result<Course, AppError>;

    /// Hard-deletes a course, returning the deleted entity if it existed.
    async fn delete(&self, id: Uuid) -> Result<Option<Course>, AppError>;
}
