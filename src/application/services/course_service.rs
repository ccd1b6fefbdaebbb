//! Course catalog business logic.
//!
//! All six catalog operations live here: create, list, lookup by id and by
//! slug, update and delete. The service owns slug uniqueness orchestration,
//! derived-statistics recomputation before every write, and pagination math;
//! the repository underneath is a dumb persistence layer.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::{CourseFilter, CourseRepository};
use crate::error::AppError;

const COURSE_NOT_FOUND: &str = "Course not found";
const DUPLICATE_SLUG: &str = "Slug already exists. Please choose a different slug.";

/// One page of listing results with its pagination metadata.
#[derive(Debug, Clone)]
pub struct CourseListing {
    pub courses: Vec<Course>,
    pub pagination: PageInfo,
}

/// Pagination metadata derived from the independent total count.
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: i64,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Service implementing the catalog operations on top of a
/// [`CourseRepository`].
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    /// Creates a course from a shape-validated payload.
    ///
    /// The slug is lowercased before the uniqueness probe so uniqueness is
    /// case-insensitive, and the derived statistics counters are recomputed
    /// from the array lengths immediately before the insert, overriding
    /// anything the caller supplied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the slug is already taken —
    /// either from the pre-check or from the store's unique index if a
    /// concurrent create wins the race between check and write.
    pub async fn create_course(&self, mut new_course: NewCourse) -> Result<Course, AppError> {
        new_course.slug = new_course.slug.to_lowercase();

        if self.repository.slug_exists(&new_course.slug, None).await? {
            return Err(AppError::conflict(DUPLICATE_SLUG));
        }

        new_course.derive_statistics();
        self.repository.insert(new_course).await
    }

    /// Lists courses matching `filter`, newest first, with pagination
    /// metadata computed from an independent total count.
    ///
    /// Non-positive `page` or `limit` fall back to 1. A page beyond the last
    /// one returns an empty set with the metadata intact, never an error;
    /// zero matches yield `total_pages = 0` with both navigation flags off.
    pub async fn list_courses(
        &self,
        filter: &CourseFilter,
        page: u32,
        limit: u32,
    ) -> Result<CourseListing, AppError> {
        let page = page.max(1);
        let limit = limit.max(1);
        let offset = (i64::from(page) - 1) * i64::from(limit);

        let total_items = self.repository.count(filter).await?;
        let courses = self.repository.list(filter, offset, i64::from(limit)).await?;

        let total_pages = if total_items == 0 {
            0
        } else {
            ((total_items + i64::from(limit) - 1) / i64::from(limit)) as u32
        };

        Ok(CourseListing {
            courses,
            pagination: PageInfo {
                current_page: page,
                total_pages,
                total_items,
                items_per_page: limit,
                has_next_page: page < total_pages,
                has_prev_page: page > 1,
            },
        })
    }

    /// Retrieves a course by its canonical identifier.
    ///
    /// A malformed identifier is rejected before any store query, distinct
    /// from not-found.
    pub async fn get_course(&self, id: &str) -> Result<Course, AppError> {
        let course_id = parse_course_id(id)?;

        self.repository
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found(COURSE_NOT_FOUND))
    }

    /// Retrieves a course by slug. Any non-empty slug is attempted verbatim.
    pub async fn get_course_by_slug(&self, slug: &str) -> Result<Course, AppError> {
        if slug.trim().is_empty() {
            return Err(AppError::bad_request("Slug is required"));
        }

        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found(COURSE_NOT_FOUND))
    }

    /// Applies a partial update to a course.
    ///
    /// The slug is re-checked for uniqueness only when the payload carries
    /// one that differs from the stored value, excluding the course itself
    /// so an unchanged slug always passes. Derived statistics are recomputed
    /// after the merge, and the store refreshes `updated_at` on write.
    pub async fn update_course(&self, id: &str, mut patch: CoursePatch) -> Result<Course, AppError> {
        let course_id = parse_course_id(id)?;

        let mut course = self
            .repository
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found(COURSE_NOT_FOUND))?;

        if let Some(slug) = patch.slug.take() {
            let slug = slug.to_lowercase();
            if slug != course.slug
                && self.repository.slug_exists(&slug, Some(course_id)).await?
            {
                return Err(AppError::conflict(DUPLICATE_SLUG));
            }
            patch.slug = Some(slug);
        }

        course.apply_patch(patch);
        course.derive_statistics();

        self.repository.update(&course).await
    }

    /// Hard-deletes a course and returns the deleted entity.
    pub async fn delete_course(&self, id: &str) -> Result<Course, AppError> {
        let course_id = parse_course_id(id)?;

        self.repository
            .delete(course_id)
            .await?
            .ok_or_else(|| AppError::not_found(COURSE_NOT_FOUND))
    }
}

fn parse_course_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::bad_request("Invalid course ID format"))
}
