//! PostgreSQL implementation of the course repository.
//!
//! Courses are stored in a single `courses` table; the owned value types
//! (statistics, instructors, features, modules, assignments, projects) are
//! JSONB sub-documents on the row, keeping composition in the store without
//! separate collections or foreign keys. Queries are bound at runtime so the
//! crate builds without a reachable database.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Course, CourseModule, CourseStatus, Instructor, NewCourse, Statistics};
use crate::domain::repositories::{CourseFilter, CourseRepository};
use crate::error::AppError;

const COURSE_COLUMNS: &str = "id, title, batch_name, description, slug, image_url, course_type, \
     upcoming_course, statistics, instructors, course_features, course_modules, assignments, \
     projects, created_at, updated_at";

/// PostgreSQL repository for course storage and retrieval.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn insert(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let sql = format!(
            "INSERT INTO courses (title, batch_name, description, slug, image_url, course_type, \
             upcoming_course, statistics, instructors, course_features, course_modules, \
             assignments, projects) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COURSE_COLUMNS}"
        );

        let row = sqlx::query(&sql)
            .bind(&new_course.title)
            .bind(&new_course.batch_name)
            .bind(&new_course.description)
            .bind(&new_course.slug)
            .bind(&new_course.image_url)
            .bind(&new_course.course_type)
            .bind(i16::from(new_course.upcoming_course))
            .bind(Json(&new_course.statistics))
            .bind(Json(&new_course.instructors))
            .bind(Json(&new_course.course_features))
            .bind(Json(&new_course.course_modules))
            .bind(Json(&new_course.assignments))
            .bind(Json(&new_course.projects))
            .fetch_one(self.pool.as_ref())
            .await?;

        map_row(&row).map_err(Into::into)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, AppError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.as_ref().map(map_row).transpose().map_err(Into::into)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, AppError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE slug = $1");

        let row = sqlx::query(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.as_ref().map(map_row).transpose().map_err(Into::into)
    }

    async fn slug_exists(&self, slug: &str, exclude_id: Option<Uuid>) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS( \
                 SELECT 1 FROM courses \
                 WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2) \
             )",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn list(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, AppError> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {COURSE_COLUMNS} FROM courses"));
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder.build().fetch_all(self.pool.as_ref()).await?;

        rows.iter()
            .map(map_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    async fn count(&self, filter: &CourseFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM courses");
        push_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(total)
    }

    async fn update(&self, course: &Course) -> Result<Course, AppError> {
        let sql = format!(
            "UPDATE courses SET title = $1, batch_name = $2, description = $3, slug = $4, \
             image_url = $5, course_type = $6, upcoming_course = $7, statistics = $8, \
             instructors = $9, course_features = $10, course_modules = $11, assignments = $12, \
             projects = $13, updated_at = NOW() \
             WHERE id = $14 \
             RETURNING {COURSE_COLUMNS}"
        );

        let row = sqlx::query(&sql)
            .bind(&course.title)
            .bind(&course.batch_name)
            .bind(&course.description)
            .bind(&course.slug)
            .bind(&course.image_url)
            .bind(&course.course_type)
            .bind(i16::from(course.upcoming_course))
            .bind(Json(&course.statistics))
            .bind(Json(&course.instructors))
            .bind(Json(&course.course_features))
            .bind(Json(&course.course_modules))
            .bind(Json(&course.assignments))
            .bind(Json(&course.projects))
            .bind(course.id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match row {
            Some(row) => map_row(&row).map_err(Into::into),
            None => Err(AppError::not_found("Course not found")),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Course>, AppError> {
        let sql = format!("DELETE FROM courses WHERE id = $1 RETURNING {COURSE_COLUMNS}");

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.as_ref().map(map_row).transpose().map_err(Into::into)
    }
}

/// Appends WHERE clauses for the filter parameters actually supplied.
///
/// Search goes through the GIN text index: `plainto_tsquery` against the
/// title + description vector, relevance-matched rather than substring.
fn push_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a CourseFilter) {
    let mut separated = false;
    let mut prefix = |builder: &mut QueryBuilder<'a, Postgres>| {
        builder.push(if separated { " AND " } else { " WHERE " });
        separated = true;
    };

    if let Some(upcoming) = filter.upcoming {
        prefix(builder);
        builder.push("upcoming_course = ");
        builder.push_bind(i16::from(upcoming));
    }

    if let Some(course_type) = &filter.course_type {
        prefix(builder);
        builder.push("course_type = ");
        builder.push_bind(course_type.as_str());
    }

    if let Some(search) = &filter.search {
        prefix(builder);
        builder.push(
            "to_tsvector('english', title || ' ' || description) @@ plainto_tsquery('english', ",
        );
        builder.push_bind(search.as_str());
        builder.push(")");
    }
}

fn map_row(row: &PgRow) -> Result<Course, sqlx::Error> {
    let status: i16 = row.try_get("upcoming_course")?;
    let upcoming_course =
        CourseStatus::try_from(status).map_err(|e| sqlx::Error::ColumnDecode {
            index: "upcoming_course".to_string(),
            source: e.into(),
        })?;

    Ok(Course {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        batch_name: row.try_get("batch_name")?,
        description: row.try_get("description")?,
        slug: row.try_get("slug")?,
        image_url: row.try_get("image_url")?,
        course_type: row.try_get("course_type")?,
        upcoming_course,
        statistics: row.try_get::<Json<Statistics>, _>("statistics")?.0,
        instructors: row.try_get::<Json<Vec<Instructor>>, _>("instructors")?.0,
        course_features: row.try_get::<Json<Vec<String>>, _>("course_features")?.0,
        course_modules: row.try_get::<Json<Vec<CourseModule>>, _>("course_modules")?.0,
        assignments: row.try_get::<Json<Vec<String>>, _>("assignments")?.0,
        projects: row.try_get::<Json<Vec<String>>, _>("projects")?.0,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(filter: &CourseFilter) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT count(*) FROM courses");
        push_filter(&mut builder, filter);
        builder.sql().to_string()
    }

    #[test]
    fn test_push_filter_without_filters_adds_no_clause() {
        assert_eq!(
            rendered(&CourseFilter::default()),
            "SELECT count(*) FROM courses"
        );
    }

    #[test]
    fn test_push_filter_single_filter_opens_with_where() {
        let filter = CourseFilter {
            course_type: Some("live".to_string()),
            ..CourseFilter::default()
        };

        assert_eq!(
            rendered(&filter),
            "SELECT count(*) FROM courses WHERE course_type = $1"
        );
    }

    #[test]
    fn test_push_filter_chains_later_filters_with_and() {
        let filter = CourseFilter {
            upcoming: Some(CourseStatus::Upcoming),
            course_type: Some("live".to_string()),
            search: Some("systems".to_string()),
        };

        assert_eq!(
            rendered(&filter),
            "SELECT count(*) FROM courses WHERE upcoming_course = $1 AND course_type = $2 \
             AND to_tsvector('english', title || ' ' || description) @@ \
             plainto_tsquery('english', $3)"
        );
    }

    #[test]
    fn test_push_filter_search_alone_opens_with_where() {
        let filter = CourseFilter {
            search: Some("systems".to_string()),
            ..CourseFilter::default()
        };

        let sql = rendered(&filter);
        assert!(sql.contains(" WHERE to_tsvector"));
        assert!(!sql.contains(" AND "));
    }
}
