//! Handlers for the course catalog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::course::{
    CourseListData, CourseResponse, CreateCourseRequest, DeletedCourseData, UpdateCourseRequest,
};
use crate::api::dto::pagination::ListCoursesParams;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a course.
///
/// # Endpoint
///
/// `POST /api/courses` (admin)
///
/// # Errors
///
/// Returns 400 with the collected field violations if the payload fails
/// shape validation, and 400 with a duplicate-slug message if the slug is
/// already taken.
pub async fn create_course_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), AppError> {
    payload.validate()?;

    let new_course = payload
        .into_new_course()
        .ok_or_else(|| AppError::bad_request("Validation failed"))?;

    let course = state.course_service.create_course(new_course).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Course created successfully",
            CourseResponse::from(course),
        )),
    ))
}

/// Lists courses with pagination, filtering and text search.
///
/// # Endpoint
///
/// `GET /api/courses?page=&limit=&upcomingCourse=&courseType=&search=`
///
/// Always succeeds; a page beyond the last one yields an empty `courses`
/// array with the pagination metadata intact.
pub async fn list_courses_handler(
    State(state): State<AppState>,
    Query(params): Query<ListCoursesParams>,
) -> Result<Json<ApiResponse<CourseListData>>, AppError> {
    let filter = params.filter()?;
    let (page, limit) = params.page_and_limit();

    let listing = state
        .course_service
        .list_courses(&filter, page, limit)
        .await?;

    Ok(Json(ApiResponse::new(
        "Courses retrieved successfully",
        CourseListData {
            courses: listing
                .courses
                .into_iter()
                .map(CourseResponse::from)
                .collect(),
            pagination: listing.pagination.into(),
        },
    )))
}

/// Fetches a single course by its canonical identifier.
///
/// # Endpoint
///
/// `GET /api/courses/{id}`
///
/// # Errors
///
/// Returns 400 for a malformed identifier (no store query is issued) and
/// 404 when no course matches.
pub async fn get_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CourseResponse>>, AppError> {
    let course = state.course_service.get_course(&id).await?;

    Ok(Json(ApiResponse::new(
        "Course retrieved successfully",
        CourseResponse::from(course),
    )))
}

/// Fetches a single course by slug.
///
/// # Endpoint
///
/// `GET /api/courses/slug/{slug}`
pub async fn get_course_by_slug_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CourseResponse>>, AppError> {
    let course = state.course_service.get_course_by_slug(&slug).await?;

    Ok(Json(ApiResponse::new(
        "Course retrieved successfully",
        CourseResponse::from(course),
    )))
}

/// Partially updates a course.
///
/// # Endpoint
///
/// `PUT /api/courses/{id}` (admin)
///
/// Only provided fields change. A slug differing from the stored one is
/// re-checked for uniqueness; derived statistics are recomputed before the
/// write.
pub async fn update_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateCourseRequest>,
) -> Result<Json<ApiResponse<CourseResponse>>, AppError> {
    payload.validate()?;

    let course = state
        .course_service
        .update_course(&id, payload.into_patch())
        .await?;

    Ok(Json(ApiResponse::new(
        "Course updated successfully",
        CourseResponse::from(course),
    )))
}

/// Hard-deletes a course.
///
/// # Endpoint
///
/// `DELETE /api/courses/{id}` (admin)
///
/// Responds with the deleted entity's id, title and slug.
pub async fn delete_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DeletedCourseData>>, AppError> {
    let course = state.course_service.delete_course(&id).await?;

    Ok(Json(ApiResponse::new(
        "Course deleted successfully",
        DeletedCourseData::from(course),
    )))
}
