//! API route configuration.
//!
//! Read endpoints are public; mutation endpoints require Bearer token
//! authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_course_handler, delete_course_handler, get_course_by_slug_handler, get_course_handler,
    list_courses_handler, update_course_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Publicly readable catalog routes.
///
/// # Endpoints
///
/// - `GET /courses`             - List courses (paginated, filterable)
/// - `GET /courses/{id}`        - Fetch a course by id
/// - `GET /courses/slug/{slug}` - Fetch a course by slug
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses_handler))
        .route("/courses/{id}", get(get_course_handler))
        .route("/courses/slug/{slug}", get(get_course_by_slug_handler))
}

/// Admin mutation routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /courses`      - Create a course
/// - `PUT    /courses/{id}` - Update a course
/// - `DELETE /courses/{id}` - Delete a course
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", post(create_course_handler))
        .route(
            "/courses/{id}",
            put(update_course_handler).delete(delete_course_handler),
        )
}
