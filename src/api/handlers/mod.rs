//! Request handlers for the HTTP API.

pub mod courses;
pub mod health;

pub use courses::{
    create_course_handler, delete_course_handler, get_course_by_slug_handler, get_course_handler,
    list_courses_handler, update_course_handler,
};
pub use health::health_handler;
