//! Business logic services for the application layer.

pub mod auth_service;
pub mod course_service;

pub use auth_service::AuthService;
pub use course_service::{CourseListing, CourseService, PageInfo};
