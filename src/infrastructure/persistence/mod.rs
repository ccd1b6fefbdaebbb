//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries.

pub mod pg_course_repository;

pub use pg_course_repository::PgCourseRepository;
