//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, uniqueness checks and derivation rules. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::course_service::CourseService`] - Catalog CRUD, listing and lookups
//! - [`services::auth_service::AuthService`] - Admin credential verification

pub mod services;
