//! Domain layer containing the course data model and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - The course aggregate and its owned value types
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
