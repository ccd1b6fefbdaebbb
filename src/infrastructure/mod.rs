//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer, currently a single
//! concern: PostgreSQL persistence.

pub mod persistence;
