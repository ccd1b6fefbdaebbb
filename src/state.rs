//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, CourseService};
use crate::domain::repositories::CourseRepository;

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the services over an injected store handle. The repository is a
    /// trait object so tests can drop in mocks.
    pub fn new(repository: Arc<dyn CourseRepository>, admin_token: &str) -> Self {
        Self {
            course_service: Arc::new(CourseService::new(repository)),
            auth_service: Arc::new(AuthService::new(admin_token)),
        }
    }
}
