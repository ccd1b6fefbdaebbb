//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates admin requests using a Bearer token from the
/// Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or malformed
/// - Token does not match the configured admin credential
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Access denied. No token provided."))?;

    let req = Request::from_parts(parts, body);

    st.auth_service.verify(&token)?;

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCourseRepository;
    use axum::{Router, http::StatusCode, middleware, routing::get};
    use axum_test::TestServer;
    use serde_json::Value;
    use std::sync::Arc;

    async fn protected_handler() -> &'static str {
        "ok"
    }

    fn make_server() -> TestServer {
        let state = AppState::new(Arc::new(MockCourseRepository::new()), "admin");
        let app = Router::new()
            .route("/guarded", get(protected_handler))
            .route_layer(middleware::from_fn_with_state(state.clone(), layer))
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let server = make_server();

        let response = server.get("/guarded").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Access denied. No token provided.");
    }

    #[tokio::test]
    async fn test_wrong_token_rejected() {
        let server = make_server();

        let response = server
            .get("/guarded")
            .authorization_bearer("not-the-token")
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid token provided.");
    }

    #[tokio::test]
    async fn test_valid_token_passes_through() {
        let server = make_server();

        let response = server.get("/guarded").authorization_bearer("admin").await;

        response.assert_status_ok();
    }
}
