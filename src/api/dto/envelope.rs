//! Success envelope shared by every endpoint.
//!
//! Failures render the matching shape (`success: false` plus optional field
//! errors) via [`crate::error::AppError`].

use serde::Serialize;

/// `{"success": true, "message": ..., "data": ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = ApiResponse::new("Course retrieved successfully", 7);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Course retrieved successfully");
        assert_eq!(json["data"], 7);
    }
}
