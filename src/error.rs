//! Application error type and HTTP response mapping.
//!
//! Every failure the service can surface to a client is one of the
//! [`AppError`] variants. All of them render the same JSON envelope the API
//! speaks everywhere: a `success` flag, a human-readable `message`, and (for
//! validation failures) a list of per-field violations.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use validator::{ValidationErrors, ValidationErrorsKind};

/// A single field-level validation violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub value: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

/// Application-level error taxonomy.
///
/// - `Validation` — one or more shape violations, all collected (also covers
///   malformed identifiers and empty slugs, which are client errors raised
///   before any store query)
/// - `Conflict` — slug uniqueness violation, from the pre-check or from the
///   store's unique index as the race fallback
/// - `NotFound` — a well-formed reference with no matching entity
/// - `Unauthorized` — missing or invalid admin credential
/// - `Internal` — the store or another collaborator failed; logged in full,
///   clients see a generic message
#[derive(Debug)]
pub enum AppError {
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    Conflict {
        message: String,
    },
    NotFound {
        message: String,
    },
    Unauthorized {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl AppError {
    /// A client error with no per-field detail (malformed id, empty slug).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Duplicate slugs deliberately share the 400 status with shape
        // validation; the two stay distinct variants so callers and tests can
        // tell them apart.
        let (status, message, errors) = match self {
            AppError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, message, errors)
            }
            AppError::Conflict { message } => (StatusCode::BAD_REQUEST, message, Vec::new()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, Vec::new()),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message, Vec::new()),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, Vec::new())
            }
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut collected = Vec::new();
        flatten_errors("", &errors, &mut collected);
        AppError::validation("Validation failed", collected)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                if matches!(db.constraint(), Some("courses_slug_key")) {
                    return AppError::conflict(
                        "Slug already exists. Please choose a different slug.",
                    );
                }
                return AppError::conflict("Unique constraint violation");
            }
        }

        tracing::error!(error = ?e, "Database operation failed");
        AppError::internal("Internal server error")
    }
}

/// Walks the validator error tree depth-first, rendering nested paths as
/// `instructors[0].name` and pulling the rejected value out of the rule
/// parameters.
fn flatten_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let segment = camel_case(field);
        let path = if prefix.is_empty() {
            segment
        } else {
            format!("{prefix}.{segment}")
        };

        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    out.push(FieldError {
                        field: path.clone(),
                        message: violation
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| violation.code.to_string()),
                        value: violation
                            .params
                            .get("value")
                            .cloned()
                            .unwrap_or(Value::Null),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

/// Renders a Rust field name the way the wire format spells it
/// (`batch_name` → `batchName`), so validation errors reference the JSON
/// keys clients actually sent.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
