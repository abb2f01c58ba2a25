//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. Malformed
//! JSON and failed validation are both answered with 400 and a field-level
//! message.
//!
//! `VehicleIdPath` does the same for the `:id` path segment, so a
//! non-numeric id gets the usual JSON error body instead of plain text.

use axum::async_trait;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::domain::entities::VehicleId;
use crate::error::ErrorResponse;

/// An extractor that deserializes JSON and validates it.
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
pub enum ValidatedJsonRejection {
    /// JSON parsing failed.
    JsonError(JsonRejection),
    /// Validation failed.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let (error, details) = match self {
            Self::JsonError(rejection) => ("Invalid JSON", rejection.body_text()),
            Self::ValidationError(errors) => {
                let mut messages = Vec::new();
                collect_messages("", &errors, &mut messages);
                let details = if messages.is_empty() {
                    "Validation failed".to_string()
                } else {
                    messages.join("; ")
                };
                ("Validation error", details)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details: Some(details),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Flatten nested validation errors into `path.field: message` strings
fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                for e in errs {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    out.push(format!("{}: {}", path, msg));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

/// Vehicle id taken from the `:id` path segment.
pub struct VehicleIdPath(pub VehicleId);

/// Rejection for a missing or non-numeric vehicle id.
pub struct VehicleIdRejection(PathRejection);

impl IntoResponse for VehicleIdRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: "Invalid vehicle id".to_string(),
            details: Some(self.0.body_text()),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for VehicleIdPath
where
    S: Send + Sync,
{
    type Rejection = VehicleIdRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(VehicleIdRejection)?;

        Ok(VehicleIdPath(VehicleId(id)))
    }
}
